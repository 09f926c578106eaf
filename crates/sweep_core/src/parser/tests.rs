use super::*;
use crate::config::SweepAxis;

const METRIC_HEADER: &str = "Count\tStolen\tAVG\tSTDDev\t50th\t90th\t95th\t99th\tReqs/time_unit";

fn load_block(rate: &str, values: &str) -> String {
    format!(
        "Cores:1\tservice_rate:0.1\tinterarrival_rate:{rate}\n\
         Stats collector: Main Stats\n\
         {METRIC_HEADER}\n\
         {values}\n"
    )
}

#[test]
fn two_rate_blocks_produce_two_keyed_buckets() {
    let raw = format!(
        "{}{}",
        load_block("0.001", "100\t0\t12.5\t3.2\t11.0\t20.0\t25.0\t30.0\t0.001"),
        load_block("0.002", "200\t1\t14.0\t4.0\t12.0\t22.0\t27.0\t33.0\t0.002"),
    );
    let parsed = parse_output(&raw, SweepAxis::Load);

    assert_eq!(parsed.buckets.len(), 2);
    let (first_key, first) = &parsed.buckets[0];
    assert_eq!(first_key, "0.001");
    assert_eq!(first.get("Count"), Some("100"));
    assert_eq!(first.get("Stolen"), Some("0"));
    assert_eq!(first.get("AVG"), Some("12.5"));
    assert_eq!(first.get("STDDev"), Some("3.2"));
    assert_eq!(first.get("50th"), Some("11.0"));
    assert_eq!(first.get("90th"), Some("20.0"));
    assert_eq!(first.get("95th"), Some("25.0"));
    assert_eq!(first.get("99th"), Some("30.0"));
    assert_eq!(first.get("Reqs/time_unit"), Some("0.001"));

    let (second_key, second) = &parsed.buckets[1];
    assert_eq!(second_key, "0.002");
    assert_eq!(second.get("99th"), Some("33.0"));
}

#[test]
fn mean_delay_aliases_avg() {
    let raw = load_block("0.005", "10\t0\t7.5\t1.0\t7.0\t9.0\t9.5\t9.9\t0.005");
    let parsed = parse_output(&raw, SweepAxis::Load);
    let (_, bucket) = &parsed.buckets[0];
    assert_eq!(bucket.get("MeanDelay"), Some("7.5"));
    assert_eq!(bucket.get("MeanDelay"), bucket.get("AVG"));
}

#[test]
fn missing_value_line_leaves_bucket_empty() {
    // Key line opens a bucket but neither Count header nor values follow.
    let raw = "Cores:1\tservice_rate:0.1\tinterarrival_rate:0.003\n";
    let parsed = parse_output(raw, SweepAxis::Load);
    assert_eq!(parsed.buckets.len(), 1);
    assert_eq!(parsed.buckets[0].0, "0.003");
    assert!(parsed.buckets[0].1.is_empty());
}

#[test]
fn count_with_no_open_bucket_discards_values() {
    let raw = format!("{METRIC_HEADER}\n1\t2\t3\t4\t5\t6\t7\t8\t9\n");
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert!(parsed.buckets.is_empty());
}

#[test]
fn quantum_axis_keys_on_fourth_field() {
    let raw = format!(
        "Cores:1\tservice_rate:0.1\tinterarrival_rate:0.08\tquantum:10\n\
         {METRIC_HEADER}\n\
         50\t0\t9.0\t2.0\t8.0\t12.0\t14.0\t18.0\t0.08\n"
    );
    let parsed = parse_output(&raw, SweepAxis::Quantum);
    assert_eq!(parsed.buckets.len(), 1);
    assert_eq!(parsed.buckets[0].0, "10");
    assert_eq!(parsed.buckets[0].1.get("50th"), Some("8.0"));
}

#[test]
fn slowdown_row_fills_slowdown_metrics() {
    let raw = format!(
        "Cores:1\tservice_rate:0.1\tinterarrival_rate:0.08\tquantum:5\n\
         {METRIC_HEADER}\n\
         50\t0\t9.0\t2.0\t8.0\t12.0\t14.0\t18.0\t0.08\n\
         Slowdown\t\t2.4\t0.8\t1.9\t3.0\t3.5\t4.2\t\n"
    );
    let parsed = parse_output(&raw, SweepAxis::Quantum);
    let (_, bucket) = &parsed.buckets[0];
    assert_eq!(bucket.get("MeanSlowdown"), Some("2.4"));
    assert_eq!(bucket.get("50th_sldn"), Some("1.9"));
    assert_eq!(bucket.get("99th_sldn"), Some("4.2"));
}

#[test]
fn short_slowdown_row_keeps_available_columns() {
    let raw = "Cores:1\tservice_rate:0.1\tinterarrival_rate:0.08\tquantum:5\n\
               Slowdown\t\t2.4\t0.8\t1.9\n";
    let parsed = parse_output(raw, SweepAxis::Quantum);
    let (_, bucket) = &parsed.buckets[0];
    assert_eq!(bucket.get("MeanSlowdown"), Some("2.4"));
    assert_eq!(bucket.get("50th_sldn"), Some("1.9"));
    assert_eq!(bucket.get("99th_sldn"), None);
}

#[test]
fn slowdown_is_ignored_on_load_sweeps() {
    let raw = format!(
        "{}Slowdown\t\t2.4\t0.8\t1.9\t3.0\t3.5\t4.2\t\n",
        load_block("0.005", "10\t0\t7.5\t1.0\t7.0\t9.0\t9.5\t9.9\t0.005")
    );
    let parsed = parse_output(&raw, SweepAxis::Load);
    let (_, bucket) = &parsed.buckets[0];
    assert_eq!(bucket.get("MeanSlowdown"), None);
}

#[test]
fn detail_block_collects_rows_between_sentinels() {
    let raw = format!(
        "{DETAIL_START_MARKER}\n\
         ServiceTime,Delay\n\
         10.0,12.5\n\
         5.0,5.1\n\
         20.0,44.0\n\
         {DETAIL_END_MARKER}\n"
    );
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert_eq!(parsed.detail.header, vec!["ServiceTime", "Delay"]);
    assert_eq!(parsed.detail.len(), 3);
    assert_eq!(parsed.detail.rows[2], vec!["20.0", "44.0"]);
}

#[test]
fn no_sentinels_means_empty_detail_table() {
    let raw = load_block("0.005", "10\t0\t7.5\t1.0\t7.0\t9.0\t9.5\t9.9\t0.005");
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert!(parsed.detail.is_empty());
    assert!(parsed.detail.header.is_empty());
}

#[test]
fn only_first_detail_block_is_kept() {
    let raw = format!(
        "{DETAIL_START_MARKER}\nServiceTime,Delay\n1.0,2.0\n{DETAIL_END_MARKER}\n\
         {DETAIL_START_MARKER}\nServiceTime,Delay\n3.0,4.0\n{DETAIL_END_MARKER}\n"
    );
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert_eq!(parsed.detail.len(), 1);
    assert_eq!(parsed.detail.rows[0], vec!["1.0", "2.0"]);
}

#[test]
fn arity_mismatched_detail_rows_are_skipped() {
    let raw = format!(
        "{DETAIL_START_MARKER}\nServiceTime,Delay\n1.0,2.0\n3.0\n4.0,5.0,6.0\n{DETAIL_END_MARKER}\n"
    );
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert_eq!(parsed.detail.len(), 1);
}

#[test]
fn summary_and_detail_scans_share_one_pass() {
    let raw = format!(
        "{}{DETAIL_START_MARKER}\nServiceTime,Delay\n10.0,12.5\n{DETAIL_END_MARKER}\n",
        load_block("0.005", "10\t0\t7.5\t1.0\t7.0\t9.0\t9.5\t9.9\t0.005")
    );
    let parsed = parse_output(&raw, SweepAxis::Load);
    assert_eq!(parsed.buckets.len(), 1);
    assert_eq!(parsed.detail.len(), 1);
}
