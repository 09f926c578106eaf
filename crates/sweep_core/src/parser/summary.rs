use std::collections::HashMap;

use crate::config::SweepAxis;

/// Metric names carried by the value line that follows a `Count`
/// header, in positional order.
pub const SUMMARY_METRICS: [&str; 9] = [
    "Count",
    "Stolen",
    "AVG",
    "STDDev",
    "50th",
    "90th",
    "95th",
    "99th",
    "Reqs/time_unit",
];

/// Slowdown-row columns: tab field index and the metric it carries.
/// Field 3 (the standard deviation) has no consumer downstream.
const SLOWDOWN_COLUMNS: [(usize, &str); 3] = [
    (2, "MeanSlowdown"),
    (4, "50th_sldn"),
    (7, "99th_sldn"),
];

/// Scalar metrics parsed from one invocation block, values kept as the
/// simulator's verbatim strings to avoid rounding drift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricBucket {
    values: HashMap<String, String>,
}

impl MetricBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SummaryState {
    /// Looking for key lines, `Count` headers and `Slowdown` rows.
    Scanning,
    /// The next line carries the positional metric values.
    AwaitingMetrics,
}

/// State machine for the tab-delimited summary section.
pub(super) struct SummaryScan {
    axis: SweepAxis,
    state: SummaryState,
    buckets: Vec<(String, MetricBucket)>,
}

impl SummaryScan {
    pub(super) fn new(axis: SweepAxis) -> Self {
        Self {
            axis,
            state: SummaryState::Scanning,
            buckets: Vec::new(),
        }
    }

    pub(super) fn feed(&mut self, line: &str) {
        let fields: Vec<&str> = line.split('\t').collect();

        if self.state == SummaryState::AwaitingMetrics {
            self.state = SummaryState::Scanning;
            self.record_metrics(&fields, line);
            return;
        }

        // A line echoing the swept parameter opens a new bucket keyed
        // by the verbatim value after the colon. Load sweeps key on the
        // third field, quantum sweeps on the fourth.
        let (key_index, marker) = match self.axis {
            SweepAxis::Load => (2, "interarrival_rate:"),
            SweepAxis::Quantum => (3, "quantum:"),
        };
        if let Some(field) = fields.get(key_index) {
            if field.contains(marker) {
                if let Some(value) = field.splitn(2, ':').nth(1) {
                    self.buckets.push((value.to_string(), MetricBucket::new()));
                }
            }
        }

        if self.axis == SweepAxis::Quantum && fields.first() == Some(&"Slowdown") {
            self.record_slowdown(&fields, line);
        }

        if fields.first() == Some(&"Count") {
            self.state = SummaryState::AwaitingMetrics;
        }
    }

    pub(super) fn finish(self) -> Vec<(String, MetricBucket)> {
        self.buckets
    }

    fn record_metrics(&mut self, fields: &[&str], line: &str) {
        let Some((_, bucket)) = self.buckets.last_mut() else {
            // Malformed input: a Count header before any key line.
            // Discard rather than attribute the values to a stale key.
            eprintln!("parser: metric values with no open bucket, skipping: {line}");
            return;
        };
        for (name, value) in SUMMARY_METRICS.iter().zip(fields.iter()) {
            bucket.insert(name, value);
        }
        if let Some(avg) = bucket.get("AVG").map(str::to_string) {
            bucket.insert("MeanDelay", &avg);
        }
    }

    fn record_slowdown(&mut self, fields: &[&str], line: &str) {
        let Some((key, bucket)) = self.buckets.last_mut() else {
            eprintln!("parser: Slowdown row with no open bucket, skipping: {line}");
            return;
        };
        for (index, name) in SLOWDOWN_COLUMNS {
            match fields.get(index) {
                Some(value) => bucket.insert(name, value),
                None => eprintln!(
                    "parser: short Slowdown row for key {key}, missing column {index}: {line}"
                ),
            }
        }
    }
}
