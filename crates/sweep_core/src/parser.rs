//! Parser for the simulator's raw stdout.
//!
//! The simulator emits an ad-hoc text stream with no schema
//! declaration: tab-delimited summary lines, plus an optional
//! comma-delimited detail block bounded by sentinel lines. Two
//! independent state machines are advanced together over one pass of
//! the line sequence: the summary scan collects keyed metric buckets,
//! the detail scan collects per-request samples. Anomalies (metric
//! values with no open bucket, short rows, zero-row detail blocks) are
//! skipped and logged, never raised.

use crate::config::SweepAxis;

#[path = "parser/detailed.rs"]
mod detailed;
#[path = "parser/summary.rs"]
mod summary;
#[cfg(test)]
#[path = "parser/tests.rs"]
mod tests;

pub use detailed::{DetailTable, DETAIL_END_MARKER, DETAIL_START_MARKER};
pub use summary::{MetricBucket, SUMMARY_METRICS};

use detailed::DetailScan;
use summary::SummaryScan;

/// Everything extracted from one invocation's stdout.
#[derive(Debug, Clone, Default)]
pub struct ParsedOutput {
    /// Metric buckets in appearance order, keyed by the simulator's
    /// verbatim echoed axis value (rate or quantum).
    pub buckets: Vec<(String, MetricBucket)>,
    /// Per-request samples; empty when no detail block was emitted.
    pub detail: DetailTable,
}

/// Scan one raw stdout blob, advancing both sub-scans per line.
///
/// Bucket keys are kept as the simulator's own echoed strings; they are
/// parsed numerically only when sorting for output, never re-derived
/// from the input configuration.
pub fn parse_output(raw: &str, axis: SweepAxis) -> ParsedOutput {
    let mut summary = SummaryScan::new(axis);
    let mut detail = DetailScan::new();
    for line in raw.lines() {
        summary.feed(line);
        detail.feed(line);
    }
    ParsedOutput {
        buckets: summary.finish(),
        detail: detail.finish(),
    }
}
