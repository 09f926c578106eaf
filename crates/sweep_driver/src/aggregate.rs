//! Cross-variant metric aggregation.
//!
//! `SweepSummary` collects the keyed metric buckets parsed from every
//! variant of one sweep and produces the rows of the summary table.
//! Keys stay the simulator's verbatim strings; they are parsed as
//! floats only to order the rows, which keeps the output ascending
//! numerically (`0.001, 0.002, 0.01`) rather than lexicographically.

use std::cmp::Ordering;

use sweep_core::config::SweepAxis;
use sweep_core::parser::MetricBucket;

/// Summary-table columns for a load sweep.
pub const LOAD_SWEEP_COLUMNS: [&str; 3] = ["Interarrival_Rate", "50th", "99th"];

/// Summary-table columns for a quantum sweep.
pub const QUANTUM_SWEEP_COLUMNS: [&str; 7] = [
    "Quantum",
    "MeanDelay",
    "MeanSlowdown",
    "50th",
    "99th",
    "50th_sldn",
    "99th_sldn",
];

/// Accumulator for one sweep's metric buckets.
#[derive(Debug, Clone)]
pub struct SweepSummary {
    axis: SweepAxis,
    buckets: Vec<(String, MetricBucket)>,
}

impl SweepSummary {
    pub fn new(axis: SweepAxis) -> Self {
        Self {
            axis,
            buckets: Vec::new(),
        }
    }

    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    /// Take ownership of more `(key, bucket)` pairs, typically one
    /// variant's parse result. Insertion order does not matter; rows
    /// are re-sorted on output.
    pub fn absorb(&mut self, buckets: Vec<(String, MetricBucket)>) {
        self.buckets.extend(buckets);
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Column vocabulary for this sweep's axis; the first column is the
    /// axis value itself.
    pub fn columns(&self) -> &'static [&'static str] {
        match self.axis {
            SweepAxis::Load => &LOAD_SWEEP_COLUMNS,
            SweepAxis::Quantum => &QUANTUM_SWEEP_COLUMNS,
        }
    }

    /// Rows in ascending numeric key order. A metric missing from a
    /// bucket becomes an empty field rather than failing the sweep.
    pub fn sorted_rows(&self) -> Vec<Vec<String>> {
        let mut ordered: Vec<&(String, MetricBucket)> = self.buckets.iter().collect();
        ordered.sort_by(|a, b| {
            numeric_key(&a.0)
                .partial_cmp(&numeric_key(&b.0))
                .unwrap_or(Ordering::Equal)
        });

        ordered
            .into_iter()
            .map(|(key, bucket)| {
                let mut row = Vec::with_capacity(self.columns().len());
                row.push(key.clone());
                for column in &self.columns()[1..] {
                    row.push(bucket.get(column).unwrap_or("").to_string());
                }
                row
            })
            .collect()
    }
}

/// Unparseable keys sort last; they come verbatim from the simulator,
/// so this only happens on malformed output.
fn numeric_key(key: &str) -> f64 {
    key.trim().parse().unwrap_or(f64::INFINITY)
}
