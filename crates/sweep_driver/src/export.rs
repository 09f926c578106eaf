//! Sweep artifact persistence.
//!
//! Everything lands under the configuration's deterministic experiment
//! directory: `data/summary.csv`, `data/raw_out.txt`, `data/params.json`
//! and one `data/detailed/<axis-value>.csv` per variant that produced
//! samples. Directory creation is idempotent, so reruns overwrite their
//! artifacts in place.

use std::error::Error;
use std::path::{Path, PathBuf};

use sweep_core::config::{ConfigError, SimParams};
use sweep_core::parser::DetailTable;
use sweep_core::sweep::SweepVariant;

use crate::aggregate::SweepSummary;
use crate::runner::VariantOutcome;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Write one sweep's summary table as CSV.
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails.
pub fn write_summary_csv(
    summary: &SweepSummary,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let file = writer_utils::create_output_file(path)?;
    csv::write_summary_impl(summary, file)
}

/// Write one variant's detailed samples as CSV, header verbatim from
/// the simulator's detail block.
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails.
pub fn write_detail_csv(table: &DetailTable, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let file = writer_utils::create_output_file(path)?;
    csv::write_detail_impl(table, file)
}

/// Write the JSON run manifest: base configuration plus the swept axis
/// values, for downstream plotting tools.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn write_run_manifest(
    base: &SimParams,
    variants: &[SweepVariant],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::write_manifest_impl(base, variants, file)
}

/// Persist a completed sweep: raw stdout dump, summary CSV, per-variant
/// detail CSVs and the run manifest. Returns the experiment directory.
///
/// The base configuration must validate; all paths derive from it, so
/// every sweep point of one study lands under one directory.
pub fn persist_sweep(
    base: &SimParams,
    variants: &[SweepVariant],
    outcomes: &[VariantOutcome],
) -> Result<PathBuf, Box<dyn Error>> {
    let axis = base
        .sweep_axis
        .ok_or(ConfigError::MissingField("sweep_axis"))?;

    let raw_path = base.raw_output_path()?;
    let mut raw_dump = String::new();
    for outcome in outcomes {
        raw_dump.push_str(&outcome.raw);
        if !outcome.raw.ends_with('\n') {
            raw_dump.push('\n');
        }
    }
    writer_utils::write_text_file(&raw_path, &raw_dump)?;

    let mut summary = SweepSummary::new(axis);
    for outcome in outcomes {
        summary.absorb(outcome.parsed.buckets.clone());
    }
    let summary_path = base.summary_path()?;
    write_summary_csv(&summary, &summary_path)?;
    println!("Summary CSV saved to {}", summary_path.display());

    for outcome in outcomes {
        let detail = &outcome.parsed.detail;
        if detail.is_empty() {
            if !detail.header.is_empty() {
                eprintln!(
                    "detail block for axis value {} has zero rows, skipping",
                    outcome.variant.axis_value
                );
            }
            continue;
        }
        let detail_path = base.detailed_path_for(outcome.variant.axis_value)?;
        write_detail_csv(detail, &detail_path)?;
        println!("Detailed CSV saved to {}", detail_path.display());
    }

    write_run_manifest(base, variants, base.manifest_path()?)?;

    Ok(base.experiment_dir()?)
}
