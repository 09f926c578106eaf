use std::error::Error;
use std::fs::File;

use serde::Serialize;
use sweep_core::config::{SimParams, SweepAxis};
use sweep_core::sweep::SweepVariant;

/// Snapshot of one sweep run, enough for plotting tools to relocate
/// the artifacts without re-deriving the configuration.
#[derive(Serialize)]
struct RunManifest<'a> {
    params: &'a SimParams,
    sweep_axis: Option<SweepAxis>,
    axis_values: Vec<f64>,
}

pub(crate) fn write_manifest_impl(
    base: &SimParams,
    variants: &[SweepVariant],
    file: File,
) -> Result<(), Box<dyn Error>> {
    let manifest = RunManifest {
        params: base,
        sweep_axis: base.sweep_axis,
        axis_values: variants.iter().map(|v| v.axis_value).collect(),
    };
    serde_json::to_writer_pretty(file, &manifest)?;
    Ok(())
}
