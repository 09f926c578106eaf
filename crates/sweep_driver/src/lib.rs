//! Sweep execution and persistence for the external schedsim simulator.
//!
//! This crate is the effectful half of the pipeline: it serializes
//! resolved configurations from `sweep_core` into command lines, runs
//! the simulator binary per variant, aggregates the parsed metric
//! buckets across the sweep, and writes the summary/detail/manifest
//! artifacts under the deterministic directory layout.
//!
//! # Quick Start
//!
//! ```no_run
//! use sweep_core::{SimParams, SweepAxis, SweepPlan};
//! use sweep_driver::{persist_sweep, run_sweep, Simulator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut base = SimParams::default();
//!     base.load_level = Some(0.5);
//!     base.lambda = Some(0.5 * base.cores as f64 * base.mu);
//!     base.sweep_axis = Some(SweepAxis::Load);
//!
//!     let variants = SweepPlan::new().generate(&base)?;
//!     let outcomes = run_sweep(&Simulator::new("./schedsim"), &variants)?;
//!     persist_sweep(&base, &variants, &outcomes)?;
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod export;
pub mod runner;

pub use aggregate::SweepSummary;
pub use export::{persist_sweep, write_detail_csv, write_run_manifest, write_summary_csv};
pub use runner::{run_sweep, run_sweep_parallel, RunError, Simulator, VariantOutcome};
