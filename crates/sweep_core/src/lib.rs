//! Core data model for schedsim parameter sweeps.
//!
//! This crate holds the pure pieces of the sweep pipeline: the validated
//! simulator configuration, the sweep-variant generator that expands one
//! base configuration into an ordered set of invocations, and the parser
//! that turns the simulator's raw stdout into typed metric records.
//! Running the simulator and persisting artifacts live in `sweep_driver`.
//!
//! # Quick Start
//!
//! ```no_run
//! use sweep_core::{SimParams, SweepAxis, SweepPlan};
//!
//! let mut base = SimParams::default();
//! base.load_level = Some(0.5);
//! base.lambda = Some(0.5 * base.cores as f64 * base.mu);
//! base.sweep_axis = Some(SweepAxis::Load);
//!
//! let variants = SweepPlan::new().generate(&base).unwrap();
//! assert_eq!(variants.len(), 11);
//! ```

pub mod config;
pub mod parser;
pub mod sweep;

pub use config::{
    ConfigError, GeneratorKind, ProcessorKind, SimParams, SweepAxis, Topology, Workload,
};
pub use parser::{parse_output, DetailTable, MetricBucket, ParsedOutput};
pub use sweep::{SweepPlan, SweepVariant};
