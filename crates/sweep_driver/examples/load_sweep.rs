//! Example: load sweep against a scheduling simulator binary.
//!
//! This example demonstrates how to:
//! 1. Describe a base simulator configuration
//! 2. Generate one variant per load level
//! 3. Run the variants in parallel
//! 4. Persist the summary, detail and manifest artifacts
//!
//! Usage: `cargo run --example load_sweep -- /path/to/schedsim`

use std::env;

use sweep_core::config::{GeneratorKind, ProcessorKind, SimParams, SweepAxis, Topology};
use sweep_core::sweep::SweepPlan;
use sweep_driver::{persist_sweep, run_sweep_parallel, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let binary = env::args().nth(1).unwrap_or_else(|| "./schedsim".into());
    println!("Starting load sweep against {binary}...");

    let mut base = SimParams::default();
    base.topo = Topology::SingleQueue;
    base.gen_kind = GeneratorKind::Deterministic;
    base.proc_kind = ProcessorKind::TimeSharing;
    base.cores = 8;
    base.sweep_axis = Some(SweepAxis::Load);
    base.output_dir = "results".into();
    // Artifact paths derive from the base point; pick the mid load.
    base.load_level = Some(0.5);
    base.lambda = Some(0.5 * base.cores as f64 * base.mu);

    println!("Generating sweep variants...");
    let variants = SweepPlan::new().generate(&base)?;
    println!("Generated {} load levels", variants.len());

    // Run the simulator once per variant, all cores by default.
    let sim = Simulator::new(binary);
    let outcomes = run_sweep_parallel(&sim, &variants, None)?;
    println!("Completed {} simulator runs", outcomes.len());

    let experiment_dir = persist_sweep(&base, &variants, &outcomes)?;
    println!("\nArtifacts saved under {}", experiment_dir.display());

    Ok(())
}
