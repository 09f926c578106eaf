//! Example: quantum sweep at a fixed load level.
//!
//! Holds the arrival rate constant and varies the time-sharing quantum,
//! which is where the Slowdown columns in the summary come from.
//!
//! Usage: `cargo run --example quantum_sweep -- /path/to/schedsim`

use std::env;

use sweep_core::config::{GeneratorKind, ProcessorKind, SimParams, SweepAxis, Topology};
use sweep_core::sweep::SweepPlan;
use sweep_driver::{persist_sweep, run_sweep, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let binary = env::args().nth(1).unwrap_or_else(|| "./schedsim".into());
    println!("Starting quantum sweep against {binary}...");

    let mut base = SimParams::default();
    base.topo = Topology::MultiQueue;
    base.gen_kind = GeneratorKind::Bimodal90;
    base.proc_kind = ProcessorKind::SrptTimeSharing;
    base.cores = 8;
    base.load_level = Some(0.8);
    base.lambda = Some(0.8 * base.cores as f64 * base.mu);
    base.sweep_axis = Some(SweepAxis::Quantum);
    base.output_dir = "results".into();

    println!("Generating sweep variants...");
    let variants = SweepPlan::new().generate(&base)?;
    println!("Generated {} quantum values", variants.len());

    // Sequential run; quantum sweeps are usually small enough.
    let sim = Simulator::new(binary);
    let outcomes = run_sweep(&sim, &variants)?;
    println!("Completed {} simulator runs", outcomes.len());

    let experiment_dir = persist_sweep(&base, &variants, &outcomes)?;
    println!("\nArtifacts saved under {}", experiment_dir.display());

    Ok(())
}
