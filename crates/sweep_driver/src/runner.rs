//! Simulator invocation.
//!
//! `Simulator` turns one resolved configuration into a command line and
//! runs the external binary synchronously, returning its stdout
//! verbatim; no parsing happens at that level. `run_sweep` executes a
//! whole variant list sequentially, `run_sweep_parallel` on a bounded
//! rayon pool. Both are fail-fast: downstream analysis assumes a
//! complete axis, so the first invocation error aborts the sweep.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use sweep_core::config::{ConfigError, SimParams};
use sweep_core::parser::{parse_output, ParsedOutput};
use sweep_core::sweep::SweepVariant;

/// Error raised while invoking the simulator for one variant.
#[derive(Debug)]
pub enum RunError {
    /// The configuration failed validation before launch.
    Config(ConfigError),
    /// The simulator process could not be started.
    Launch(io::Error),
    /// The simulator exited with a non-zero status.
    NonZeroExit {
        code: Option<i32>,
        stderr: String,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Config(err) => write!(f, "invalid configuration: {err}"),
            RunError::Launch(err) => write!(f, "failed to launch simulator: {err}"),
            RunError::NonZeroExit { code, stderr } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                write!(f, "simulator exited with status {code}: {}", stderr.trim())
            }
        }
    }
}

impl Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::Config(err)
    }
}

/// Handle on the external simulator binary.
#[derive(Debug, Clone)]
pub struct Simulator {
    binary: PathBuf,
}

impl Simulator {
    /// Create a handle for the given binary path (e.g. `./schedsim`).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run one resolved configuration to completion and return stdout
    /// verbatim.
    pub fn run(&self, params: &SimParams) -> Result<String, RunError> {
        let args = params.command_args()?;
        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(RunError::Launch)?;
        if !output.status.success() {
            return Err(RunError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// One variant's invocation result: the raw stdout plus its parse.
#[derive(Debug, Clone)]
pub struct VariantOutcome {
    pub variant: SweepVariant,
    pub raw: String,
    pub parsed: ParsedOutput,
}

fn run_variant(sim: &Simulator, variant: &SweepVariant) -> Result<VariantOutcome, RunError> {
    let axis = variant.axis()?;
    let raw = sim.run(&variant.params)?;
    let parsed = parse_output(&raw, axis);
    Ok(VariantOutcome {
        variant: variant.clone(),
        raw,
        parsed,
    })
}

/// Run all variants sequentially in ascending axis order.
///
/// Each call blocks until the simulator exits and its output is parsed
/// before the next variant starts. Fails on the first invocation error.
pub fn run_sweep(sim: &Simulator, variants: &[SweepVariant]) -> Result<Vec<VariantOutcome>, RunError> {
    let mut outcomes = Vec::with_capacity(variants.len());
    for variant in variants {
        println!(
            "Running simulator for axis value {} ({} of {})",
            variant.axis_value,
            outcomes.len() + 1,
            variants.len()
        );
        outcomes.push(run_variant(sim, variant)?);
    }
    Ok(outcomes)
}

/// Run all variants on a bounded rayon pool with a progress bar.
///
/// Variants are independent immutable values, so workers share nothing
/// but the output directory tree, and per-variant file paths keep that
/// contention-free. Results come back in input (ascending axis) order.
/// Fails on the first invocation error, like the sequential runner.
pub fn run_sweep_parallel(
    sim: &Simulator,
    variants: &[SweepVariant],
    num_threads: Option<usize>,
) -> Result<Vec<VariantOutcome>, RunError> {
    let pb = if variants.is_empty() {
        None
    } else {
        let bar = ProgressBar::new(variants.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    };

    let pool = if let Some(threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("Failed to create thread pool")
    } else {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to create thread pool")
    };

    let pb_clone = pb.clone();
    let results = pool.install(|| {
        variants
            .par_iter()
            .map(|variant| {
                let outcome = run_variant(sim, variant);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                outcome
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}
