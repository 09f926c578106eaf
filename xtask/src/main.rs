use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the scheduler sweep workspace",
    long_about = "A unified CLI for running simulator sweeps and CI checks\n\
                  in the scheduler sweep workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a load sweep against a simulator binary
    LoadSweep {
        /// Path to the simulator binary
        #[arg(long, default_value = "./schedsim")]
        simulator: String,
    },
    /// Run a quantum sweep against a simulator binary
    QuantumSweep {
        /// Path to the simulator binary
        #[arg(long, default_value = "./schedsim")]
        simulator: String,
    },
    /// Run CI checks (fmt, clippy, tests, examples)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build the example sweeps
    Examples,
    /// Run check + examples
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test sweep_core");
    run_cargo(&["test", "-p", "sweep_core"]);

    step("Test sweep_driver");
    run_cargo(&["test", "-p", "sweep_driver"]);
}

fn ci_examples() {
    step("Build load_sweep example");
    run_cargo(&["build", "-p", "sweep_driver", "--example", "load_sweep"]);

    step("Build quantum_sweep example");
    run_cargo(&["build", "-p", "sweep_driver", "--example", "quantum_sweep"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::LoadSweep { simulator } => {
            run_cargo(&[
                "run",
                "-p",
                "sweep_driver",
                "--example",
                "load_sweep",
                "--release",
                "--",
                &simulator,
            ]);
        }
        Commands::QuantumSweep { simulator } => {
            run_cargo(&[
                "run",
                "-p",
                "sweep_driver",
                "--example",
                "quantum_sweep",
                "--release",
                "--",
                &simulator,
            ]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
