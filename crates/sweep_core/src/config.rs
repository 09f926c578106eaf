//! Simulator sweep configuration: parameter record, validation, and
//! derived naming.
//!
//! `SimParams` mirrors the external simulator's command-line surface.
//! The load/lambda fields are optional at construction time and get
//! resolved by the sweep generator; every derived accessor re-validates
//! the full record first, so a malformed path or command line is never
//! emitted. Accessors are pure functions of the current field values
//! with no caching, since the swept field differs per variant.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Tolerance for the load/lambda/mu/cores consistency check.
const LOAD_TOLERANCE: f64 = 1e-4;

/// Default experiment duration in simulated microseconds.
pub const DEFAULT_DURATION_US: u64 = 20_000_000;

/// Default time-sharing quantum in microseconds.
pub const DEFAULT_QUANTUM_US: f64 = 10.0;

/// Queueing topology selector, matching the simulator's `--topo` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topology {
    SingleQueue,
    MultiQueue,
    BoundedQueue,
}

impl Topology {
    pub fn flag_value(self) -> u8 {
        match self {
            Topology::SingleQueue => 0,
            Topology::MultiQueue => 1,
            Topology::BoundedQueue => 2,
        }
    }
}

/// Request generator selector, matching the simulator's `--genType` codes.
///
/// All generators use Poisson arrivals; the kind picks the service-time
/// distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeneratorKind {
    /// M/M: exponential service times.
    Exponential,
    /// M/D: deterministic service times.
    Deterministic,
    /// M/B: bimodal service times, 90/10 split.
    Bimodal90,
    /// M/B: bimodal service times, 99.9/0.1 split.
    Bimodal999,
    /// Bimodal service times centred on the mean service time.
    BimodalMean,
    /// Service times drawn from a CDF workload file.
    CdfWorkload,
}

impl GeneratorKind {
    pub fn flag_value(self) -> u8 {
        match self {
            GeneratorKind::Exponential => 0,
            GeneratorKind::Deterministic => 1,
            GeneratorKind::Bimodal90 => 2,
            GeneratorKind::Bimodal999 => 3,
            GeneratorKind::BimodalMean => 4,
            GeneratorKind::CdfWorkload => 5,
        }
    }
}

/// Processor scheduling discipline, matching the simulator's `--procType`
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessorKind {
    RunToCompletion,
    ProcessorSharing,
    TimeSharing,
    SrptTimeSharing,
}

impl ProcessorKind {
    pub fn flag_value(self) -> u8 {
        match self {
            ProcessorKind::RunToCompletion => 0,
            ProcessorKind::ProcessorSharing => 1,
            ProcessorKind::TimeSharing => 2,
            ProcessorKind::SrptTimeSharing => 3,
        }
    }

    /// Whether this kind preempts on a quantum. Only time-shared kinds
    /// accept a quantum sweep, and only they echo `quantum:` in their
    /// output.
    pub fn is_time_shared(self) -> bool {
        matches!(
            self,
            ProcessorKind::TimeSharing | ProcessorKind::SrptTimeSharing
        )
    }
}

/// Named CDF workload distributions bundled with the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Workload {
    W3,
    W4,
    W5,
    Gpt3B,
    Gpt3Adel,
}

impl Workload {
    /// Name passed on the simulator command line (`--cdfWorkload=`).
    pub fn name(self) -> &'static str {
        match self {
            Workload::W3 => "w3",
            Workload::W4 => "w4",
            Workload::W5 => "w5",
            Workload::Gpt3B => "GPT3B",
            Workload::Gpt3Adel => "GPT3_adel",
        }
    }

    /// Path of the distribution file the simulator resolves the name to.
    pub fn distribution_path(self) -> &'static str {
        match self {
            Workload::W3 => "homa-size-distributions/Google_AllRPC.txt",
            Workload::W4 => "homa-size-distributions/Facebook_HadoopDist_All.txt",
            Workload::W5 => "homa-size-distributions/DCTCP_MsgSizeDistBytes.txt",
            Workload::Gpt3B => "homa-size-distributions/GPT3B.txt",
            Workload::Gpt3Adel => "homa-size-distributions/GPT3_Adel.txt",
        }
    }
}

/// Which parameter a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepAxis {
    Load,
    Quantum,
}

impl SweepAxis {
    /// Name of the x column in the persisted summary table.
    pub fn x_column(self) -> &'static str {
        match self {
            SweepAxis::Load => "Interarrival_Rate",
            SweepAxis::Quantum => "Quantum",
        }
    }
}

/// Error raised when a configuration violates an invariant.
///
/// All variants are fatal pre-invocation: no simulator process is
/// launched for an invalid configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field the current operation needs is unset.
    MissingField(&'static str),
    /// `|lambda - mu * cores * load_level|` exceeds the tolerance.
    LoadMismatch {
        lambda: f64,
        load_level: f64,
        mu: f64,
        cores: u32,
    },
    /// A numeric field is outside its valid range.
    OutOfRange { field: &'static str, value: f64 },
    /// Quantum sweeps only make sense for time-shared processor kinds.
    QuantumSweepNotTimeShared(ProcessorKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(name) => {
                write!(f, "required field `{name}` is not set")
            }
            ConfigError::LoadMismatch {
                lambda,
                load_level,
                mu,
                cores,
            } => write!(
                f,
                "load and mu/lambda/cores not aligned: lambda {lambda}, load {load_level}, mu {mu}, cores {cores}"
            ),
            ConfigError::OutOfRange { field, value } => {
                write!(f, "field `{field}` out of range: {value}")
            }
            ConfigError::QuantumSweepNotTimeShared(kind) => write!(
                f,
                "quantum sweep requires a time-shared processor kind, got {kind:?}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// One full simulator configuration plus sweep bookkeeping.
///
/// Constructed once by the caller, then cloned per variant by the sweep
/// generator with only the swept field overridden.
#[derive(Debug, Clone, Serialize)]
pub struct SimParams {
    /// Queueing topology.
    pub topo: Topology,
    /// Service rate mu in reqs/us.
    pub mu: f64,
    /// Request generator kind.
    pub gen_kind: GeneratorKind,
    /// Processor scheduling discipline.
    pub proc_kind: ProcessorKind,
    /// Number of processor cores.
    pub cores: u32,
    /// Absolute context-switch cost in us.
    pub ctx_cost: f64,
    /// Experiment duration in simulated us.
    pub duration: u64,
    /// Time-sharing quantum in us (used by time-shared processor kinds).
    pub quantum: f64,
    /// Optional CDF workload reference.
    pub workload: Option<Workload>,
    /// Poisson interarrival rate lambda in reqs/us. Resolved by the
    /// sweep generator for load sweeps.
    pub lambda: Option<f64>,
    /// Target system load fraction in [0, 1].
    pub load_level: Option<f64>,
    /// Which parameter the surrounding sweep varies.
    pub sweep_axis: Option<SweepAxis>,
    /// Root directory for persisted artifacts.
    pub output_dir: PathBuf,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            topo: Topology::SingleQueue,
            mu: 0.1,
            gen_kind: GeneratorKind::Deterministic,
            proc_kind: ProcessorKind::TimeSharing,
            cores: 1,
            ctx_cost: 0.0,
            duration: DEFAULT_DURATION_US,
            quantum: DEFAULT_QUANTUM_US,
            workload: None,
            lambda: None,
            load_level: None,
            sweep_axis: None,
            output_dir: PathBuf::from("results"),
        }
    }
}

impl SimParams {
    /// Check that all fields are set and mutually consistent.
    ///
    /// The load invariant is `|lambda - mu * cores * load_level| <
    /// 1e-4`; a violation means the caller supplied an arrival rate
    /// that does not correspond to the claimed load.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lambda = self.lambda.ok_or(ConfigError::MissingField("lambda"))?;
        let load_level = self
            .load_level
            .ok_or(ConfigError::MissingField("load_level"))?;
        self.sweep_axis
            .ok_or(ConfigError::MissingField("sweep_axis"))?;

        if self.mu <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "mu",
                value: self.mu,
            });
        }
        if self.cores == 0 {
            return Err(ConfigError::OutOfRange {
                field: "cores",
                value: 0.0,
            });
        }
        if self.duration == 0 {
            return Err(ConfigError::OutOfRange {
                field: "duration",
                value: 0.0,
            });
        }
        if self.ctx_cost < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "ctx_cost",
                value: self.ctx_cost,
            });
        }
        if self.quantum <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "quantum",
                value: self.quantum,
            });
        }
        if !(0.0..=1.0).contains(&load_level) {
            return Err(ConfigError::OutOfRange {
                field: "load_level",
                value: load_level,
            });
        }

        let expected = self.mu * self.cores as f64 * load_level;
        if (lambda - expected).abs() >= LOAD_TOLERANCE {
            return Err(ConfigError::LoadMismatch {
                lambda,
                load_level,
                mu: self.mu,
                cores: self.cores,
            });
        }
        Ok(())
    }

    /// Canonical experiment directory name.
    ///
    /// Deterministic over every configuration field so reruns overwrite
    /// their artifacts instead of duplicating them, and so plotting
    /// tools can locate outputs without extra bookkeeping.
    pub fn experiment_dirname(&self) -> Result<String, ConfigError> {
        self.validate()?;
        let lambda = self.lambda.ok_or(ConfigError::MissingField("lambda"))?;
        // `{:?}` keeps the trailing `.0` on integral floats, matching
        // the directory names the simulator's own tooling produces.
        Ok(format!(
            "topo{}_mu{:?}_gen{}_proc{}_cores{}_ctx{:?}_lambda{:.4}",
            self.topo.flag_value(),
            self.mu,
            self.gen_kind.flag_value(),
            self.proc_kind.flag_value(),
            self.cores,
            self.ctx_cost,
            lambda,
        ))
    }

    /// Experiment directory under the output root.
    pub fn experiment_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.output_dir.join(self.experiment_dirname()?))
    }

    /// `<experiment>/data`, holding all machine-readable artifacts.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.experiment_dir()?.join("data"))
    }

    /// Path of the aggregated summary table.
    pub fn summary_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("summary.csv"))
    }

    /// Path of the verbatim simulator stdout dump for the whole sweep.
    pub fn raw_output_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("raw_out.txt"))
    }

    /// Path of the JSON run manifest.
    pub fn manifest_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("params.json"))
    }

    /// Directory holding one detailed-sample file per variant.
    pub fn detailed_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join("detailed"))
    }

    /// Detailed-sample path for a specific axis value.
    pub fn detailed_path_for(&self, axis_value: f64) -> Result<PathBuf, ConfigError> {
        Ok(self.detailed_dir()?.join(format!("{axis_value:?}.csv")))
    }

    /// Detailed-sample path for this configuration's own axis value.
    pub fn detailed_path(&self) -> Result<PathBuf, ConfigError> {
        self.detailed_path_for(self.sweep_id()?)
    }

    /// Directory for plots rendered by external tooling.
    pub fn plot_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.experiment_dir()?.join("plots"))
    }

    /// Current value of the swept axis for this configuration.
    pub fn sweep_id(&self) -> Result<f64, ConfigError> {
        self.validate()?;
        match self.sweep_axis.ok_or(ConfigError::MissingField("sweep_axis"))? {
            SweepAxis::Load => self.load_level.ok_or(ConfigError::MissingField("load_level")),
            SweepAxis::Quantum => Ok(self.quantum),
        }
    }

    /// Name of the x column in the summary table for this sweep.
    pub fn x_column_name(&self) -> Result<&'static str, ConfigError> {
        self.validate()?;
        Ok(self
            .sweep_axis
            .ok_or(ConfigError::MissingField("sweep_axis"))?
            .x_column())
    }

    /// Human-readable parameter summary for plot titles.
    pub fn title_params(&self) -> Result<String, ConfigError> {
        self.validate()?;
        let load_level = self
            .load_level
            .ok_or(ConfigError::MissingField("load_level"))?;
        Ok(format!(
            "Topo:{}, Gen:{}, Proc:{}, Cores:{}, Ctx:{:?}, Load:{:?}",
            self.topo.flag_value(),
            self.gen_kind.flag_value(),
            self.proc_kind.flag_value(),
            self.cores,
            self.ctx_cost,
            load_level,
        ))
    }

    /// Simulator command-line arguments, one `--name=value` flag per
    /// field. `--cdfWorkload=` is always emitted; an empty value means
    /// no workload file.
    pub fn command_args(&self) -> Result<Vec<String>, ConfigError> {
        self.validate()?;
        let lambda = self.lambda.ok_or(ConfigError::MissingField("lambda"))?;
        let workload = self.workload.map(Workload::name).unwrap_or("");
        Ok(vec![
            format!("--topo={}", self.topo.flag_value()),
            format!("--mu={:?}", self.mu),
            format!("--genType={}", self.gen_kind.flag_value()),
            format!("--procType={}", self.proc_kind.flag_value()),
            format!("--lambda={:?}", lambda),
            format!("--cores={}", self.cores),
            format!("--ctxCost={:?}", self.ctx_cost),
            format!("--duration={}", self.duration),
            format!("--quantum={:?}", self.quantum),
            format!("--cdfWorkload={workload}"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> SimParams {
        let mut params = SimParams::default();
        params.load_level = Some(0.5);
        params.lambda = Some(0.5 * params.cores as f64 * params.mu);
        params.sweep_axis = Some(SweepAxis::Load);
        params
    }

    #[test]
    fn validate_accepts_aligned_load() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn validate_rejects_misaligned_load() {
        // mu=0.1, cores=10, load=0.5 implies lambda=0.5, not 0.2.
        let mut params = valid_params();
        params.cores = 10;
        params.lambda = Some(0.2);
        assert!(matches!(
            params.validate(),
            Err(ConfigError::LoadMismatch { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_lambda() {
        let mut params = valid_params();
        params.lambda = None;
        assert_eq!(
            params.validate(),
            Err(ConfigError::MissingField("lambda"))
        );
    }

    #[test]
    fn validate_rejects_zero_cores() {
        let mut params = valid_params();
        params.cores = 0;
        params.lambda = Some(0.0);
        params.load_level = Some(0.0);
        assert!(matches!(
            params.validate(),
            Err(ConfigError::OutOfRange { field: "cores", .. })
        ));
    }

    #[test]
    fn accessors_fail_closed_without_validation() {
        let params = SimParams::default();
        assert!(params.experiment_dirname().is_err());
        assert!(params.command_args().is_err());
        assert!(params.summary_path().is_err());
    }

    #[test]
    fn experiment_dirname_is_canonical() {
        let params = valid_params();
        assert_eq!(
            params.experiment_dirname().unwrap(),
            "topo0_mu0.1_gen1_proc2_cores1_ctx0.0_lambda0.0500"
        );
    }

    #[test]
    fn paths_nest_under_experiment_dir() {
        let params = valid_params();
        let summary = params.summary_path().unwrap();
        assert!(summary.ends_with(
            "topo0_mu0.1_gen1_proc2_cores1_ctx0.0_lambda0.0500/data/summary.csv"
        ));
        let detailed = params.detailed_path_for(1.0).unwrap();
        assert!(detailed.ends_with("data/detailed/1.0.csv"));
    }

    #[test]
    fn command_args_use_fixed_flag_vocabulary() {
        let args = valid_params().command_args().unwrap();
        assert_eq!(
            args,
            vec![
                "--topo=0",
                "--mu=0.1",
                "--genType=1",
                "--procType=2",
                "--lambda=0.05",
                "--cores=1",
                "--ctxCost=0.0",
                "--duration=20000000",
                "--quantum=10.0",
                "--cdfWorkload=",
            ]
        );
    }

    #[test]
    fn command_args_carry_workload_name() {
        let mut params = valid_params();
        params.workload = Some(Workload::Gpt3B);
        let args = params.command_args().unwrap();
        assert!(args.contains(&"--cdfWorkload=GPT3B".to_string()));
    }

    #[test]
    fn sweep_id_tracks_the_axis() {
        let mut params = valid_params();
        assert_eq!(params.sweep_id().unwrap(), 0.5);
        params.sweep_axis = Some(SweepAxis::Quantum);
        assert_eq!(params.sweep_id().unwrap(), DEFAULT_QUANTUM_US);
    }

    #[test]
    fn only_time_shared_kinds_report_time_sharing() {
        assert!(ProcessorKind::TimeSharing.is_time_shared());
        assert!(ProcessorKind::SrptTimeSharing.is_time_shared());
        assert!(!ProcessorKind::RunToCompletion.is_time_shared());
        assert!(!ProcessorKind::ProcessorSharing.is_time_shared());
    }

    #[test]
    fn workload_names_map_to_distribution_files() {
        assert_eq!(Workload::W3.name(), "w3");
        assert_eq!(
            Workload::W3.distribution_path(),
            "homa-size-distributions/Google_AllRPC.txt"
        );
        assert_eq!(Workload::Gpt3Adel.name(), "GPT3_adel");
    }
}
