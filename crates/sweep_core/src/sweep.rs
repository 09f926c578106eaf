//! Sweep-variant generation.
//!
//! A `SweepPlan` expands one base configuration into an ordered list of
//! fully resolved per-variant configurations, one per candidate axis
//! value. Each variant is an immutable copy of the base with only the
//! swept field overridden, so parallel runners never race on a shared
//! configuration. The plan produces data only; nothing here invokes the
//! simulator.

use crate::config::{ConfigError, SimParams, SweepAxis};

/// Default load fractions for a load sweep.
pub const DEFAULT_LOAD_LEVELS: [f64; 11] = [
    0.01, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.99,
];

/// Default quantum sizes in us for a quantum sweep.
pub const DEFAULT_QUANTUMS_US: [f64; 7] = [1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 500.0];

/// One concrete point of a sweep: the axis value plus the resolved
/// configuration for it. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct SweepVariant {
    /// The swept parameter's value (a load fraction or a quantum).
    pub axis_value: f64,
    /// Fully resolved configuration for this point.
    pub params: SimParams,
}

impl SweepVariant {
    /// Axis this variant belongs to. Generated variants always carry a
    /// resolved sweep axis.
    pub fn axis(&self) -> Result<SweepAxis, ConfigError> {
        self.params
            .sweep_axis
            .ok_or(ConfigError::MissingField("sweep_axis"))
    }
}

/// Candidate axis values for a sweep.
///
/// Defaults match the simulator tooling's historical lists; different
/// studies override them through the builder methods.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    load_levels: Vec<f64>,
    quantums_us: Vec<f64>,
}

impl SweepPlan {
    /// Create a plan with the default candidate lists.
    pub fn new() -> Self {
        Self {
            load_levels: DEFAULT_LOAD_LEVELS.to_vec(),
            quantums_us: DEFAULT_QUANTUMS_US.to_vec(),
        }
    }

    /// Override the load-fraction candidates.
    pub fn load_levels(mut self, levels: Vec<f64>) -> Self {
        self.load_levels = levels;
        self
    }

    /// Override the quantum-size candidates.
    pub fn quantums_us(mut self, quantums: Vec<f64>) -> Self {
        self.quantums_us = quantums;
        self
    }

    /// Expand `base` into one resolved variant per candidate point, in
    /// ascending axis order.
    ///
    /// Load sweeps derive `lambda = load_level * cores * mu` per point.
    /// Quantum sweeps require a time-shared processor kind and an
    /// already-resolved load level; lambda is computed once and held
    /// fixed across quantum points.
    pub fn generate(&self, base: &SimParams) -> Result<Vec<SweepVariant>, ConfigError> {
        let axis = base
            .sweep_axis
            .ok_or(ConfigError::MissingField("sweep_axis"))?;
        match axis {
            SweepAxis::Load => self.generate_load_sweep(base),
            SweepAxis::Quantum => self.generate_quantum_sweep(base),
        }
    }

    fn generate_load_sweep(&self, base: &SimParams) -> Result<Vec<SweepVariant>, ConfigError> {
        let mut variants = Vec::with_capacity(self.load_levels.len());
        for load_level in ascending(&self.load_levels) {
            let mut params = base.clone();
            params.load_level = Some(load_level);
            params.lambda = Some(load_level * params.cores as f64 * params.mu);
            params.validate()?;
            variants.push(SweepVariant {
                axis_value: load_level,
                params,
            });
        }
        Ok(variants)
    }

    fn generate_quantum_sweep(&self, base: &SimParams) -> Result<Vec<SweepVariant>, ConfigError> {
        if !base.proc_kind.is_time_shared() {
            return Err(ConfigError::QuantumSweepNotTimeShared(base.proc_kind));
        }
        let load_level = base
            .load_level
            .ok_or(ConfigError::MissingField("load_level"))?;
        let lambda = load_level * base.cores as f64 * base.mu;

        let mut variants = Vec::with_capacity(self.quantums_us.len());
        for quantum in ascending(&self.quantums_us) {
            let mut params = base.clone();
            params.quantum = quantum;
            params.load_level = Some(load_level);
            params.lambda = Some(lambda);
            params.validate()?;
            variants.push(SweepVariant {
                axis_value: quantum,
                params,
            });
        }
        Ok(variants)
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::new()
    }
}

fn ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
