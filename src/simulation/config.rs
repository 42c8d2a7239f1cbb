// src/simulation/config.rs

use crate::core::{DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE, DEFAULT_SHOTS, SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Settings for a [`Simulator`](super::Simulator).
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Samples drawn per run.
    pub shots: u32,
    /// Fixed RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Allowed deviation of `Σ|a|²` from 1 at sampling time.
    pub norm_tolerance: f64,
    /// Largest register the engine will allocate.
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Rejects settings the engine cannot honour.
    pub fn validate(&self) -> SimResult<()> {
        if self.shots == 0 {
            return Err(SimError::Configuration("shots must be greater than zero".to_string()));
        }
        self.validate_limits()
    }

    /// Checks only the numerical limits (`norm_tolerance`, `max_qubits`).
    /// The shot count is left out since callers may override it per run.
    pub fn validate_limits(&self) -> SimResult<()> {
        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(SimError::Configuration(format!(
                "norm_tolerance must be a positive finite number, got {}",
                self.norm_tolerance
            )));
        }
        // The amplitude index is a usize.
        if self.max_qubits == 0 || self.max_qubits >= usize::BITS as usize {
            return Err(SimError::Configuration(format!(
                "max_qubits must be between 1 and {}, got {}",
                usize::BITS - 1,
                self.max_qubits
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
