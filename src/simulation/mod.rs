// src/simulation/mod.rs

//! Runs `kickback::circuits::Circuit` on a dense state vector.
//!
//! [`Simulator`] is the entry point: it validates a circuit, drives the
//! [`StateVectorSimulator`] engine through the operations and samples the
//! measured qubits.

mod config;
pub mod engine;
mod results;

pub use config::SimulatorConfig;
pub use engine::StateVectorSimulator;
pub use results::{Counts, SimulationResult};

use crate::circuits::Circuit;
use crate::core::{QubitId, SimError, SimResult, StateVector};
use tracing::{debug, instrument};

/// Circuit runner.
///
/// Holds only configuration; every run gets its own state and RNG, so a
/// `Simulator` can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with default settings (1024 shots, OS-seeded RNG).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` for the configured number of shots.
    ///
    /// If the circuit measures nothing, every qubit is read out.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the bitstring histogram.
    /// * `Err(SimError)` for an invalid configuration or circuit, or if the
    ///   final state is not normalized.
    pub fn run(&self, circuit: &Circuit) -> SimResult<SimulationResult> {
        self.run_with_shots(circuit, self.config.shots)
    }

    /// Like [`Simulator::run`] with an explicit shot count.
    #[instrument(skip(self, circuit), fields(num_qubits = circuit.num_qubits(), ops = circuit.len()))]
    pub fn run_with_shots(&self, circuit: &Circuit, shots: u32) -> SimResult<SimulationResult> {
        if shots == 0 {
            return Err(SimError::Configuration("shots must be greater than zero".to_string()));
        }
        let mut engine = StateVectorSimulator::new(&self.config)?;
        let state = self.evolve(&engine, circuit)?;

        let measured: Vec<QubitId> = if circuit.measured().is_empty() {
            (0..circuit.num_qubits()).rev().map(QubitId).collect()
        } else {
            circuit.measured().iter().rev().copied().collect()
        };
        let counts = engine.sample(&state, &measured, shots)?;
        debug!(outcomes = counts.len(), "run complete");
        Ok(SimulationResult::new(counts, shots, measured))
    }

    /// Final state of `circuit` without sampling.
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<StateVector> {
        let engine = StateVectorSimulator::new(&self.config)?;
        self.evolve(&engine, circuit)
    }

    // Config limits are checked by `StateVectorSimulator::new`; shots by the caller.
    fn evolve(&self, engine: &StateVectorSimulator, circuit: &Circuit) -> SimResult<StateVector> {
        circuit.validate()?;

        let mut state = engine.initialize(circuit.num_qubits())?;
        for op in circuit.operations() {
            engine.apply(&mut state, op)?;
        }
        debug!(norm_sqr = state.norm_sqr(), "circuit applied");
        Ok(state)
    }
}
