//! Error handling logic

use super::qubit::QubitId;
use thiserror::Error;

/// Errors raised while building, validating or simulating a circuit.
///
/// Every fallible operation in the crate returns `Result<_, SimError>`.
/// Variants carry enough context to explain the failure without the
/// caller having to re-inspect the circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A gate or measurement referenced a qubit outside the register.
    #[error("qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Size of the register it was checked against.
        num_qubits: usize,
    },

    /// The same qubit was passed twice to a multi-qubit gate.
    #[error("qubit {0} appears more than once in the gate operands")]
    DuplicateQubit(QubitId),

    /// Operand count does not match the size of the gate matrix.
    #[error("gate '{gate}' acts on {expected} qubit(s) but {actual} were given")]
    ArityMismatch {
        /// Gate name, as shown in circuit diagrams.
        gate: String,
        /// Qubits the matrix acts on.
        expected: usize,
        /// Qubits supplied by the caller.
        actual: usize,
    },

    /// The state drifted away from unit norm (e.g. after a non-unitary custom gate).
    #[error("state is not normalized: sum of |amplitude|^2 = {norm_sqr} (tolerance {tolerance})")]
    NotNormalized {
        /// Observed sum of squared magnitudes.
        norm_sqr: f64,
        /// Allowed deviation from 1.0.
        tolerance: f64,
    },

    /// The register would exceed the configured simulation limit.
    #[error("{requested} qubits requested but at most {max} can be simulated")]
    TooManyQubits {
        /// Qubits requested by the circuit.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A state vector was malformed (empty, wrong length, ...).
    #[error("invalid state vector: {0}")]
    InvalidState(String),

    /// Simulator configuration was rejected.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// JSON (de)serialization of a circuit, config or result failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;
