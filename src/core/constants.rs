//! Numerical constants shared by the engine and the validation helpers.

/// Allowed deviation of `Σ|a|²` from 1 before a state counts as unnormalized.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-6;

/// Probabilities below this are treated as exactly zero when sampling.
pub const AMPLITUDE_EPSILON: f64 = 1e-12;

/// Default number of shots per run.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Largest register the simulator allocates by default (2^24 amplitudes, 256 MiB).
pub const DEFAULT_MAX_QUBITS: usize = 24;
