// src/core/mod.rs

//! Core data structures and types

pub mod constants;
pub mod error;
pub mod qubit;
pub mod state;

// Re-export public types for convenient access via `kickback::core::TypeName`
pub use constants::{AMPLITUDE_EPSILON, DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE, DEFAULT_SHOTS};
pub use error::{SimError, SimResult};
pub use qubit::QubitId;
pub use state::StateVector;
