// src/lib.rs

//! `kickback` - a small state-vector simulator built around the phase
//! kickback experiment.
//!
//! Qubits are little-endian: bit `i` of a basis index is qubit `i`, and in
//! printed bitstrings qubit 0 is the rightmost character.

pub mod circuits;
pub mod core;
pub mod operations;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use circuits::{Circuit, CircuitBuilder};
pub use crate::core::{QubitId, SimError, SimResult, StateVector};
pub use operations::{Gate, GateMatrix, Operation};
pub use simulation::{Counts, SimulationResult, Simulator, SimulatorConfig, StateVectorSimulator};
pub use validation::{check_normalization, check_qubits, validate_state};

// Example 1: Phase kickback
// The controlled-Z leaves the target |1> untouched but kicks its -1
// eigenphase back onto the control, so the control ends in |1> every time.
/// ```
/// use kickback::{CircuitBuilder, Simulator, SimulatorConfig, SimError};
///
/// let circuit = CircuitBuilder::new(2)
///     .h(0)      // control into |+>
///     .x(1)      // target into |1>, the -1 eigenstate of Z
///     .cz(0, 1)  // phase kickback: control becomes |->
///     .h(0)      // |-> -> |1>
///     .measure_all()
///     .build();
///
/// let simulator = Simulator::with_config(SimulatorConfig::new().with_shots(1024));
/// let result = simulator.run(&circuit)?;
/// println!("{}", circuit);
/// println!("{}", result);
///
/// assert_eq!(result.get("11"), 1024);
/// assert_eq!(result.to_json()?, r#"{"11":1024}"#);
/// # Ok::<(), SimError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Driving the engine directly
// Apply gates one at a time and inspect the amplitudes in between.
/// ```
/// use kickback::{Gate, QubitId, SimulatorConfig, StateVectorSimulator, SimError};
///
/// let mut engine = StateVectorSimulator::new(&SimulatorConfig::new().with_seed(7))?;
/// let mut state = engine.initialize(2)?;
///
/// engine.apply_gate(&mut state, &Gate::Hadamard.matrix(), &[QubitId(0)])?;
/// engine.apply_gate(&mut state, &Gate::ControlledX.matrix(), &[QubitId(0), QubitId(1)])?;
///
/// // Bell state: half the weight on |00>, half on |11>.
/// let p = state.probabilities();
/// assert!((p[0] - 0.5).abs() < 1e-9 && (p[3] - 0.5).abs() < 1e-9);
///
/// let counts = engine.sample(&state, &[], 1000)?;
/// assert_eq!(counts.get("00") + counts.get("11"), 1000);
/// # Ok::<(), SimError>(())
/// ```
#[doc(hidden)]
const _: () = ();
