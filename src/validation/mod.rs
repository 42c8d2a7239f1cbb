// src/validation/mod.rs

//! Checks on states and gate operands shared by the engine and the circuit layer.

use crate::core::{DEFAULT_NORM_TOLERANCE, QubitId, SimError, SimResult, StateVector};

/// Checks that the state is normalized (`Σ|a_k|² ≈ 1`).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `1e-6`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(SimError::NotNormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> SimResult<()> {
    let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    // NaN must fail too, hence the negated comparison.
    if !((norm_sqr - 1.0).abs() <= tolerance) {
        return Err(SimError::NotNormalized { norm_sqr, tolerance });
    }
    Ok(())
}

/// Full validity check for a state: shape first, then normalization.
pub fn validate_state(state: &StateVector, tolerance: Option<f64>) -> SimResult<()> {
    let dim = state.dim();
    if dim == 0 || !dim.is_power_of_two() || dim != 1usize << state.num_qubits() {
        return Err(SimError::InvalidState(format!(
            "dimension {} does not match {} qubits",
            dim,
            state.num_qubits()
        )));
    }
    check_normalization(state, tolerance)
}

/// Checks that every operand is inside the register and that none repeats.
pub fn check_qubits(qubits: &[QubitId], num_qubits: usize) -> SimResult<()> {
    for (k, q) in qubits.iter().enumerate() {
        if q.index() >= num_qubits {
            return Err(SimError::QubitOutOfRange { qubit: *q, num_qubits });
        }
        if qubits[..k].contains(q) {
            return Err(SimError::DuplicateQubit(*q));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_normalized_superposition_passes() -> SimResult<()> {
        let state = StateVector::from_amplitudes(vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(0.0, -FRAC_1_SQRT_2),
        ])?;
        check_normalization(&state, None)?;
        validate_state(&state, Some(1e-9))
    }

    #[test]
    fn test_unnormalized_state_fails() -> SimResult<()> {
        let state = StateVector::from_amplitudes(vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)])?;
        match check_normalization(&state, None) {
            Err(SimError::NotNormalized { norm_sqr, tolerance }) => {
                assert!((norm_sqr - 2.0).abs() < 1e-12);
                assert_eq!(tolerance, DEFAULT_NORM_TOLERANCE);
            }
            other => panic!("expected NotNormalized, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_tolerance_is_respected() -> SimResult<()> {
        let state = StateVector::from_amplitudes(vec![Complex::new(1.0 + 1e-7, 0.0), Complex::new(0.0, 0.0)])?;
        assert!(check_normalization(&state, None).is_ok());
        assert!(check_normalization(&state, Some(1e-9)).is_err());
        Ok(())
    }

    #[test]
    fn test_nan_state_is_not_normalized() -> SimResult<()> {
        let state = StateVector::from_amplitudes(vec![Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0)])?;
        assert!(check_normalization(&state, None).is_err());
        Ok(())
    }

    #[test]
    fn test_check_qubits() {
        assert!(check_qubits(&[QubitId(0), QubitId(1)], 2).is_ok());
        assert_eq!(
            check_qubits(&[QubitId(0), QubitId(2)], 2),
            Err(SimError::QubitOutOfRange { qubit: QubitId(2), num_qubits: 2 })
        );
        assert_eq!(check_qubits(&[QubitId(1), QubitId(1)], 2), Err(SimError::DuplicateQubit(QubitId(1))));
    }
}
