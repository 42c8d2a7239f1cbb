// src/core/state.rs

use super::error::{SimError, SimResult};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// Complex amplitudes of an `n`-qubit register.
///
/// Holds `2^n` amplitudes indexed by basis state. Bit `i` of an index is the
/// value of qubit `i` (little-endian). Gate application mutates the vector in
/// place; sampling only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates the `|0...0>` state for `num_qubits` qubits.
    ///
    /// Callers are expected to have bounded `num_qubits` already; see
    /// `StateVectorSimulator::initialize` for the checked entry point.
    pub(crate) fn zero(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Self { amplitudes, num_qubits }
    }

    /// Builds a state from raw amplitudes.
    ///
    /// The length must be a non-zero power of two. Normalization is *not*
    /// checked here; it is enforced when the state is sampled.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> SimResult<Self> {
        let dim = amplitudes.len();
        if dim == 0 || !dim.is_power_of_two() {
            return Err(SimError::InvalidState(format!(
                "length {} is not a non-zero power of two",
                dim
            )));
        }
        Ok(Self {
            num_qubits: dim.trailing_zeros() as usize,
            amplitudes,
        })
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of qubits represented.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared magnitudes. 1.0 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Outcome probabilities `|a_k|^2` for every basis state `k`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &StateVector, tolerance: f64) -> bool {
        self.dim() == other.dim()
            && self
                .amplitudes
                .iter()
                .zip(other.amplitudes.iter())
                .all(|(a, b)| (a - b).norm() < tolerance)
    }

    /// Formats basis index `k` as a bitstring, highest qubit first.
    pub fn basis_label(&self, k: usize) -> String {
        format!("{:0width$b}", k, width = self.num_qubits)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        let mut first = true;
        for (k, c) in self.amplitudes.iter().enumerate() {
            if c.norm_sqr() == 0.0 {
                continue;
            }
            write!(f, "{}{:.4}|{}>", if first { "" } else { ", " }, c, self.basis_label(k))?;
            first = false;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state() {
        let state = StateVector::zero(2);
        assert_eq!(state.dim(), 4);
        assert_eq!(state.num_qubits(), 2);
        assert_eq!(state.amplitudes()[0], Complex::new(1.0, 0.0));
        assert!(state.amplitudes()[1..].iter().all(|c| c.is_zero()));
        assert!((state.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_amplitudes_rejects_bad_lengths() {
        assert!(StateVector::from_amplitudes(vec![]).is_err());
        let three = vec![Complex::zero(); 3];
        assert!(matches!(
            StateVector::from_amplitudes(three),
            Err(SimError::InvalidState(_))
        ));
        let eight = vec![Complex::zero(); 8];
        assert_eq!(StateVector::from_amplitudes(eight).unwrap().num_qubits(), 3);
    }

    #[test]
    fn test_basis_label_puts_qubit_zero_last() {
        let state = StateVector::zero(3);
        assert_eq!(state.basis_label(1), "001");
        assert_eq!(state.basis_label(6), "110");
    }

    #[test]
    fn test_display_skips_zero_amplitudes() {
        let state = StateVector::zero(2);
        assert_eq!(state.to_string(), "StateVector[1.0000+0.0000i|00>]");
    }
}
