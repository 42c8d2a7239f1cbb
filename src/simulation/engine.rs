// src/simulation/engine.rs
use crate::core::{AMPLITUDE_EPSILON, QubitId, SimError, SimResult, StateVector};
use crate::operations::{GateMatrix, Matrix2, Matrix4, Operation};
use crate::simulation::{Counts, SimulatorConfig};
use crate::validation::{check_normalization, check_qubits};
use num_complex::Complex;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Dense state-vector engine.
///
/// Owns the limits and the random source of one simulation; the state
/// itself is passed in so callers can inspect it between gates.
pub struct StateVectorSimulator {
    max_qubits: usize,
    norm_tolerance: f64,
    rng: StdRng,
}

impl StateVectorSimulator {
    /// Creates an engine from `config`. A configured seed makes sampling
    /// reproducible; otherwise the RNG is seeded from the OS.
    ///
    /// # Errors
    /// * `SimError::Configuration` if the tolerance or qubit limit is unusable.
    pub fn new(config: &SimulatorConfig) -> SimResult<Self> {
        config.validate_limits()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            max_qubits: config.max_qubits,
            norm_tolerance: config.norm_tolerance,
            rng,
        })
    }

    /// Returns `|0...0>` on `num_qubits` qubits.
    ///
    /// # Errors
    /// * `SimError::InvalidState` for zero qubits.
    /// * `SimError::TooManyQubits` above the configured maximum.
    pub fn initialize(&self, num_qubits: usize) -> SimResult<StateVector> {
        if num_qubits == 0 {
            return Err(SimError::InvalidState("cannot simulate a register of zero qubits".to_string()));
        }
        if num_qubits > self.max_qubits {
            return Err(SimError::TooManyQubits {
                requested: num_qubits,
                max: self.max_qubits,
            });
        }
        debug!(num_qubits, dim = 1usize << num_qubits, "initialized |0...0> state");
        Ok(StateVector::zero(num_qubits))
    }

    /// Applies an [`Operation`], reporting arity errors by gate name.
    pub fn apply(&self, state: &mut StateVector, op: &Operation) -> SimResult<()> {
        if op.qubits.len() != op.gate.arity() {
            return Err(SimError::ArityMismatch {
                gate: op.gate.name().to_string(),
                expected: op.gate.arity(),
                actual: op.qubits.len(),
            });
        }
        trace!(op = %op, "applying operation");
        self.apply_gate(state, &op.gate.matrix(), &op.qubits)
    }

    /// Applies `matrix` to `qubits`, leaving every other qubit untouched.
    ///
    /// For a two-qubit matrix the first qubit is the high bit of the
    /// 4x4 basis index.
    pub fn apply_gate(&self, state: &mut StateVector, matrix: &GateMatrix, qubits: &[QubitId]) -> SimResult<()> {
        if qubits.len() != matrix.arity() {
            return Err(SimError::ArityMismatch {
                gate: format!("{}-qubit matrix", matrix.arity()),
                expected: matrix.arity(),
                actual: qubits.len(),
            });
        }
        check_qubits(qubits, state.num_qubits())?;

        match matrix {
            GateMatrix::One(m) => apply_one(state, m, qubits[0]),
            GateMatrix::Two(m) => apply_two(state, m, qubits[0], qubits[1]),
        }
        Ok(())
    }

    /// Draws `shots` samples from `|a_k|^2` and tallies them by bitstring over
    /// `measured` (highest qubit leftmost). An empty `measured` reads every qubit.
    ///
    /// The state is not collapsed; all shots come from the same distribution.
    ///
    /// # Errors
    /// * `SimError::NotNormalized` if `Σ|a_k|²` is off by more than the tolerance.
    /// * `SimError::QubitOutOfRange` / `SimError::DuplicateQubit` for bad `measured`.
    pub fn sample(&mut self, state: &StateVector, measured: &[QubitId], shots: u32) -> SimResult<Counts> {
        if let Err(err) = check_normalization(state, Some(self.norm_tolerance)) {
            warn!(error = %err, "refusing to sample");
            return Err(err);
        }
        check_qubits(measured, state.num_qubits())?;

        let mut readout: Vec<QubitId> = if measured.is_empty() {
            (0..state.num_qubits()).map(QubitId).collect()
        } else {
            measured.to_vec()
        };
        readout.sort_unstable_by(|a, b| b.cmp(a));

        // Cumulative distribution with numerical noise squashed to zero.
        let mut cumulative = Vec::with_capacity(state.dim());
        let mut total = 0.0;
        let mut last_possible = 0;
        for (k, amp) in state.amplitudes().iter().enumerate() {
            let p = amp.norm_sqr();
            if p > AMPLITUDE_EPSILON {
                total += p;
                last_possible = k;
            }
            cumulative.push(total);
        }

        // At most `shots` distinct outcomes, so tally sparsely by basis index.
        let mut hits: BTreeMap<usize, u64> = BTreeMap::new();
        for _ in 0..shots {
            let r = self.rng.random::<f64>() * total;
            let k = cumulative.partition_point(|&c| c <= r).min(last_possible);
            *hits.entry(k).or_insert(0) += 1;
        }

        let mut counts = Counts::new();
        for (k, n) in hits {
            let bits: String = readout
                .iter()
                .map(|q| if k & q.mask() != 0 { '1' } else { '0' })
                .collect();
            counts.add(bits, n);
        }
        debug!(shots, outcomes = counts.len(), "sampling finished");
        Ok(counts)
    }
}

fn apply_one(state: &mut StateVector, m: &Matrix2, target: QubitId) {
    let mask = target.mask();
    let amps = state.amplitudes_mut();
    for i0 in 0..amps.len() {
        if i0 & mask != 0 {
            continue;
        }
        let i1 = i0 | mask;
        let (a0, a1) = (amps[i0], amps[i1]);
        amps[i0] = m[0][0] * a0 + m[0][1] * a1;
        amps[i1] = m[1][0] * a0 + m[1][1] * a1;
    }
}

fn apply_two(state: &mut StateVector, m: &Matrix4, first: QubitId, second: QubitId) {
    let (hi, lo) = (first.mask(), second.mask());
    let amps = state.amplitudes_mut();
    for base in 0..amps.len() {
        if base & (hi | lo) != 0 {
            continue;
        }
        // Basis order |first, second>: 00, 01, 10, 11.
        let idx = [base, base | lo, base | hi, base | hi | lo];
        let psi = idx.map(|i| amps[i]);
        for (row, &i) in idx.iter().enumerate() {
            let mut acc = Complex::zero();
            for col in 0..4 {
                acc += m[row][col] * psi[col];
            }
            amps[i] = acc;
        }
    }
}
