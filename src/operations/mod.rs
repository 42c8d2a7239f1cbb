// src/operations/mod.rs

//! Gates and the `(gate, qubits)` pairs that make up a circuit.
//!
//! A [`Gate`] names a unitary and knows its matrix. An [`Operation`] binds a
//! gate to the qubits it acts on. Matrices for two-qubit gates are written in
//! the basis `|first, second>` with the first listed qubit as the high bit,
//! so controlled gates list the control first.

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};
use std::fmt;

/// 2x2 complex matrix acting on one qubit.
pub type Matrix2 = [[Complex<f64>; 2]; 2];
/// 4x4 complex matrix acting on two qubits.
pub type Matrix4 = [[Complex<f64>; 4]; 4];

/// Matrix form of a gate, tagged by how many qubits it acts on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateMatrix {
    /// Single-qubit gate.
    One(Matrix2),
    /// Two-qubit gate.
    Two(Matrix4),
}

impl GateMatrix {
    /// Number of qubits the matrix acts on.
    pub fn arity(&self) -> usize {
        match self {
            GateMatrix::One(_) => 1,
            GateMatrix::Two(_) => 2,
        }
    }

    /// Embeds a single-qubit `u` as the controlled-`u` on `|control, target>`.
    pub fn controlled(u: &Matrix2) -> GateMatrix {
        let mut m = identity4();
        m[2][2] = u[0][0];
        m[2][3] = u[0][1];
        m[3][2] = u[1][0];
        m[3][3] = u[1][1];
        GateMatrix::Two(m)
    }
}

/// A quantum gate.
///
/// Standard gates carry their parameters; `Unitary1`/`Unitary2` carry an
/// arbitrary matrix. Custom matrices are not checked for unitarity, a
/// non-unitary gate surfaces as a normalization error when the state is
/// sampled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Identity,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    /// Phase by `pi/2`.
    S,
    /// Phase by `pi/4`.
    T,
    /// `diag(1, e^{i theta})`.
    Phase(f64),
    /// CNOT, control first.
    ControlledX,
    /// Symmetric in its operands.
    ControlledZ,
    /// `diag(1, 1, 1, e^{i theta})`.
    ControlledPhase(f64),
    Swap,
    Unitary1(Matrix2),
    Unitary2(Matrix4),
}

impl Gate {
    /// Number of qubits the gate acts on.
    pub fn arity(&self) -> usize {
        match self {
            Gate::Identity
            | Gate::Hadamard
            | Gate::PauliX
            | Gate::PauliY
            | Gate::PauliZ
            | Gate::S
            | Gate::T
            | Gate::Phase(_)
            | Gate::Unitary1(_) => 1,
            Gate::ControlledX
            | Gate::ControlledZ
            | Gate::ControlledPhase(_)
            | Gate::Swap
            | Gate::Unitary2(_) => 2,
        }
    }

    /// Short lowercase name, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Identity => "id",
            Gate::Hadamard => "h",
            Gate::PauliX => "x",
            Gate::PauliY => "y",
            Gate::PauliZ => "z",
            Gate::S => "s",
            Gate::T => "t",
            Gate::Phase(_) => "p",
            Gate::ControlledX => "cx",
            Gate::ControlledZ => "cz",
            Gate::ControlledPhase(_) => "cp",
            Gate::Swap => "swap",
            Gate::Unitary1(_) => "u1q",
            Gate::Unitary2(_) => "u2q",
        }
    }

    /// Returns the gate's matrix.
    pub fn matrix(&self) -> GateMatrix {
        let one = Complex::one();
        let zero = Complex::zero();
        let i = Complex::i();
        match self {
            Gate::Identity => GateMatrix::One([[one, zero], [zero, one]]),
            Gate::Hadamard => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                GateMatrix::One([[h, h], [h, -h]])
            }
            Gate::PauliX => GateMatrix::One([[zero, one], [one, zero]]),
            Gate::PauliY => GateMatrix::One([[zero, -i], [i, zero]]),
            Gate::PauliZ => GateMatrix::One([[one, zero], [zero, -one]]),
            Gate::S => GateMatrix::One(phase_matrix(FRAC_PI_2)),
            Gate::T => GateMatrix::One(phase_matrix(FRAC_PI_4)),
            Gate::Phase(theta) => GateMatrix::One(phase_matrix(*theta)),
            Gate::ControlledX => GateMatrix::controlled(&[[zero, one], [one, zero]]),
            Gate::ControlledZ => GateMatrix::controlled(&[[one, zero], [zero, -one]]),
            Gate::ControlledPhase(theta) => GateMatrix::controlled(&phase_matrix(*theta)),
            Gate::Swap => {
                let mut m = identity4();
                m[1][1] = zero;
                m[2][2] = zero;
                m[1][2] = one;
                m[2][1] = one;
                GateMatrix::Two(m)
            }
            Gate::Unitary1(m) => GateMatrix::One(*m),
            Gate::Unitary2(m) => GateMatrix::Two(*m),
        }
    }

    /// Diagram symbols for each operand, in operand order.
    pub(crate) fn symbols(&self) -> &'static [&'static str] {
        match self {
            Gate::Identity => &["I"],
            Gate::Hadamard => &["H"],
            Gate::PauliX => &["X"],
            Gate::PauliY => &["Y"],
            Gate::PauliZ => &["Z"],
            Gate::S => &["S"],
            Gate::T => &["T"],
            Gate::Phase(_) => &["P"],
            Gate::ControlledX => &["●", "X"],
            Gate::ControlledZ => &["●", "●"],
            Gate::ControlledPhase(_) => &["●", "P"],
            Gate::Swap => &["x", "x"],
            Gate::Unitary1(_) => &["U"],
            Gate::Unitary2(_) => &["U", "U"],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Phase(theta) | Gate::ControlledPhase(theta) => {
                write!(f, "{}({:.4})", self.name(), theta)
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// `diag(1, e^{i theta})`.
pub fn phase_matrix(theta: f64) -> Matrix2 {
    [
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, theta)],
    ]
}

fn identity4() -> Matrix4 {
    let mut m = [[Complex::zero(); 4]; 4];
    for (k, row) in m.iter_mut().enumerate() {
        row[k] = Complex::one();
    }
    m
}

/// A gate bound to the qubits it acts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub gate: Gate,
    pub qubits: Vec<QubitId>,
}

impl Operation {
    /// Binds `gate` to `qubits`. Arity and range are checked when the
    /// operation is validated against a circuit, not here.
    pub fn new<I, Q>(gate: Gate, qubits: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QubitId>,
    {
        Self {
            gate,
            qubits: qubits.into_iter().map(Into::into).collect(),
        }
    }

    /// Qubits this operation touches.
    pub fn involved_qubits(&self) -> &[QubitId] {
        &self.qubits
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate)?;
        for (k, q) in self.qubits.iter().enumerate() {
            write!(f, "{}{}", if k == 0 { " " } else { ", " }, q)?;
        }
        Ok(())
    }
}
