// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`kickback::operations::Operation`) on a fixed-size register.

use crate::core::{QubitId, SimError, SimResult};
use crate::operations::{Gate, Operation};
use crate::validation::check_qubits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered sequence of operations on `num_qubits` qubits, plus the set of
/// qubits read out at the end.
///
/// There is no mid-circuit measurement: every measured qubit is sampled from
/// the final state, regardless of where `measure` was called.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
    #[serde(default)]
    measured: BTreeSet<QubitId>,
}

impl Circuit {
    /// Creates an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            operations: Vec::new(),
            measured: BTreeSet::new(),
        }
    }

    /// The phase kickback circuit: `H(0), X(1), CZ(0,1), H(0)`, both qubits measured.
    ///
    /// `X(1)` puts the target in `|1>`, an eigenstate of Z with eigenvalue -1.
    /// The controlled-Z kicks that phase onto the control, turning `|+>` into
    /// `|->`, which the final Hadamard maps to `|1>`. Every shot reads `11`.
    pub fn phase_kickback() -> Self {
        CircuitBuilder::new(2)
            .h(0)
            .x(1)
            .cz(0, 1)
            .h(0)
            .measure_all()
            .build()
    }

    /// Appends an operation. Range checks happen in [`Circuit::validate`].
    pub fn add_operation(&mut self, op: Operation) {
        self.operations.push(op);
    }

    /// Appends every operation from `ops`, in order.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.extend(ops);
    }

    /// Marks `targets` as measured.
    pub fn measure<I, Q>(&mut self, targets: I)
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QubitId>,
    {
        self.measured.extend(targets.into_iter().map(Into::into));
    }

    /// Marks every qubit in the register as measured.
    pub fn measure_all(&mut self) {
        self.measured.extend((0..self.num_qubits).map(QubitId));
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Measured qubits in ascending order.
    pub fn measured(&self) -> &BTreeSet<QubitId> {
        &self.measured
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Checks every operation and measurement against the register.
    ///
    /// # Errors
    /// * `SimError::ArityMismatch` if an operation has the wrong number of operands.
    /// * `SimError::QubitOutOfRange` if any qubit index is `>= num_qubits`.
    /// * `SimError::DuplicateQubit` if a two-qubit gate names the same qubit twice.
    pub fn validate(&self) -> SimResult<()> {
        for op in &self.operations {
            if op.qubits.len() != op.gate.arity() {
                return Err(SimError::ArityMismatch {
                    gate: op.gate.name().to_string(),
                    expected: op.gate.arity(),
                    actual: op.qubits.len(),
                });
            }
            check_qubits(&op.qubits, self.num_qubits)?;
        }
        for q in &self.measured {
            if q.index() >= self.num_qubits {
                return Err(SimError::QubitOutOfRange {
                    qubit: *q,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }

    /// Parses a circuit description from JSON.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the circuit description to JSON.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Chaining constructor for [`Circuit`].
///
/// ```
/// use kickback::CircuitBuilder;
///
/// let bell = CircuitBuilder::new(2).h(0).cx(0, 1).measure_all().build();
/// assert_eq!(bell.len(), 2);
/// assert_eq!(bell.measured().len(), 2);
/// ```
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
        }
    }

    /// Appends `gate` on `qubits`.
    pub fn gate<I, Q>(mut self, gate: Gate, qubits: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QubitId>,
    {
        self.circuit.add_operation(Operation::new(gate, qubits));
        self
    }

    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    pub fn h(self, q: usize) -> Self {
        self.gate(Gate::Hadamard, [q])
    }

    pub fn x(self, q: usize) -> Self {
        self.gate(Gate::PauliX, [q])
    }

    pub fn y(self, q: usize) -> Self {
        self.gate(Gate::PauliY, [q])
    }

    pub fn z(self, q: usize) -> Self {
        self.gate(Gate::PauliZ, [q])
    }

    pub fn s(self, q: usize) -> Self {
        self.gate(Gate::S, [q])
    }

    pub fn t(self, q: usize) -> Self {
        self.gate(Gate::T, [q])
    }

    pub fn phase(self, q: usize, theta: f64) -> Self {
        self.gate(Gate::Phase(theta), [q])
    }

    pub fn cx(self, control: usize, target: usize) -> Self {
        self.gate(Gate::ControlledX, [control, target])
    }

    pub fn cz(self, control: usize, target: usize) -> Self {
        self.gate(Gate::ControlledZ, [control, target])
    }

    pub fn cphase(self, control: usize, target: usize, theta: f64) -> Self {
        self.gate(Gate::ControlledPhase(theta), [control, target])
    }

    pub fn swap(self, a: usize, b: usize) -> Self {
        self.gate(Gate::Swap, [a, b])
    }

    pub fn measure<I, Q>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<QubitId>,
    {
        self.circuit.measure(targets);
        self
    }

    pub fn measure_all(mut self) -> Self {
        self.circuit.measure_all();
        self
    }

    /// Finishes the circuit. Validation is deferred to [`Circuit::validate`]
    /// (called by the simulator) so that malformed circuits can still be built
    /// and inspected.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_qubits == 0 {
            return writeln!(f, "Circuit[{} operations on 0 qubits]", self.len());
        }

        const GATE_WIDTH: usize = 7;
        const WIRE: &str = "───────";
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                return symbol.chars().take(GATE_WIDTH).collect();
            }
            let pad = GATE_WIDTH - slen;
            let pre = pad / 2;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(pad - pre)
            )
        }

        let n = self.num_qubits;
        // One extra column for the final measurements.
        let cols = self.len() + usize::from(!self.measured.is_empty());
        let mut grid = vec![vec![WIRE.to_string(); cols]; n];
        let mut v_connect = vec![vec![' '; cols]; n];

        for (t, op) in self.operations.iter().enumerate() {
            let rows: Vec<usize> = op.qubits.iter().map(|q| q.index()).filter(|&r| r < n).collect();
            for (row, symbol) in rows.iter().zip(op.gate.symbols()) {
                grid[*row][t] = format_gate(symbol);
            }
            if let (Some(lo), Some(hi)) = (rows.iter().min(), rows.iter().max()) {
                for connector in v_connect.iter_mut().take(*hi).skip(*lo) {
                    connector[t] = V_WIRE;
                }
            }
        }
        if !self.measured.is_empty() {
            for q in self.measured.iter().filter(|q| q.index() < n) {
                grid[q.index()][cols - 1] = format_gate("M");
            }
        }

        let labels: Vec<String> = (0..n).map(|r| format!("{}: ", QubitId(r))).collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        writeln!(f, "Circuit[{} operations on {} qubits]", self.len(), n)?;
        for r in 0..n {
            writeln!(f, "{:<width$}{}", labels[r], grid[r].join(""), width = width)?;
            if r + 1 < n {
                write!(f, "{}", " ".repeat(width))?;
                for connector in &v_connect[r] {
                    let pre = (GATE_WIDTH - 1) / 2;
                    let post = GATE_WIDTH - 1 - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
