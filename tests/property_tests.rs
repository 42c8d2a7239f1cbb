//! Property-based tests for the state-vector engine.
//!
//! Random circuits built from the standard gate set must keep the state
//! normalized, and a Hadamard pair must always undo itself.

use kickback::{Circuit, CircuitBuilder, Gate, Simulator, SimulatorConfig};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(usize),
    X(usize),
    Y(usize),
    Z(usize),
    S(usize),
    T(usize),
    P(usize, f64),
    CX(usize, usize),
    CZ(usize, usize),
    CP(usize, usize, f64),
    Swap(usize, usize),
}

impl GateOp {
    fn apply(self, builder: CircuitBuilder) -> CircuitBuilder {
        match self {
            GateOp::H(q) => builder.h(q),
            GateOp::X(q) => builder.x(q),
            GateOp::Y(q) => builder.y(q),
            GateOp::Z(q) => builder.z(q),
            GateOp::S(q) => builder.s(q),
            GateOp::T(q) => builder.t(q),
            GateOp::P(q, theta) => builder.phase(q, theta),
            GateOp::CX(c, t) => builder.cx(c, t),
            GateOp::CZ(c, t) => builder.cz(c, t),
            GateOp::CP(c, t, theta) => builder.cphase(c, t, theta),
            GateOp::Swap(a, b) => builder.swap(a, b),
        }
    }
}

fn arb_pair(num_qubits: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..num_qubits, 0..num_qubits).prop_filter("operands must differ", |(a, b)| a != b)
}

/// Generate a random gate operation for a circuit with given number of qubits.
fn arb_gate_op(num_qubits: usize) -> BoxedStrategy<GateOp> {
    let angle = -std::f64::consts::PI..std::f64::consts::PI;
    let single = prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::Y),
        (0..num_qubits).prop_map(GateOp::Z),
        (0..num_qubits).prop_map(GateOp::S),
        (0..num_qubits).prop_map(GateOp::T),
        (0..num_qubits, angle.clone()).prop_map(|(q, a)| GateOp::P(q, a)),
    ];
    if num_qubits < 2 {
        return single.boxed();
    }
    prop_oneof![
        single,
        arb_pair(num_qubits).prop_map(|(c, t)| GateOp::CX(c, t)),
        arb_pair(num_qubits).prop_map(|(c, t)| GateOp::CZ(c, t)),
        (arb_pair(num_qubits), angle).prop_map(|((c, t), a)| GateOp::CP(c, t, a)),
        arb_pair(num_qubits).prop_map(|(a, b)| GateOp::Swap(a, b)),
    ]
    .boxed()
}

/// Circuits with 1-5 qubits and 0-20 gates.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_usize..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=20).prop_map(move |ops| {
            ops.into_iter()
                .fold(CircuitBuilder::new(num_qubits), |b, op| op.apply(b))
                .build()
        })
    })
}

proptest! {
    #[test]
    fn prop_state_stays_normalized(circuit in arb_circuit()) {
        let state = Simulator::new().statevector(&circuit).expect("valid circuit");
        prop_assert!((state.norm_sqr() - 1.0).abs() < 1e-6, "norm drifted to {}", state.norm_sqr());
    }

    #[test]
    fn prop_hadamard_pair_round_trips(circuit in arb_circuit(), pick in any::<prop::sample::Index>()) {
        let simulator = Simulator::new();
        let before = simulator.statevector(&circuit)?;

        let q = pick.index(circuit.num_qubits());
        let mut doubled = circuit.clone();
        doubled.add_operations([
            kickback::Operation::new(Gate::Hadamard, [q]),
            kickback::Operation::new(Gate::Hadamard, [q]),
        ]);
        let after = simulator.statevector(&doubled)?;
        prop_assert!(after.approx_eq(&before, 1e-9), "H.H on q{} changed {} into {}", q, before, after);
    }

    #[test]
    fn prop_counts_sum_to_shots(circuit in arb_circuit(), shots in 1_u32..2000, seed in any::<u64>()) {
        let simulator = Simulator::with_config(SimulatorConfig::new().with_seed(seed));
        let result = simulator.run_with_shots(&circuit, shots)?;
        prop_assert_eq!(result.counts().total(), u64::from(shots));
        for (bits, _) in result.counts() {
            prop_assert_eq!(bits.len(), circuit.num_qubits());
        }
    }
}
