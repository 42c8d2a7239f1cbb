// tests/simulation_tests.rs

use kickback::{
    Circuit, CircuitBuilder, Gate, QubitId, SimError, SimulationResult, Simulator, SimulatorConfig,
};

fn seeded(seed: u64) -> Simulator {
    Simulator::with_config(SimulatorConfig::new().with_seed(seed))
}

// Helper to check that every shot landed on a single outcome
fn check_single_outcome(result: &SimulationResult, bitstring: &str) {
    assert_eq!(
        result.get(bitstring),
        u64::from(result.shots()),
        "expected every shot to read {}, got {:?}",
        bitstring,
        result.counts()
    );
    assert_eq!(result.counts().len(), 1);
}

#[test]
fn test_phase_kickback_end_to_end() -> Result<(), SimError> {
    let circuit = CircuitBuilder::new(2)
        .h(0)
        .x(1)
        .cz(0, 1)
        .h(0)
        .measure_all()
        .build();
    assert_eq!(circuit, Circuit::phase_kickback());

    let result = Simulator::new().run(&circuit)?;
    assert_eq!(result.shots(), 1024);
    check_single_outcome(&result, "11");
    assert_eq!(result.to_json()?, r#"{"11":1024}"#);
    Ok(())
}

#[test]
fn test_shot_count_only_scales_totals() -> Result<(), SimError> {
    let circuit = Circuit::phase_kickback();
    let simulator = seeded(11);
    for shots in [1, 7, 100, 1024, 5000] {
        let result = simulator.run_with_shots(&circuit, shots)?;
        assert_eq!(result.counts().total(), u64::from(shots));
        check_single_outcome(&result, "11");
        assert_eq!(result.probabilities().get("11"), Some(&1.0));
    }
    Ok(())
}

#[test]
fn test_controlled_phase_pi_matches_cz() -> Result<(), SimError> {
    let circuit = CircuitBuilder::new(2)
        .h(0)
        .x(1)
        .cphase(0, 1, std::f64::consts::PI)
        .h(0)
        .measure_all()
        .build();
    check_single_outcome(&seeded(2).run(&circuit)?, "11");
    Ok(())
}

#[test]
fn test_kickback_with_control_and_target_swapped() -> Result<(), SimError> {
    // CZ is symmetric, so the kickback works with q1 as control.
    let circuit = CircuitBuilder::new(2)
        .h(1)
        .x(0)
        .cz(1, 0)
        .h(1)
        .measure_all()
        .build();
    check_single_outcome(&seeded(3).run(&circuit)?, "11");
    Ok(())
}

#[test]
fn test_measuring_only_the_control() -> Result<(), SimError> {
    let circuit = CircuitBuilder::new(2)
        .h(0)
        .x(1)
        .cz(0, 1)
        .h(0)
        .measure([0])
        .build();
    let result = seeded(4).run(&circuit)?;
    assert_eq!(result.measured(), &[QubitId(0)]);
    check_single_outcome(&result, "1");
    Ok(())
}

#[test]
fn test_same_seed_same_counts() -> Result<(), SimError> {
    let circuit = CircuitBuilder::new(2).h(0).h(1).measure_all().build();
    let first = seeded(1234).run(&circuit)?;
    let second = seeded(1234).run(&circuit)?;
    assert_eq!(first.counts(), second.counts());
    assert_eq!(first.counts().total(), 1024);
    assert!(first.counts().len() > 1, "uniform superposition should spread shots: {:?}", first.counts());
    Ok(())
}

#[test]
fn test_bell_state_only_correlated_outcomes() -> Result<(), SimError> {
    let circuit = CircuitBuilder::new(2).h(0).cx(0, 1).measure_all().build();
    let result = seeded(99).run_with_shots(&circuit, 4000)?;
    assert_eq!(result.get("00") + result.get("11"), 4000);
    assert_eq!(result.get("01") + result.get("10"), 0);
    // 6 sigma around 2000 is ~190.
    assert!(result.get("00") > 1800 && result.get("11") > 1800);
    Ok(())
}

#[test]
fn test_out_of_range_qubit_is_reported() {
    let circuit = CircuitBuilder::new(2).h(0).cz(0, 2).build();
    let err = Simulator::new().run(&circuit).unwrap_err();
    assert_eq!(err, SimError::QubitOutOfRange { qubit: QubitId(2), num_qubits: 2 });
}

#[test]
fn test_non_unitary_custom_gate_reports_normalization() {
    let zero = num_complex::Complex::new(0.0, 0.0);
    let half = num_complex::Complex::new(0.5, 0.0);
    let circuit = CircuitBuilder::new(1)
        .gate(Gate::Unitary1([[half, zero], [zero, half]]), [0])
        .measure_all()
        .build();
    match seeded(8).run(&circuit) {
        Err(SimError::NotNormalized { norm_sqr, tolerance }) => {
            assert!((norm_sqr - 0.25).abs() < 1e-12);
            assert_eq!(tolerance, 1e-6);
        }
        other => panic!("expected NotNormalized, got {:?}", other),
    }
}

#[test]
fn test_circuit_from_json_description() -> Result<(), SimError> {
    let json = r#"{
        "num_qubits": 2,
        "operations": [
            {"gate": "hadamard", "qubits": [0]},
            {"gate": "pauli_x", "qubits": [1]},
            {"gate": "controlled_z", "qubits": [0, 1]},
            {"gate": "hadamard", "qubits": [0]}
        ],
        "measured": [0, 1]
    }"#;
    let circuit = Circuit::from_json(json)?;
    assert_eq!(circuit, Circuit::phase_kickback());

    let config = SimulatorConfig::from_json(r#"{"shots": 256, "seed": 5}"#)?;
    let result = Simulator::with_config(config).run(&circuit)?;
    check_single_outcome(&result, "11");
    assert_eq!(result.shots(), 256);
    Ok(())
}

#[test]
fn test_malformed_json_is_a_serialization_error() {
    assert!(matches!(
        Circuit::from_json(r#"{"num_qubits": 2, "operations": [{"gate": "warp"}]}"#),
        Err(SimError::Serialization(_))
    ));
}
