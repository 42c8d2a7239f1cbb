//! Phase kickback demo.
//!
//! Builds `H(0), X(1), CZ(0,1), H(0)`, prints the circuit and the final
//! amplitudes, then samples the measured qubits and prints the histogram and
//! its JSON form.
//!
//! ```sh
//! RUST_LOG=kickback=debug cargo run --example phase_kickback -- 2048
//! ```

use kickback::{Circuit, SimError, Simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let shots = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|e| SimError::Configuration(format!("bad shot count '{}': {}", arg, e)))?,
        None => SimulatorConfig::default().shots,
    };

    println!("--- kickback: phase kickback on two qubits ---");
    let circuit = Circuit::phase_kickback();
    println!("\n{}", circuit);

    let simulator = Simulator::with_config(SimulatorConfig::new().with_shots(shots));

    let state = simulator.statevector(&circuit)?;
    println!("Final state: {}", state);

    let result = simulator.run(&circuit)?;
    println!("\n{}", result);
    println!("JSON: {}", result.to_json()?);

    if let Some((bits, n)) = result.most_frequent() {
        println!("\nMost frequent outcome: {} ({} of {} shots)", bits, n, result.shots());
    }
    Ok(())
}
