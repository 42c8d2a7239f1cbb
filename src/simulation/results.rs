// src/simulation/results.rs
use crate::core::{QubitId, SimResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Measurement histogram: bitstring -> number of shots.
///
/// Bitstrings list the measured qubits highest first, so qubit 0 is the
/// rightmost character. Serializes as a flat JSON object, e.g. `{"11":1024}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` hits to `bitstring`.
    pub fn add(&mut self, bitstring: impl Into<String>, n: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += n;
    }

    /// Hits for `bitstring`, 0 if it never occurred.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum over all outcomes.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Outcomes in lexicographic bitstring order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.0.iter()
    }

    /// Relative frequency of each observed outcome.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.0
            .iter()
            .map(|(k, &n)| (k.clone(), n as f64 / total as f64))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of one [`Simulator::run`](super::Simulator::run).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    counts: Counts,
    shots: u32,
    measured: Vec<QubitId>,
}

impl SimulationResult {
    pub(crate) fn new(counts: Counts, shots: u32, measured: Vec<QubitId>) -> Self {
        Self { counts, shots, measured }
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Hits for `bitstring`, 0 if it never occurred.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring)
    }

    /// Number of shots that were requested.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Qubits read out, highest first (the order of bitstring characters).
    pub fn measured(&self) -> &[QubitId] {
        &self.measured
    }

    /// The outcome with the most hits. Ties go to the lexicographically smaller bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&str, u64)>, (k, &n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((k.as_str(), n)),
            })
    }

    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.counts.probabilities()
    }

    /// Counts as JSON, e.g. `{"11":1024}`.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(&self.counts)?)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR_WIDTH: u64 = 40;

        writeln!(f, "Simulation Results ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            return writeln!(f, "  No outcomes recorded.");
        }
        let total = self.counts.total().max(1);
        for (bits, &n) in &self.counts {
            let bar = "#".repeat((n * BAR_WIDTH / total) as usize);
            writeln!(
                f,
                "  {}: {:>6} ({:>6.2}%) {}",
                bits,
                n,
                100.0 * n as f64 / total as f64,
                bar
            )?;
        }
        Ok(())
    }
}
