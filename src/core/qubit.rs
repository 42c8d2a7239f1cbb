// src/core/qubit.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within a register.
///
/// Qubit `i` corresponds to bit `i` of a basis-state index (little-endian),
/// so in a printed bitstring qubit 0 is the rightmost character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub usize);

impl QubitId {
    /// Position of this qubit's bit inside a basis-state index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Mask selecting this qubit's bit inside a basis-state index.
    pub(crate) fn mask(self) -> usize {
        1 << self.0
    }
}

impl From<usize> for QubitId {
    fn from(index: usize) -> Self {
        QubitId(index)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
