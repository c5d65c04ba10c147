//! Operands chosen for the final computation

use serde::{Deserialize, Serialize};

use crate::MIN_OPERANDS;

/// Output of operand selection: the values the resolver computes with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperandSet {
    /// Selected values, in extraction order
    pub values: Vec<f64>,
    /// True when the same-number policy kept duplicates
    pub same_number: bool,
}

impl OperandSet {
    /// Create a new operand set
    pub fn new(values: Vec<f64>, same_number: bool) -> Self {
        Self { values, same_number }
    }

    /// Number of selected operands
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no operands were selected
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A challenge needs at least two operands to be solvable
    pub fn is_solvable(&self) -> bool {
        self.values.len() >= MIN_OPERANDS
    }
}
