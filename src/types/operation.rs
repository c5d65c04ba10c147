//! Arithmetic operator definitions

use serde::{Deserialize, Serialize};

/// Operator symbol detected in the raw challenge text, before cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplicitOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ExplicitOp {
    /// Arithmetic operation this symbol maps to
    pub fn operation(&self) -> Operation {
        match self {
            ExplicitOp::Add => Operation::Add,
            ExplicitOp::Subtract => Operation::Subtract,
            ExplicitOp::Multiply => Operation::Multiply,
            ExplicitOp::Divide => Operation::Divide,
        }
    }
}

impl std::fmt::Display for ExplicitOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExplicitOp::Add => "add",
            ExplicitOp::Subtract => "subtract",
            ExplicitOp::Multiply => "multiply",
            ExplicitOp::Divide => "divide",
        };
        write!(f, "{}", name)
    }
}

/// Arithmetic operation applied to the selected operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Sum of every selected operand, not just the first two
    SumAll,
}

impl Operation {
    /// Apply to the operand list. Binary operations use the first two
    /// values; division by zero yields 0 per challenge rules.
    pub fn apply(&self, operands: &[f64]) -> f64 {
        let a = operands.first().copied().unwrap_or(0.0);
        let b = operands.get(1).copied().unwrap_or(0.0);
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
            Operation::SumAll => operands.iter().sum(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
            Operation::Multiply => "MULTIPLY",
            Operation::Divide => "DIVIDE",
            Operation::SumAll => "SUM_ALL",
        };
        write!(f, "{}", name)
    }
}
