//! Degarbled challenge text

use serde::{Deserialize, Serialize};

use crate::types::ExplicitOp;

/// A challenge after degarbling: the cleaned text plus any operator
/// symbol that was visible in the raw input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedChallenge {
    /// Lowercased, de-noised, fragment-rejoined text
    pub text: String,
    /// Operator symbol detected in the raw text, if any
    pub explicit_op: Option<ExplicitOp>,
}

impl CleanedChallenge {
    /// Create a new cleaned challenge
    pub fn new(text: impl Into<String>, explicit_op: Option<ExplicitOp>) -> Self {
        Self { text: text.into(), explicit_op }
    }
}
