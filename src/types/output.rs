//! Output structure for solve results

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::types::{ExplicitOp, OperationDecision};

/// Full record of one solve attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Degarbled challenge text
    pub cleaned: String,
    /// Operator symbol found in the raw text
    pub explicit_op: Option<ExplicitOp>,
    /// Operands the resolver computed with
    pub operands: Vec<f64>,
    /// Operation choice; absent when unsolvable
    pub decision: Option<OperationDecision>,
    /// Two-decimal answer string; absent when unsolvable
    pub answer: Option<String>,
}

impl SolveOutput {
    /// Create new output
    pub fn new(
        cleaned: String,
        explicit_op: Option<ExplicitOp>,
        operands: Vec<f64>,
        decision: Option<OperationDecision>,
        answer: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            cleaned,
            explicit_op,
            operands,
            decision,
            answer,
        }
    }

    /// True when an answer was produced
    pub fn solved(&self) -> bool {
        self.answer.is_some()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let answer = self.answer.as_deref().unwrap_or("none");
        let tier = self.decision.map(|d| d.tier.code()).unwrap_or("UNSOLVABLE");
        format!(
            "answer={} | tier={} | operands={:?}",
            answer, tier, self.operands
        )
    }
}
