//! Challenge solver: composes the full pipeline
//!
//! degarble -> extract numbers -> select operands -> resolve operation
//! -> format answer. Every stage is pure; a solver can be shared freely
//! across threads.

use crate::core::{Degarbler, NumberExtractor, OperandSelector, OperationResolver};
use crate::types::{CleanedChallenge, SolveOutput};

/// End-to-end solver for garbled verification challenges
#[derive(Debug, Default)]
pub struct ChallengeSolver {
    degarbler: Degarbler,
    extractor: NumberExtractor,
    selector: OperandSelector,
    resolver: OperationResolver,
}

impl ChallengeSolver {
    /// Create new solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Solve a raw challenge.
    ///
    /// Returns the two-decimal answer string, or `None` when fewer than
    /// two operands could be found. Never panics on malformed input.
    pub fn solve(&self, challenge: &str) -> Option<String> {
        self.solve_detailed(challenge).answer
    }

    /// Solve with the full pipeline breakdown, for verbose and JSON output.
    pub fn solve_detailed(&self, challenge: &str) -> SolveOutput {
        let cleaned = self.degarbler.degarble(challenge);
        let tokens = self.extractor.extract(challenge, &cleaned.text);
        let operands = self.selector.select(challenge, &tokens, cleaned.explicit_op);

        if !operands.is_solvable() {
            let CleanedChallenge { text, explicit_op } = cleaned;
            return SolveOutput::new(text, explicit_op, operands.values, None, None);
        }

        let resolution = self.resolver.resolve(&cleaned, &operands);
        let answer = format_answer(resolution.value);

        let CleanedChallenge { text, explicit_op } = cleaned;
        SolveOutput::new(
            text,
            explicit_op,
            operands.values,
            Some(resolution.decision),
            Some(answer),
        )
    }
}

/// Render a result with exactly two fractional digits
pub fn format_answer(value: f64) -> String {
    format!("{value:.2}")
}

// =============================================================================
// TESTS
// =============================================================================
