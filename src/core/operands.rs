//! Operand selection: same-number detection and order-preserving dedup

use crate::core::vocabulary::RE_DIGIT_PAIR;
use crate::types::{ExplicitOp, NumberToken, OperandSet};
use crate::MIN_OPERANDS;

/// Selector that turns extracted numbers into resolver operands
#[derive(Debug, Default)]
pub struct OperandSelector;

impl OperandSelector {
    /// Create new selector
    pub fn new() -> Self {
        Self
    }

    /// Choose the operands the resolver will compute with.
    ///
    /// Challenges like "4 * 4" legitimately use the same number twice, so
    /// plain dedup would destroy an operand. Same-number mode is entered
    /// when the raw text shows the pattern directly, or when duplicate
    /// values appear together with an explicit operator symbol. Otherwise
    /// values deduplicate by exact equality, first-seen order preserved.
    pub fn select(
        &self,
        raw: &str,
        tokens: &[NumberToken],
        explicit_op: Option<ExplicitOp>,
    ) -> OperandSet {
        let values: Vec<f64> = tokens.iter().map(|t| t.value).collect();

        let mut same_number = has_same_digit_pair(raw);
        if !same_number && values.len() >= MIN_OPERANDS && explicit_op.is_some() {
            same_number = has_duplicate(&values);
        }

        if same_number {
            let kept: Vec<f64> = values.into_iter().take(MIN_OPERANDS).collect();
            return OperandSet::new(kept, true);
        }

        let mut unique: Vec<f64> = Vec::with_capacity(values.len());
        for v in values {
            if !unique.contains(&v) {
                unique.push(v);
            }
        }
        OperandSet::new(unique, false)
    }
}

/// True when the raw text contains the same digit run on both sides of an
/// operator symbol ("12 * 12"). Match starts advance one position at a
/// time so chained expressions ("3 + 4 * 4") are still seen.
fn has_same_digit_pair(raw: &str) -> bool {
    let mut start = 0;
    while start < raw.len() {
        let Some(caps) = RE_DIGIT_PAIR.captures(&raw[start..]) else {
            return false;
        };
        if caps[1] == caps[2] {
            return true;
        }
        let offset = caps.get(0).unwrap().start();
        start += offset + 1;
    }
    false
}

/// True if any value occurs at least twice
fn has_duplicate(values: &[f64]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, v)| values[i + 1..].contains(v))
}

// =============================================================================
// TESTS
// =============================================================================
