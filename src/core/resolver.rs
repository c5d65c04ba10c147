//! Operation resolution: a fixed-priority cascade
//!
//! Tiers, first match wins:
//! 1. explicit operator symbol from the raw text
//! 2. rate x duration ("four meters per second for five seconds")
//! 3. keyword category (each / additive / subtractive / ...)
//! 4. fallback: sum of every operand

use crate::core::vocabulary::{
    contains_any, ADDITIVE_KEYWORDS, AGGREGATE_KEYWORDS, DIVISIVE_KEYWORDS,
    MULTIPLICATIVE_KEYWORDS, NUMBER_WORDS, RATE_PHRASES, RE_DURATION, SUBTRACTIVE_KEYWORDS,
};
use crate::types::{CleanedChallenge, DecisionTier, OperandSet, Operation, OperationDecision};

/// Resolved operation and computed result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub value: f64,
    pub decision: OperationDecision,
}

/// Resolver applying the priority cascade
#[derive(Debug, Default)]
pub struct OperationResolver;

impl OperationResolver {
    /// Create new resolver
    pub fn new() -> Self {
        Self
    }

    /// Pick the operation for a challenge and compute the result.
    /// Callers check `operands.is_solvable()` first.
    pub fn resolve(&self, challenge: &CleanedChallenge, operands: &OperandSet) -> Resolution {
        if let Some(op) = challenge.explicit_op {
            let operation = op.operation();
            return Resolution {
                value: operation.apply(&operands.values),
                decision: OperationDecision::new(operation, DecisionTier::ExplicitSymbol),
            };
        }

        if let Some(value) = rate_times_duration(&challenge.text, operands) {
            return Resolution {
                value,
                decision: OperationDecision::new(Operation::Multiply, DecisionTier::RateDuration),
            };
        }

        let (operation, tier) = keyword_category(&challenge.text);
        Resolution {
            value: operation.apply(&operands.values),
            decision: OperationDecision::new(operation, tier),
        }
    }
}

/// Rate phrase plus a "for <n> <unit>" duration, with no subtraction cue
/// present. A duration that resolves to zero falls through to the
/// keyword tier.
fn rate_times_duration(text: &str, operands: &OperandSet) -> Option<f64> {
    if !contains_any(text, RATE_PHRASES) || contains_any(text, SUBTRACTIVE_KEYWORDS) {
        return None;
    }

    let caps = RE_DURATION.captures(text)?;
    let token = &caps[1];
    let duration = token
        .parse::<f64>()
        .ok()
        .or_else(|| NUMBER_WORDS.get(token).copied())
        .unwrap_or(0.0);
    if duration == 0.0 {
        return None;
    }

    let rate = operands.values.first().copied()?;
    Some(rate * duration)
}

/// Keyword category checks, in fixed order
fn keyword_category(text: &str) -> (Operation, DecisionTier) {
    if text.contains("each") {
        (Operation::Multiply, DecisionTier::KeywordEach)
    } else if contains_any(text, ADDITIVE_KEYWORDS) {
        (Operation::Add, DecisionTier::KeywordAdditive)
    } else if contains_any(text, SUBTRACTIVE_KEYWORDS) {
        (Operation::Subtract, DecisionTier::KeywordSubtractive)
    } else if contains_any(text, MULTIPLICATIVE_KEYWORDS) {
        (Operation::Multiply, DecisionTier::KeywordMultiplicative)
    } else if contains_any(text, DIVISIVE_KEYWORDS) {
        (Operation::Divide, DecisionTier::KeywordDivisive)
    } else if contains_any(text, AGGREGATE_KEYWORDS) {
        (Operation::SumAll, DecisionTier::KeywordAggregate)
    } else {
        (Operation::SumAll, DecisionTier::FallbackSum)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExplicitOp;

    fn resolve(text: &str, explicit_op: Option<ExplicitOp>, values: &[f64]) -> Resolution {
        let challenge = CleanedChallenge::new(text, explicit_op);
        let operands = OperandSet::new(values.to_vec(), false);
        OperationResolver::new().resolve(&challenge, &operands)
    }

    #[test]
    fn test_explicit_symbol_beats_every_keyword() {
        // "gains" would say add, but the raw text carried a '/'.
        let r = resolve("gains 8 over 2", Some(ExplicitOp::Divide), &[8.0, 2.0]);
        assert_eq!(r.value, 4.0);
        assert_eq!(r.decision.tier, DecisionTier::ExplicitSymbol);
    }

    #[test]
    fn test_explicit_divide_by_zero_yields_zero() {
        let r = resolve("8 0", Some(ExplicitOp::Divide), &[8.0, 0.0]);
        assert_eq!(r.value, 0.0);
    }

    #[test]
    fn test_rate_times_duration() {
        let r = resolve(
            "a crab moves at four meters per second for five seconds",
            None,
            &[4.0, 5.0],
        );
        assert_eq!(r.value, 20.0);
        assert_eq!(r.decision.tier, DecisionTier::RateDuration);
    }

    #[test]
    fn test_rate_with_digit_duration() {
        let r = resolve("two cm per second for 6 secs", None, &[2.0, 6.0]);
        assert_eq!(r.value, 12.0);
        assert_eq!(r.decision.tier, DecisionTier::RateDuration);
    }

    #[test]
    fn test_rate_tier_skipped_when_subtractive_cue_present() {
        let r = resolve(
            "slows from eight meters per second for two seconds",
            None,
            &[8.0, 2.0],
        );
        assert_eq!(r.decision.tier, DecisionTier::KeywordSubtractive);
        assert_eq!(r.value, 6.0);
    }

    #[test]
    fn test_zero_duration_falls_through_to_keywords() {
        let r = resolve(
            "gains four meters per second for zero seconds",
            None,
            &[4.0, 0.0],
        );
        assert_eq!(r.decision.tier, DecisionTier::KeywordAdditive);
        assert_eq!(r.value, 4.0);
    }

    #[test]
    fn test_each_implies_multiplication() {
        let r = resolve("ten lobsters each carrying five newtons", None, &[10.0, 5.0]);
        assert_eq!(r.value, 50.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordEach);
    }

    #[test]
    fn test_each_beats_additive_keywords() {
        let r = resolve("each lobster gains five newtons twice", None, &[5.0, 2.0]);
        assert_eq!(r.decision.tier, DecisionTier::KeywordEach);
    }

    #[test]
    fn test_additive_keyword() {
        let r = resolve("gains thirty two newtons and ten newtons", None, &[32.0, 10.0]);
        assert_eq!(r.value, 42.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordAdditive);
    }

    #[test]
    fn test_subtractive_keyword() {
        let r = resolve("loses three of nine claws", None, &[9.0, 3.0]);
        assert_eq!(r.value, 6.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordSubtractive);
    }

    #[test]
    fn test_multiplicative_keyword() {
        let r = resolve("seven times three", None, &[7.0, 3.0]);
        assert_eq!(r.value, 21.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordMultiplicative);
    }

    #[test]
    fn test_divisive_keyword_with_zero_guard() {
        let r = resolve("eight divided by zero", None, &[8.0, 0.0]);
        assert_eq!(r.value, 0.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordDivisive);
    }

    #[test]
    fn test_aggregate_sums_every_operand() {
        let r = resolve("the total of two three and four", None, &[2.0, 3.0, 4.0]);
        assert_eq!(r.value, 9.0);
        assert_eq!(r.decision.tier, DecisionTier::KeywordAggregate);
    }

    #[test]
    fn test_fallback_sums_every_operand() {
        let r = resolve("two lobsters and three crabs", None, &[2.0, 3.0]);
        assert_eq!(r.value, 5.0);
        assert_eq!(r.decision.tier, DecisionTier::FallbackSum);
    }
}
