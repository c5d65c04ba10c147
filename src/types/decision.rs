//! Decision tiers for operation resolution

use serde::{Deserialize, Serialize};

use crate::types::Operation;

/// Which tier of the priority cascade chose the operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionTier {
    /// An operator symbol was present in the raw text
    ExplicitSymbol,
    /// Rate phrase multiplied by a duration phrase
    RateDuration,
    /// "each" implies per-item multiplication
    KeywordEach,
    /// An additive keyword matched
    KeywordAdditive,
    /// A subtractive keyword matched
    KeywordSubtractive,
    /// A multiplicative keyword matched
    KeywordMultiplicative,
    /// A divisive keyword matched
    KeywordDivisive,
    /// Aggregate wording sums every operand
    KeywordAggregate,
    /// No cue matched at all; sum every operand
    FallbackSum,
}

impl DecisionTier {
    /// Short code string (for terminal output and logs)
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExplicitSymbol => "EXPLICIT_SYMBOL",
            Self::RateDuration => "RATE_DURATION",
            Self::KeywordEach => "KEYWORD_EACH",
            Self::KeywordAdditive => "KEYWORD_ADD",
            Self::KeywordSubtractive => "KEYWORD_SUBTRACT",
            Self::KeywordMultiplicative => "KEYWORD_MULTIPLY",
            Self::KeywordDivisive => "KEYWORD_DIVIDE",
            Self::KeywordAggregate => "KEYWORD_AGGREGATE",
            Self::FallbackSum => "FALLBACK_SUM",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExplicitSymbol => "operator symbol in raw text",
            Self::RateDuration => "rate multiplied by duration",
            Self::KeywordEach => "'each' implies multiplication",
            Self::KeywordAdditive => "additive keyword",
            Self::KeywordSubtractive => "subtractive keyword",
            Self::KeywordMultiplicative => "multiplicative keyword",
            Self::KeywordDivisive => "divisive keyword",
            Self::KeywordAggregate => "aggregate keyword, summing all operands",
            Self::FallbackSum => "no cue matched, summing all operands",
        }
    }
}

impl std::fmt::Display for DecisionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// The chosen operation plus the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationDecision {
    pub operation: Operation,
    pub tier: DecisionTier,
}

impl OperationDecision {
    /// Pair an operation with the tier that selected it
    pub fn new(operation: Operation, tier: DecisionTier) -> Self {
        Self { operation, tier }
    }
}
