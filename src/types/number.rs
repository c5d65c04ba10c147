//! Extracted numeric tokens

use serde::{Deserialize, Serialize};

/// Where a numeric value was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberOrigin {
    /// Spelled-out English number in the cleaned text ("thirty two")
    WordPhrase,
    /// Digit literal in the raw text ("32", "4.5")
    DigitLiteral,
}

/// A numeric value found in challenge text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberToken {
    pub value: f64,
    pub origin: NumberOrigin,
}

impl NumberToken {
    /// Token for a spelled-out number
    pub fn word(value: f64) -> Self {
        Self { value, origin: NumberOrigin::WordPhrase }
    }

    /// Token for a digit literal
    pub fn digit(value: f64) -> Self {
        Self { value, origin: NumberOrigin::DigitLiteral }
    }
}
