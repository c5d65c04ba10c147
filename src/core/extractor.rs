//! Number extraction from raw and cleaned challenge text

use crate::core::vocabulary::{NUMBER_WORDS, RE_DIGIT_LITERAL};
use crate::types::NumberToken;
use crate::{
    COMPOUND_HUNDREDS_MIN, COMPOUND_REMAINDER_MAX, COMPOUND_TENS_MIN, COMPOUND_UNITS_MAX,
};

/// Extractor for digit literals and spelled-out numbers
#[derive(Debug, Default)]
pub struct NumberExtractor;

impl NumberExtractor {
    /// Create new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract every numeric value from a challenge.
    ///
    /// Digit literals are read from the raw text (noise injection leaves
    /// digits and decimal points intact); spelled-out numbers are read
    /// from the cleaned text. Word-derived values are listed before
    /// digit-derived values.
    pub fn extract(&self, raw: &str, cleaned: &str) -> Vec<NumberToken> {
        let mut found = self.word_numbers(cleaned);
        found.extend(self.digit_numbers(raw));
        found
    }

    /// Digit literals (integer or decimal) on word boundaries in raw text
    fn digit_numbers(&self, raw: &str) -> Vec<NumberToken> {
        RE_DIGIT_LITERAL
            .captures_iter(raw)
            .filter_map(|c| c[1].parse::<f64>().ok())
            .map(NumberToken::digit)
            .collect()
    }

    /// Spelled-out numbers from the cleaned token stream.
    ///
    /// Two-token compounds merge at most once per token: tens+units
    /// ("thirty two" -> 32) and hundreds+remainder ("hundred five" ->
    /// 105). No triple-merge chains.
    fn word_numbers(&self, cleaned: &str) -> Vec<NumberToken> {
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let mut found = Vec::new();
        let mut i = 0;
        while i < words.len() {
            if let Some(&val) = NUMBER_WORDS.get(words[i]) {
                let mut value = val;
                if let Some(&next) = words.get(i + 1).and_then(|w| NUMBER_WORDS.get(*w)) {
                    if (value >= COMPOUND_TENS_MIN && next < COMPOUND_UNITS_MAX)
                        || (value >= COMPOUND_HUNDREDS_MIN && next < COMPOUND_REMAINDER_MAX)
                    {
                        value += next;
                        i += 1;
                    }
                }
                found.push(NumberToken::word(value));
            }
            i += 1;
        }
        found
    }
}

// =============================================================================
// TESTS
// =============================================================================
