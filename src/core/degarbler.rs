//! Degarbler: recovers readable text from noisy challenge input
//!
//! Moltbook injects random punctuation, case changes, and letter
//! repetitions into challenge text. The degarbler strips the noise and
//! reassembles words the noise split apart. Operator symbols are
//! detected on the raw input first, since cleaning removes them.

use crate::core::vocabulary::{
    RE_BARE_MUL, RE_EXPLICIT_ADD, RE_EXPLICIT_DIV, RE_EXPLICIT_MUL, RE_EXPLICIT_SUB,
    REJOIN_TARGETS, WORD_CORRECTIONS,
};
use crate::types::{CleanedChallenge, ExplicitOp};
use crate::REJOIN_SPAN_MAX;

/// Degarbler for noisy challenge text
#[derive(Debug, Default)]
pub struct Degarbler;

impl Degarbler {
    /// Create new degarbler
    pub fn new() -> Self {
        Self
    }

    /// Clean garbled challenge text.
    ///
    /// Returns the cleaned text together with any operator symbol seen in
    /// the raw input.
    pub fn degarble(&self, challenge: &str) -> CleanedChallenge {
        let explicit_op = detect_explicit_op(challenge);

        // Strip punctuation, lowercase, collapse repeated characters.
        // Heavy runs first, then a second pass for the leftover doubles.
        let stripped: String = challenge
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let collapsed = collapse_runs(&collapse_runs(&stripped, 3), 2);

        let corrected: Vec<&str> = collapsed
            .split_whitespace()
            .map(|w| WORD_CORRECTIONS.get(w).copied().unwrap_or(w))
            .collect();

        let rejoined = rejoin_fragments(&corrected);

        CleanedChallenge::new(rejoined.join(" "), explicit_op)
    }
}

/// Detect an operator symbol in the raw text, first match in priority
/// order wins. A bare `*` or `×` anywhere counts as multiplication even
/// without adjacent digits.
fn detect_explicit_op(raw: &str) -> Option<ExplicitOp> {
    if RE_EXPLICIT_ADD.is_match(raw) {
        Some(ExplicitOp::Add)
    } else if RE_EXPLICIT_MUL.is_match(raw) || RE_BARE_MUL.is_match(raw) {
        Some(ExplicitOp::Multiply)
    } else if RE_EXPLICIT_DIV.is_match(raw) {
        Some(ExplicitOp::Divide)
    } else if RE_EXPLICIT_SUB.is_match(raw) {
        Some(ExplicitOp::Subtract)
    } else {
        None
    }
}

/// Collapse every run of `threshold` or more identical characters to a
/// single instance. Shorter runs pass through unchanged.
fn collapse_runs(text: &str, threshold: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        if run >= threshold {
            out.push(c);
        } else {
            for _ in 0..run {
                out.push(c);
            }
        }
    }
    out
}

/// Reassemble words that noise split across whitespace ("thi rty" ->
/// "thirty"). At each position spans of 5 down to 2 tokens are tried, so
/// the most complete candidate wins; the concatenation is also run
/// through the correction table before matching.
fn rejoin_fragments(words: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let mut matched = false;
        for span in (2..=REJOIN_SPAN_MAX).rev() {
            if i + span > words.len() {
                continue;
            }
            let combined: String = words[i..i + span].concat();
            if REJOIN_TARGETS.contains(combined.as_str()) {
                out.push(combined);
                i += span;
                matched = true;
                break;
            }
            if let Some(fixed) = WORD_CORRECTIONS.get(combined.as_str()) {
                if REJOIN_TARGETS.contains(fixed) {
                    out.push((*fixed).to_string());
                    i += span;
                    matched = true;
                    break;
                }
            }
        }
        if !matched {
            out.push(words[i].to_string());
            i += 1;
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn degarble(text: &str) -> CleanedChallenge {
        Degarbler::new().degarble(text)
    }

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        let out = degarble("A] Lo^bSt-Er!");
        assert_eq!(out.text, "a lobster");
    }

    #[test]
    fn test_collapses_heavy_and_light_repetition() {
        let out = degarble("craaaab claaw");
        assert_eq!(out.text, "crab claw");
    }

    #[test]
    fn test_collapse_runs_is_idempotent() {
        let once = collapse_runs(&collapse_runs("molttttinggg seasonn", 3), 2);
        let twice = collapse_runs(&collapse_runs(&once, 3), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_word_corrections_apply_exact_match() {
        let out = degarble("the lobstr gans twety");
        assert_eq!(out.text, "the lobster gains twenty");
    }

    #[test]
    fn test_rejoins_split_number_words() {
        let out = degarble("thi rty newtons");
        assert_eq!(out.text, "thirty newtons");
    }

    #[test]
    fn test_rejoins_split_domain_terms() {
        let out = degarble("new tons of force");
        assert_eq!(out.text, "newtons of force");
    }

    #[test]
    fn test_rejoins_five_fragment_span() {
        let out = degarble("cen ti met er s of drift");
        assert_eq!(out.text, "centimeters of drift");
    }

    #[test]
    fn test_rejoin_applies_corrections_to_joined_fragments() {
        // "t" + "wety" joins to "twety", which corrects to "twenty".
        let out = degarble("t wety newtons");
        assert_eq!(out.text, "twenty newtons");
    }

    #[test]
    fn test_explicit_add_between_digits() {
        assert_eq!(degarble("3 + 4").explicit_op, Some(ExplicitOp::Add));
        assert_eq!(degarble("3+4").explicit_op, Some(ExplicitOp::Add));
    }

    #[test]
    fn test_explicit_multiply_between_digits() {
        assert_eq!(degarble("6 * 7").explicit_op, Some(ExplicitOp::Multiply));
        assert_eq!(degarble("6 × 7").explicit_op, Some(ExplicitOp::Multiply));
    }

    #[test]
    fn test_bare_asterisk_counts_as_multiply() {
        let out = degarble("five * lobsters");
        assert_eq!(out.explicit_op, Some(ExplicitOp::Multiply));
    }

    #[test]
    fn test_explicit_divide_between_digits() {
        assert_eq!(degarble("8 / 2").explicit_op, Some(ExplicitOp::Divide));
    }

    #[test]
    fn test_subtract_needs_whitespace_padding() {
        assert_eq!(degarble("9 - 4").explicit_op, Some(ExplicitOp::Subtract));
        // An unpadded dash is injected noise, not subtraction.
        assert_eq!(degarble("9-4").explicit_op, None);
    }

    #[test]
    fn test_add_wins_over_later_symbols() {
        assert_eq!(degarble("1 + 2 / 3").explicit_op, Some(ExplicitOp::Add));
    }

    #[test]
    fn test_no_symbol_gives_none() {
        assert_eq!(degarble("ten lobsters march").explicit_op, None);
    }

    #[test]
    fn test_full_garbled_sentence() {
        let out = degarble("A] Lo^bSt-Er ClAw| F oRcE Is ThIrTy tW o NeW ToNs");
        assert_eq!(out.text, "a lobster claw force is thirty two newtons");
        assert_eq!(out.explicit_op, None);
    }
}
