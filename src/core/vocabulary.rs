//! Static lookup tables for degarbling, extraction, and resolution
//!
//! Every table is built once at first use and never mutated, so it is
//! shared read-only across concurrent solves.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::DURATION_WORD_MAX;

/// Domain nouns the fragment rejoiner reassembles alongside number words
pub const DOMAIN_TERMS: &[&str] = &[
    "total",
    "force",
    "distance",
    "lobster",
    "newtons",
    "meters",
    "seconds",
    "minutes",
    "centimeters",
    "kilometers",
    "increases",
    "decreases",
    "accelerates",
    "decelerates",
    "molting",
    "antenna",
    "exerts",
];

// =============================================================================
// Operation keyword categories (substring containment on cleaned text)
// =============================================================================

/// Phrases marking a per-time rate
pub const RATE_PHRASES: &[&str] = &[
    "per second",
    "per sec",
    "per minute",
    "per min",
    "per hour",
    "cm per",
    "meters per",
];

/// Keywords implying addition
pub const ADDITIVE_KEYWORDS: &[&str] = &[
    "plus",
    "added",
    "adds",
    "more than",
    "additional",
    "gained",
    "gains",
    "gain",
    "accelerates",
    "faster",
    "increases",
    "speeds",
    "more",
    "earns",
    "collects",
    "gathers",
    "receives",
    "gets",
];

/// Keywords implying subtraction
pub const SUBTRACTIVE_KEYWORDS: &[&str] = &[
    "slow",
    "slows",
    "reduce",
    "reduces",
    "resistance",
    "decelerate",
    "loses",
    "drops",
    "decreases",
    "minus",
    "subtract",
    "less",
    "gave away",
    "spent",
    "remaining",
    "left over",
];

/// Keywords implying multiplication
pub const MULTIPLICATIVE_KEYWORDS: &[&str] =
    &["times", "multiply", "multiplied", "multiplies", "multi"];

/// Keywords implying division
pub const DIVISIVE_KEYWORDS: &[&str] = &["divided", "divide", "split", "shared equally"];

/// Keywords asking for an overall total
pub const AGGREGATE_KEYWORDS: &[&str] = &["total", "combined", "altogether", "sum", "how many"];

/// True if any keyword from `words` occurs in `text`
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

lazy_static! {
    // =========================================================================
    // Word corrections: garbled spelling -> intended word
    // =========================================================================
    pub static ref WORD_CORRECTIONS: HashMap<&'static str, &'static str> = {
        let entries = [
            ("thre", "three"),
            ("fourten", "fourteen"),
            ("fiften", "fifteen"),
            ("sixten", "sixteen"),
            ("seventen", "seventeen"),
            ("eighten", "eighteen"),
            ("nineten", "nineteen"),
            ("twety", "twenty"),
            ("thrty", "thirty"),
            ("fty", "fifty"),
            ("sxty", "sixty"),
            ("sevnty", "seventy"),
            ("eghty", "eighty"),
            ("nnety", "ninety"),
            ("hundrd", "hundred"),
            ("thousnd", "thousand"),
            ("lobstr", "lobster"),
            ("twnty", "twenty"),
            ("thrte", "thirty"),
            ("fife", "five"),
            ("fve", "five"),
            ("hre", "three"),
            ("hirty", "thirty"),
            ("irty", "thirty"),
            ("hirteen", "thirteen"),
            ("ourteen", "fourteen"),
            ("ifteen", "fifteen"),
            ("ixteen", "sixteen"),
            ("ighteen", "eighteen"),
            ("ineteen", "nineteen"),
            ("wenty", "twenty"),
            ("enty", "twenty"),
            ("orty", "forty"),
            ("ighty", "eighty"),
            ("inety", "ninety"),
            ("sped", "speed"),
            ("gans", "gains"),
            ("gan", "gain"),
        ];
        entries.iter().copied().collect()
    };

    // =========================================================================
    // English number words
    // =========================================================================
    pub static ref NUMBER_WORDS: HashMap<&'static str, f64> = {
        let entries: [(&'static str, f64); 29] = [
            ("zero", 0.0),
            ("one", 1.0),
            ("two", 2.0),
            ("three", 3.0),
            ("four", 4.0),
            ("five", 5.0),
            ("six", 6.0),
            ("seven", 7.0),
            ("eight", 8.0),
            ("nine", 9.0),
            ("ten", 10.0),
            ("eleven", 11.0),
            ("twelve", 12.0),
            ("thirteen", 13.0),
            ("fourteen", 14.0),
            ("fifteen", 15.0),
            ("sixteen", 16.0),
            ("seventeen", 17.0),
            ("eighteen", 18.0),
            ("nineteen", 19.0),
            ("twenty", 20.0),
            ("thirty", 30.0),
            ("forty", 40.0),
            ("fifty", 50.0),
            ("sixty", 60.0),
            ("seventy", 70.0),
            ("eighty", 80.0),
            ("ninety", 90.0),
            ("hundred", 100.0),
        ];
        let mut m: HashMap<&'static str, f64> = entries.iter().copied().collect();
        m.insert("thousand", 1000.0);
        m
    };

    // =========================================================================
    // Rejoin targets: words worth reassembling from noise-split fragments
    // =========================================================================
    pub static ref REJOIN_TARGETS: HashSet<&'static str> = {
        let mut set: HashSet<&'static str> = NUMBER_WORDS.keys().copied().collect();
        set.extend(DOMAIN_TERMS.iter().copied());
        set
    };

    // =========================================================================
    // Compiled patterns
    // =========================================================================

    /// Digit literal (integer or decimal) on word boundaries. Noise
    /// injection leaves digits and dots intact, so this runs on raw text.
    pub static ref RE_DIGIT_LITERAL: Regex = Regex::new(r"\b(\d+(?:\.\d+)?)\b").unwrap();

    /// `+` between digits
    pub static ref RE_EXPLICIT_ADD: Regex = Regex::new(r"\d\s*\+\s*\d").unwrap();

    /// `*` or `×` between digits
    pub static ref RE_EXPLICIT_MUL: Regex = Regex::new(r"\d\s*[*×]\s*\d").unwrap();

    /// Bare `*` or `×` anywhere counts as a multiplication cue
    pub static ref RE_BARE_MUL: Regex = Regex::new(r"[*×]").unwrap();

    /// `/` between digits
    pub static ref RE_EXPLICIT_DIV: Regex = Regex::new(r"\d\s*/\s*\d").unwrap();

    /// Whitespace-padded `-` between digits; unpadded `-` is noise
    pub static ref RE_EXPLICIT_SUB: Regex = Regex::new(r"\d\s+-\s+\d").unwrap();

    /// Two digit runs around an operator symbol, for same-number detection
    pub static ref RE_DIGIT_PAIR: Regex = Regex::new(r"(\d+)\s*[+\-*/×]\s*(\d+)").unwrap();

    /// Duration phrase for the rate tier ("for five seconds", "for 12 mins").
    /// Word alternatives are sorted longest-first so a prefix word cannot
    /// shadow a longer one ("six" vs "sixteen").
    pub static ref RE_DURATION: Regex = {
        let mut words: Vec<&str> = NUMBER_WORDS
            .iter()
            .filter(|(_, v)| **v <= DURATION_WORD_MAX)
            .map(|(w, _)| *w)
            .collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let pattern = format!(
            r"\bfor\s+(\d+|{})\s+(seconds?|minutes?|hours?|secs?|mins?)\b",
            words.join("|")
        );
        Regex::new(&pattern).unwrap()
    };
}
