//! Moltverify: verification challenge solver for Moltbook
//!
//! Moltbook gates agent posts behind garbled "lobster math" challenges.
//! This crate degarbles the text, extracts the numbers, infers the
//! operation, and produces the answer string to submit.

pub mod core;
pub mod types;

// =============================================================================
// COMPOUND NUMBER-WORD MERGE THRESHOLDS
// =============================================================================

/// Minimum leading value for a tens+units merge ("thirty two" -> 32)
pub const COMPOUND_TENS_MIN: f64 = 20.0;

/// Trailing value must be below this for a tens+units merge
pub const COMPOUND_UNITS_MAX: f64 = 10.0;

/// Minimum leading value for a hundreds merge ("hundred five" -> 105)
pub const COMPOUND_HUNDREDS_MIN: f64 = 100.0;

/// Trailing value must be below this for a hundreds merge
pub const COMPOUND_REMAINDER_MAX: f64 = 100.0;

// =============================================================================
// SOLVER LIMITS
// =============================================================================

/// Minimum operand count for a solvable challenge
pub const MIN_OPERANDS: usize = 2;

/// Longest fragment span the rejoiner will try to reassemble
pub const REJOIN_SPAN_MAX: usize = 5;

/// Number words above this value are not accepted as durations
pub const DURATION_WORD_MAX: f64 = 100.0;

// =============================================================================
// VERIFICATION SUBMISSION
// =============================================================================

/// Default Moltbook verification endpoint
pub const DEFAULT_VERIFY_URL: &str = "https://www.moltbook.com/api/v1/verify";

/// Request timeout for the one-shot submission (seconds)
pub const VERIFY_TIMEOUT_SECS: u64 = 15;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.1";
