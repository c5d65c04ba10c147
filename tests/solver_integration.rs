//! Integration tests for the solving pipeline
//!
//! Tests the full path: raw challenge -> degarble -> extract -> select ->
//! resolve -> formatted answer.

use pretty_assertions::assert_eq;

use moltverify::core::ChallengeSolver;
use moltverify::types::{DecisionTier, ExplicitOp, SolveOutput};

fn solve(text: &str) -> Option<String> {
    ChallengeSolver::new().solve(text)
}

/// Explicit symbol between digit literals
#[test]
fn test_explicit_addition() {
    assert_eq!(solve("3 + 4").as_deref(), Some("7.00"));
}

/// Additive keyword with compound number words
#[test]
fn test_additive_keyword_with_compounds() {
    let answer = solve("A lobster gains thirty two newtons and ten newtons");
    assert_eq!(answer.as_deref(), Some("42.00"));
}

/// "each" implies per-item multiplication
#[test]
fn test_each_multiplies() {
    let answer = solve("Ten lobsters, each carrying five newtons");
    assert_eq!(answer.as_deref(), Some("50.00"));
}

/// Rate phrase times duration phrase
#[test]
fn test_rate_times_duration() {
    let answer = solve("A crab moves at four meters per second for five seconds");
    assert_eq!(answer.as_deref(), Some("20.00"));
}

/// Division by zero is a defined result, not a fault
#[test]
fn test_divide_by_zero() {
    assert_eq!(solve("Eight divided by zero").as_deref(), Some("0.00"));
}

/// Fewer than two numbers means no answer
#[test]
fn test_unsolvable_challenge() {
    assert_eq!(solve("Just some noise with no numbers"), None);
    assert_eq!(solve("a lone crab carries seven shells"), None);
}

/// Full garbled input: punctuation, case scrambling, split fragments
#[test]
fn test_garbled_end_to_end() {
    let answer = solve("A] Lo^bSt-Er GaInS ThIrTy tW o NeWtOnS aNd TeN mOrE nEwToNs!!");
    assert_eq!(answer.as_deref(), Some("42.00"));
}

/// Letter-repetition noise collapses away
#[test]
fn test_repetition_noise_end_to_end() {
    let answer = solve("A crabbb gainsss fiveee newtons and tennn newtons");
    assert_eq!(answer.as_deref(), Some("15.00"));
}

/// Word-derived values order before digit-derived values
#[test]
fn test_word_values_order_before_digits() {
    // "thirty" is the first operand even though "5" appears earlier.
    let answer = solve("gains 5 and thirty newtons");
    assert_eq!(answer.as_deref(), Some("35.00"));
}

/// Same number on both sides of a symbol is kept twice
#[test]
fn test_same_number_pattern() {
    assert_eq!(solve("12 + 12").as_deref(), Some("24.00"));
    assert_eq!(solve("4 * 4").as_deref(), Some("16.00"));
}

/// An explicit symbol overrides aggregate wording
#[test]
fn test_explicit_symbol_beats_keywords() {
    assert_eq!(solve("5 + 5 lobsters total").as_deref(), Some("10.00"));
}

/// Bare multiplication sign forces multiply without digit context
#[test]
fn test_bare_multiplication_sign() {
    assert_eq!(solve("Three lobsters × four crabs").as_deref(), Some("12.00"));
}

/// Hundreds-remainder compound merge
#[test]
fn test_hundred_compound_merge() {
    let answer = solve("a shell weighs hundred five grams minus three grams");
    assert_eq!(answer.as_deref(), Some("102.00"));
}

/// Same input always gives the same answer
#[test]
fn test_determinism() {
    let solver = ChallengeSolver::new();
    let text = "A lobster gains thirty two newtons and ten newtons";
    let a1 = solver.solve(text);
    let a2 = solver.solve(text);
    let a3 = solver.solve(text);
    assert_eq!(a1, a2);
    assert_eq!(a2, a3);
}

/// Detailed output serializes to JSON and back
#[test]
fn test_json_output_valid() {
    let solver = ChallengeSolver::new();
    let output = solver.solve_detailed("3 + 4");

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"answer\""));
    assert!(json.contains("\"operands\""));
    assert!(json.contains("\"cleaned\""));

    let back: SolveOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.answer.as_deref(), Some("7.00"));
    assert_eq!(back.explicit_op, Some(ExplicitOp::Add));
}

/// The decision records which tier fired
#[test]
fn test_decision_tiers_recorded() {
    let solver = ChallengeSolver::new();

    let explicit = solver.solve_detailed("3 + 4");
    assert_eq!(explicit.decision.unwrap().tier, DecisionTier::ExplicitSymbol);

    let rate = solver.solve_detailed("A crab moves at four meters per second for five seconds");
    assert_eq!(rate.decision.unwrap().tier, DecisionTier::RateDuration);

    let fallback = solver.solve_detailed("two lobsters and three crabs");
    assert_eq!(fallback.decision.unwrap().tier, DecisionTier::FallbackSum);
}

/// Parseable output line contains the expected fields
#[test]
fn test_parseable_output_format() {
    let solver = ChallengeSolver::new();
    let output = solver.solve_detailed("3 + 4");
    let formatted = output.to_parseable_string();

    assert!(formatted.contains("answer=7.00"));
    assert!(formatted.contains("tier=EXPLICIT_SYMBOL"));
    assert!(formatted.contains("operands="));
}
