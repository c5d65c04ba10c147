//! Core types for Moltverify

mod challenge;
mod decision;
mod number;
mod operands;
mod operation;
mod output;
mod verification;

pub use challenge::CleanedChallenge;
pub use decision::{DecisionTier, OperationDecision};
pub use number::{NumberOrigin, NumberToken};
pub use operands::OperandSet;
pub use operation::{ExplicitOp, Operation};
pub use output::SolveOutput;
pub use verification::VerificationChallenge;
