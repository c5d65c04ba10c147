//! Core solving pipeline for Moltverify

pub mod degarbler;
pub mod extractor;
pub mod operands;
pub mod resolver;
pub mod solver;
pub mod verify;
pub mod vocabulary;

pub use degarbler::Degarbler;
pub use extractor::NumberExtractor;
pub use operands::OperandSelector;
pub use resolver::{OperationResolver, Resolution};
pub use solver::{format_answer, ChallengeSolver};
pub use verify::{VerifyClient, VerifyError, VerifyRequest, VerifyResponse};
