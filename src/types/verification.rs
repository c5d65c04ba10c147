//! Verification challenge payload from the Moltbook API

use serde::{Deserialize, Serialize};

/// Challenge handed out by the Moltbook API alongside a post or comment.
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationChallenge {
    /// Garbled challenge text to solve
    #[serde(default)]
    pub challenge_text: String,
    /// Opaque code identifying this verification attempt
    #[serde(default)]
    pub verification_code: String,
}

impl VerificationChallenge {
    /// Create a verification challenge
    pub fn new(challenge_text: impl Into<String>, verification_code: impl Into<String>) -> Self {
        Self {
            challenge_text: challenge_text.into(),
            verification_code: verification_code.into(),
        }
    }
}
