//! One-shot verification submission
//!
//! Moltbook suspends accounts that spam wrong answers, so an answer is
//! submitted exactly once per challenge. A rejected or failed submission
//! is reported to the caller and never retried here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::ChallengeSolver;
use crate::types::VerificationChallenge;
use crate::{DEFAULT_VERIFY_URL, VERIFY_TIMEOUT_SECS};

/// Errors from the submission boundary
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The payload is unusable; rejected before any network call
    #[error("verification payload is missing {0}")]
    MissingField(&'static str),
    /// The solver could not find two operands
    #[error("challenge could not be solved")]
    Unsolvable,
    /// Transport-level failure
    #[error("verification request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Body POSTed to the verification endpoint
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest {
    pub verification_code: String,
    pub answer: String,
}

/// Response body from the verification endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the Moltbook verification endpoint
#[derive(Debug)]
pub struct VerifyClient {
    http: Client,
    api_url: String,
    solver: ChallengeSolver,
}

impl Default for VerifyClient {
    fn default() -> Self {
        Self::new(DEFAULT_VERIFY_URL)
    }
}

impl VerifyClient {
    /// Create a client for the given endpoint
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            solver: ChallengeSolver::new(),
        }
    }

    /// Endpoint this client submits to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Solve `verification` and submit the answer exactly once.
    ///
    /// No retry is attempted on rejection or transport failure: repeated
    /// wrong submissions are penalized by the challenge source.
    pub async fn verify(
        &self,
        api_key: &str,
        verification: &VerificationChallenge,
    ) -> Result<VerifyResponse, VerifyError> {
        if verification.challenge_text.is_empty() {
            return Err(VerifyError::MissingField("challenge_text"));
        }
        if verification.verification_code.is_empty() {
            return Err(VerifyError::MissingField("verification_code"));
        }

        let answer = self
            .solver
            .solve(&verification.challenge_text)
            .ok_or(VerifyError::Unsolvable)?;

        let request = VerifyRequest {
            verification_code: verification.verification_code.clone(),
            answer,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(VERIFY_TIMEOUT_SECS))
            .json(&request)
            .send()
            .await?
            .json::<VerifyResponse>()
            .await?;

        Ok(response)
    }
}

// =============================================================================
// TESTS
// =============================================================================
