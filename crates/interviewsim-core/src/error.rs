//! Error types for response evaluation and the interview session.
//!
//! `EvaluationError` is defined here rather than in `interviewsim-providers`
//! so that the fallback wrapper and the session can match on the variant
//! instead of inspecting error strings.

use thiserror::Error;

use crate::session::Phase;

/// Errors a `ResponseScorer` may return.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The remote strategy was selected but no credential was supplied.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote evaluator could not be reached, refused the request, or
    /// replied with something other than a valid `{score, note}` object.
    #[error("remote evaluation failed: {message}")]
    RemoteEvaluation {
        message: String,
        /// The unparsed reply, when one was received.
        raw: Option<String>,
    },
}

impl EvaluationError {
    pub fn remote(message: impl Into<String>) -> Self {
        EvaluationError::RemoteEvaluation {
            message: message.into(),
            raw: None,
        }
    }

    /// Returns `true` if a neutral fallback score may stand in for this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EvaluationError::RemoteEvaluation { .. })
    }
}

/// Errors raised by the interview state machine.
#[derive(Debug, Error)]
pub enum InterviewError {
    /// The event is not valid in the current phase.
    #[error("cannot {action} while in the {actual} phase (expected {expected})")]
    InvalidPhase {
        action: &'static str,
        expected: Phase,
        actual: Phase,
    },

    /// `start` was called without a candidate name.
    #[error("candidate name must not be empty")]
    EmptyCandidateName,

    /// Scoring the response failed and no fallback applies.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
