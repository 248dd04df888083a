//! Trait seams between the session and its collaborators.
//!
//! Scorers are implemented here (deterministic) and in
//! `interviewsim-providers` (remote evaluation). Record stores are
//! implemented in [`crate::store`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::model::{InterviewRecord, ResponseEvaluation, Role};

// ---------------------------------------------------------------------------
// Response scoring
// ---------------------------------------------------------------------------

/// A single response to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The candidate's (trimmed) answer.
    pub response: String,
    /// Role the candidate is interviewing for.
    pub role: Role,
    /// Index of the question being answered.
    pub question_index: usize,
}

impl EvaluationRequest {
    pub fn new(response: impl Into<String>, role: Role, question_index: usize) -> Self {
        Self {
            response: response.into(),
            role,
            question_index,
        }
    }
}

/// Strategy for turning a candidate response into a score and note.
#[async_trait]
pub trait ResponseScorer: Send + Sync {
    /// Short strategy name for logs (e.g. "deterministic").
    fn name(&self) -> &str;

    /// Score one response.
    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, EvaluationError>;
}

// ---------------------------------------------------------------------------
// Record storage
// ---------------------------------------------------------------------------

/// Append-only log of finished interviews.
pub trait RecordStore: Send + Sync {
    /// Append a finished record.
    fn append(&self, record: InterviewRecord) -> anyhow::Result<()>;

    /// All records in insertion order.
    fn list_all(&self) -> anyhow::Result<Vec<InterviewRecord>>;
}
