//! Neutral-score fallback around a remote scorer.

use async_trait::async_trait;
use tracing::warn;

use interviewsim_core::error::EvaluationError;
use interviewsim_core::model::ResponseEvaluation;
use interviewsim_core::traits::{EvaluationRequest, ResponseScorer};

/// Wraps a scorer so that remote failures never reach the interview.
///
/// A `RemoteEvaluation` error is logged and replaced with
/// [`ResponseEvaluation::fallback`]. A `Configuration` error is passed
/// through: a missing credential must be fixed, not papered over.
pub struct FallbackScorer<S> {
    inner: S,
}

impl<S: ResponseScorer> FallbackScorer<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ResponseScorer> ResponseScorer for FallbackScorer<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, EvaluationError> {
        match self.inner.evaluate(request).await {
            Err(e) if e.is_recoverable() => {
                if let EvaluationError::RemoteEvaluation {
                    raw: Some(raw), ..
                } = &e
                {
                    warn!(raw = %raw, "unparseable evaluation reply");
                }
                warn!(
                    scorer = self.inner.name(),
                    question_index = request.question_index,
                    "remote evaluation failed, using fallback score: {e}"
                );
                Ok(ResponseEvaluation::fallback())
            }
            other => other,
        }
    }
}
