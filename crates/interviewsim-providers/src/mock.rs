//! Mock scorer for testing sessions and wrappers without network calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use interviewsim_core::error::EvaluationError;
use interviewsim_core::model::ResponseEvaluation;
use interviewsim_core::traits::{EvaluationRequest, ResponseScorer};

type ErrorFactory = Box<dyn Fn() -> EvaluationError + Send + Sync>;

/// A scorer that replays scripted evaluations.
///
/// Scripted evaluations are returned in order; once they run out the default
/// outcome (a fixed evaluation or a fixed error) is returned.
pub struct MockScorer {
    scripted: Mutex<VecDeque<ResponseEvaluation>>,
    default_evaluation: Option<ResponseEvaluation>,
    error: Option<ErrorFactory>,
    call_count: AtomicU32,
    last_request: Mutex<Option<EvaluationRequest>>,
}

impl MockScorer {
    /// Replay `evaluations` in order, then repeat the last one.
    pub fn new(evaluations: Vec<ResponseEvaluation>) -> Self {
        let default_evaluation = evaluations
            .last()
            .cloned()
            .or_else(|| Some(ResponseEvaluation::new(5, "Standard response")));
        Self {
            scripted: Mutex::new(evaluations.into()),
            default_evaluation,
            error: None,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always return the same evaluation.
    pub fn with_fixed(evaluation: ResponseEvaluation) -> Self {
        Self::new(vec![evaluation])
    }

    /// Always fail with the error built by `error`.
    pub fn failing(error: impl Fn() -> EvaluationError + Send + Sync + 'static) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            default_evaluation: None,
            error: Some(Box::new(error)),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this scorer.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this scorer.
    pub fn last_request(&self) -> Option<EvaluationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseScorer for MockScorer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, EvaluationError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(error) = &self.error {
            return Err(error());
        }
        if let Some(next) = self.scripted.lock().unwrap().pop_front() {
            return Ok(next);
        }
        Ok(self
            .default_evaluation
            .clone()
            .unwrap_or_else(ResponseEvaluation::fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interviewsim_core::model::Role;

    #[tokio::test]
    async fn replays_script_then_repeats_last() {
        let scorer = MockScorer::new(vec![
            ResponseEvaluation::new(6, "a"),
            ResponseEvaluation::new(9, "b"),
        ]);
        let request = EvaluationRequest::new("x", Role::DataScientist, 4);
        let scores: Vec<u8> = score_times(&scorer, &request, 3).await;
        assert_eq!(scores, vec![6, 9, 9]);
        assert_eq!(scorer.call_count(), 3);
        assert_eq!(scorer.last_request().unwrap().question_index, 4);
    }

    async fn score_times(scorer: &MockScorer, request: &EvaluationRequest, n: usize) -> Vec<u8> {
        let mut scores = Vec::new();
        for _ in 0..n {
            scores.push(scorer.evaluate(request).await.unwrap().score);
        }
        scores
    }
}
