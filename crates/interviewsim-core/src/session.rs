//! Interview session state machine and orchestrator.
//!
//! The phases run `setup → interview → summary`. Transitions are pure
//! functions of the current [`InterviewState`] and a [`SessionEvent`]; the
//! [`InterviewSession`] orchestrator performs the one suspending step
//! (scoring a response) and then applies the resulting event.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::InterviewError;
use crate::model::{
    InterviewRecord, QuestionResponseRecord, ResponseEvaluation, Role, TranscriptEntry,
};
use crate::questions::questions_for;
use crate::sequencer::next_question;
use crate::summary::{final_score, improvements, strengths, Recommendation};
use crate::traits::{EvaluationRequest, RecordStore, ResponseScorer};

/// Maximum number of questions asked in one interview.
pub const DEFAULT_QUESTION_CAP: usize = 10;

/// Interviewer message sent once the question cap is reached.
pub const CLOSING_MESSAGE: &str = "Thank you for sharing all of that information with me. \
Before we wrap up, do you have any questions about the role or our team? \
And what are you most excited about in your next opportunity?";

/// Lifecycle phase of an interview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Setup,
    Interview,
    Summary,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "setup"),
            Phase::Interview => write!(f, "interview"),
            Phase::Summary => write!(f, "summary"),
        }
    }
}

/// Something that happened to the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Start {
        candidate_name: String,
        role: Role,
        at: DateTime<Utc>,
    },
    /// The candidate answered the current question and the answer was scored.
    ResponseScored {
        response: String,
        evaluation: ResponseEvaluation,
        at: DateTime<Utc>,
    },
    Reset,
}

/// Result of applying an event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: InterviewState,
    /// Set when the event finished the interview.
    pub record: Option<InterviewRecord>,
}

impl Transition {
    fn to(state: InterviewState) -> Self {
        Self {
            state,
            record: None,
        }
    }
}

/// Snapshot of an interview in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewState {
    pub phase: Phase,
    pub candidate_name: String,
    pub role: Role,
    pub asked_question_indices: BTreeSet<usize>,
    pub current_question_index: usize,
    /// Text of the question the candidate is currently answering.
    pub current_question: String,
    pub transcript: Vec<TranscriptEntry>,
    pub answered: Vec<QuestionResponseRecord>,
    pub started_at: Option<DateTime<Utc>>,
    /// The finished record, once the interview reaches the summary phase.
    pub record: Option<InterviewRecord>,
}

/// Greeting that opens the interview and asks the role's first question.
pub fn opening_message(candidate_name: &str, role: Role) -> String {
    format!(
        "Hi {candidate_name}! Thanks for joining this interview. I'm excited to learn more \
         about your background in {}. {}",
        role.field(),
        questions_for(role)[0]
    )
}

impl InterviewState {
    /// Apply an event, returning the next state.
    ///
    /// `question_cap` bounds the number of distinct question indices asked;
    /// once reached, the next scored response finishes the interview.
    pub fn apply(
        &self,
        event: SessionEvent,
        question_cap: usize,
    ) -> Result<Transition, InterviewError> {
        match event {
            SessionEvent::Start {
                candidate_name,
                role,
                at,
            } => self.start(candidate_name, role, at).map(Transition::to),
            SessionEvent::ResponseScored {
                response,
                evaluation,
                at,
            } => self.response_scored(response, evaluation, at, question_cap),
            SessionEvent::Reset => Ok(Transition::to(InterviewState::default())),
        }
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), InterviewError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(InterviewError::InvalidPhase {
                action,
                expected,
                actual: self.phase,
            })
        }
    }

    fn start(
        &self,
        candidate_name: String,
        role: Role,
        at: DateTime<Utc>,
    ) -> Result<InterviewState, InterviewError> {
        self.expect_phase(Phase::Setup, "start an interview")?;
        let candidate_name = candidate_name.trim().to_string();
        if candidate_name.is_empty() {
            return Err(InterviewError::EmptyCandidateName);
        }

        Ok(InterviewState {
            phase: Phase::Interview,
            transcript: vec![TranscriptEntry::interviewer(
                opening_message(&candidate_name, role),
                at,
            )],
            candidate_name,
            role,
            asked_question_indices: BTreeSet::from([0]),
            current_question_index: 0,
            current_question: questions_for(role)[0].to_string(),
            answered: Vec::new(),
            started_at: Some(at),
            record: None,
        })
    }

    fn response_scored(
        &self,
        response: String,
        evaluation: ResponseEvaluation,
        at: DateTime<Utc>,
        question_cap: usize,
    ) -> Result<Transition, InterviewError> {
        self.expect_phase(Phase::Interview, "submit a response")?;

        let mut next = self.clone();
        next.transcript
            .push(TranscriptEntry::candidate(response.clone(), at));
        next.answered.push(QuestionResponseRecord {
            question_index: self.current_question_index,
            question: self.current_question.clone(),
            response,
            score: evaluation.score,
            note: evaluation.note,
        });

        if next.asked_question_indices.len() < question_cap {
            let next_index = self.current_question_index + 1;
            let text = next_question(next_index, self.role, &next.asked_question_indices);
            next.asked_question_indices.insert(next_index);
            next.transcript.push(TranscriptEntry::interviewer(text, at));
            next.current_question_index = next_index;
            next.current_question = text.to_string();
            return Ok(Transition::to(next));
        }

        next.transcript
            .push(TranscriptEntry::interviewer(CLOSING_MESSAGE, at));
        let score = final_score(&next.answered);
        let record = InterviewRecord {
            id: Uuid::new_v4(),
            candidate_name: next.candidate_name.clone(),
            role: next.role,
            start_time: next.started_at.unwrap_or(at),
            end_time: at,
            questions: next.answered.clone(),
            final_score: score,
            recommendation: Recommendation::from_score(score),
            strengths: strengths(next.role, score),
            improvements: improvements(next.role, score),
        };
        next.phase = Phase::Summary;
        next.record = Some(record.clone());

        Ok(Transition {
            state: next,
            record: Some(record),
        })
    }
}

/// What happened after a response was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The interview continues with this question.
    NextQuestion(String),
    /// The interview finished and produced this record.
    Completed(InterviewRecord),
}

/// Drives one interview: scores responses, applies transitions, and hands
/// finished records to the record store.
pub struct InterviewSession {
    scorer: Arc<dyn ResponseScorer>,
    store: Arc<dyn RecordStore>,
    question_cap: usize,
    state: InterviewState,
}

impl InterviewSession {
    pub fn new(scorer: Arc<dyn ResponseScorer>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            scorer,
            store,
            question_cap: DEFAULT_QUESTION_CAP,
            state: InterviewState::default(),
        }
    }

    /// Override the question cap. Values below 1 are raised to 1.
    pub fn with_question_cap(mut self, cap: usize) -> Self {
        self.question_cap = cap.max(1);
        self
    }

    pub fn question_cap(&self) -> usize {
        self.question_cap
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Begin an interview for `candidate_name`.
    pub fn start(&mut self, candidate_name: &str, role: Role) -> Result<(), InterviewError> {
        self.apply(SessionEvent::Start {
            candidate_name: candidate_name.to_string(),
            role,
            at: Utc::now(),
        })?;
        info!(candidate = %self.state.candidate_name, %role, "interview started");
        Ok(())
    }

    /// Score the candidate's answer to the current question and move on.
    ///
    /// If scoring fails the state is left untouched, so the same response can
    /// be submitted again.
    pub async fn submit_response(&mut self, text: &str) -> Result<SubmitOutcome, InterviewError> {
        self.state
            .expect_phase(Phase::Interview, "submit a response")?;

        let response = text.trim().to_string();
        let request = EvaluationRequest::new(
            response.clone(),
            self.state.role,
            self.state.current_question_index,
        );
        let evaluation = self.scorer.evaluate(&request).await?;

        let record = self.apply(SessionEvent::ResponseScored {
            response,
            evaluation,
            at: Utc::now(),
        })?;

        match record {
            Some(record) => {
                info!(
                    candidate = %record.candidate_name,
                    final_score = record.final_score,
                    recommendation = %record.recommendation,
                    "interview completed"
                );
                if let Err(e) = self.store.append(record.clone()) {
                    error!(record_id = %record.id, "failed to store interview record: {e:#}");
                }
                Ok(SubmitOutcome::Completed(record))
            }
            None => Ok(SubmitOutcome::NextQuestion(
                self.state.current_question.clone(),
            )),
        }
    }

    /// Discard everything and return to the setup phase.
    pub fn reset(&mut self) {
        self.state = InterviewState::default();
    }

    fn apply(&mut self, event: SessionEvent) -> Result<Option<InterviewRecord>, InterviewError> {
        let transition = self.state.apply(event, self.question_cap)?;
        self.state = transition.state;
        Ok(transition.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvaluationError;
    use crate::model::Sender;
    use crate::scoring::DeterministicScorer;
    use crate::store::InMemoryRecordStore;
    use async_trait::async_trait;

    fn session() -> (InterviewSession, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::new());
        let session = InterviewSession::new(Arc::new(DeterministicScorer), store.clone());
        (session, store)
    }

    fn scored(score: u8) -> SessionEvent {
        SessionEvent::ResponseScored {
            response: format!("answer scoring {score}"),
            evaluation: ResponseEvaluation::new(score, "Standard response"),
            at: Utc::now(),
        }
    }

    struct UnconfiguredScorer;

    #[async_trait]
    impl ResponseScorer for UnconfiguredScorer {
        fn name(&self) -> &str {
            "unconfigured"
        }

        async fn evaluate(
            &self,
            _request: &EvaluationRequest,
        ) -> Result<ResponseEvaluation, EvaluationError> {
            Err(EvaluationError::Configuration("API key is required".into()))
        }
    }

    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn append(&self, _record: InterviewRecord) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }

        fn list_all(&self) -> anyhow::Result<Vec<InterviewRecord>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn start_seeds_transcript_and_tracking() {
        let state = InterviewState::default()
            .apply(
                SessionEvent::Start {
                    candidate_name: "  Grace ".into(),
                    role: Role::DataEngineer,
                    at: Utc::now(),
                },
                DEFAULT_QUESTION_CAP,
            )
            .unwrap()
            .state;

        assert_eq!(state.phase, Phase::Interview);
        assert_eq!(state.candidate_name, "Grace");
        assert_eq!(state.asked_question_indices, BTreeSet::from([0]));
        assert_eq!(state.current_question_index, 0);
        assert_eq!(state.transcript.len(), 1);
        let opening = &state.transcript[0];
        assert_eq!(opening.sender, Sender::Interviewer);
        assert!(opening.content.contains("Grace"));
        assert!(opening.content.contains("data engineering"));
        assert!(opening.content.ends_with(questions_for(Role::DataEngineer)[0]));
        assert!(state.started_at.is_some());
    }

    #[test]
    fn start_rejects_blank_name() {
        let err = InterviewState::default()
            .apply(
                SessionEvent::Start {
                    candidate_name: "   ".into(),
                    role: Role::DataScientist,
                    at: Utc::now(),
                },
                DEFAULT_QUESTION_CAP,
            )
            .unwrap_err();
        assert!(matches!(err, InterviewError::EmptyCandidateName));
    }

    #[test]
    fn responses_are_rejected_outside_interview_phase() {
        let err = InterviewState::default()
            .apply(scored(5), DEFAULT_QUESTION_CAP)
            .unwrap_err();
        assert!(matches!(
            err,
            InterviewError::InvalidPhase {
                expected: Phase::Interview,
                actual: Phase::Setup,
                ..
            }
        ));
    }

    #[test]
    fn asked_questions_grow_monotonically_up_to_cap() {
        let mut state = InterviewState::default()
            .apply(
                SessionEvent::Start {
                    candidate_name: "Ada".into(),
                    role: Role::DataScientist,
                    at: Utc::now(),
                },
                DEFAULT_QUESTION_CAP,
            )
            .unwrap()
            .state;

        let mut previous = state.asked_question_indices.len();
        let mut record = None;
        for turn in 1..=DEFAULT_QUESTION_CAP {
            let transition = state.apply(scored(7), DEFAULT_QUESTION_CAP).unwrap();
            state = transition.state;
            let asked = state.asked_question_indices.len();
            assert!(asked >= previous);
            assert!(asked <= DEFAULT_QUESTION_CAP);
            previous = asked;
            if turn < DEFAULT_QUESTION_CAP {
                assert!(transition.record.is_none(), "finished early at turn {turn}");
                assert_eq!(state.current_question_index, turn);
            } else {
                record = transition.record;
            }
        }

        let record = record.expect("interview should finish at the cap");
        assert_eq!(state.phase, Phase::Summary);
        assert_eq!(record.questions.len(), DEFAULT_QUESTION_CAP);
        assert_eq!(record.final_score, 7.0);
        assert_eq!(record.recommendation, Recommendation::Hire);
        assert_eq!(
            state.transcript.last().map(|e| e.content.as_str()),
            Some(CLOSING_MESSAGE)
        );
        assert_eq!(state.record.as_ref(), Some(&record));

        // Past the end of the bank the last question is repeated.
        let last = *questions_for(Role::DataScientist).last().unwrap();
        assert_eq!(record.questions[9].question, last);
        assert_eq!(record.questions[9].question_index, 9);
    }

    #[test]
    fn final_score_is_mean_of_answers() {
        let mut state = InterviewState::default()
            .apply(
                SessionEvent::Start {
                    candidate_name: "Ada".into(),
                    role: Role::DataScientist,
                    at: Utc::now(),
                },
                3,
            )
            .unwrap()
            .state;

        let mut record = None;
        for score in [6, 8, 10] {
            let transition = state.apply(scored(score), 3).unwrap();
            state = transition.state;
            record = transition.record;
        }
        let record = record.unwrap();
        assert_eq!(record.final_score, 8.0);
        assert_eq!(record.recommendation, Recommendation::StrongHire);
        assert_eq!(record.recommendation.label(), "Strong Hire");
    }

    #[tokio::test]
    async fn full_interview_stores_record() {
        let (mut session, store) = session();
        session.start("Ada", Role::DataScientist).unwrap();

        let mut outcome = None;
        for i in 0..DEFAULT_QUESTION_CAP {
            let result = session
                .submit_response(&format!("answer {i} about my machine learning model"))
                .await
                .unwrap();
            if i + 1 < DEFAULT_QUESTION_CAP {
                assert!(matches!(result, SubmitOutcome::NextQuestion(_)));
            }
            outcome = Some(result);
        }

        let record = match outcome {
            Some(SubmitOutcome::Completed(record)) => record,
            other => panic!("expected completion, got {other:?}"),
        };
        assert_eq!(session.phase(), Phase::Summary);
        assert_eq!(record.final_score, 7.0);
        assert!(record.questions.iter().all(|q| q.score == 7));

        let stored = store.list_all().unwrap();
        assert_eq!(stored, vec![record]);

        // One opening, then a candidate + interviewer pair per answer.
        assert_eq!(session.state().transcript.len(), 1 + 2 * DEFAULT_QUESTION_CAP);

        let err = session.submit_response("one more").await.unwrap_err();
        assert!(matches!(err, InterviewError::InvalidPhase { .. }));
    }

    #[tokio::test]
    async fn next_question_follows_the_bank() {
        let (mut session, _store) = session();
        session.start("Ada", Role::DataEngineer).unwrap();
        let outcome = session.submit_response("  I like data  ").await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::NextQuestion(questions_for(Role::DataEngineer)[1].to_string())
        );
        let state = session.state();
        assert_eq!(state.answered[0].response, "I like data");
        assert_eq!(state.answered[0].question_index, 0);
        assert_eq!(state.answered[0].question, questions_for(Role::DataEngineer)[0]);
        assert_eq!(state.asked_question_indices, BTreeSet::from([0, 1]));
    }

    #[tokio::test]
    async fn configuration_error_halts_the_turn() {
        let store = Arc::new(InMemoryRecordStore::new());
        let mut session = InterviewSession::new(Arc::new(UnconfiguredScorer), store);
        session.start("Ada", Role::DataScientist).unwrap();
        let before = session.state().clone();

        let err = session.submit_response("hello").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Evaluation(EvaluationError::Configuration(_))
        ));
        assert_eq!(session.state(), &before);
    }

    #[tokio::test]
    async fn store_failure_does_not_fail_the_turn() {
        let mut session =
            InterviewSession::new(Arc::new(DeterministicScorer), Arc::new(BrokenStore))
                .with_question_cap(1);
        session.start("Ada", Role::DataScientist).unwrap();
        let outcome = session.submit_response("hello").await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        assert!(session.state().record.is_some());
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let (mut session, _store) = session();
        session.start("Ada", Role::DataEngineer).unwrap();
        session.submit_response("pipeline work").await.unwrap();
        session.reset();

        let state = session.state();
        assert_eq!(state, &InterviewState::default());
        assert_eq!(state.phase, Phase::Setup);
        assert!(state.transcript.is_empty());
        assert!(state.answered.is_empty());
        assert!(state.asked_question_indices.is_empty());
        assert_eq!(state.current_question_index, 0);

        session.start("Grace", Role::DataScientist).unwrap();
        assert_eq!(session.phase(), Phase::Interview);
    }

    #[test]
    fn cap_is_never_zero() {
        let (session, _store) = session();
        assert_eq!(session.with_question_cap(0).question_cap(), 1);
    }
}
