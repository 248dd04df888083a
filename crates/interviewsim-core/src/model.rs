//! Core data model types for interviewsim.
//!
//! These are the values that flow between the session, the scorers, and the
//! record stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::summary::Recommendation;

/// The job track a candidate is interviewing for.
///
/// Selects the question bank and the technical keyword vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    DataScientist,
    DataEngineer,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 2] = [Role::DataScientist, Role::DataEngineer];

    /// Name of the field, as used in conversational text ("data science").
    pub fn field(&self) -> &'static str {
        match self {
            Role::DataScientist => "data science",
            Role::DataEngineer => "data engineering",
        }
    }

    /// Job title ("Data Scientist").
    pub fn title(&self) -> &'static str {
        match self {
            Role::DataScientist => "Data Scientist",
            Role::DataEngineer => "Data Engineer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::DataScientist => write!(f, "data-scientist"),
            Role::DataEngineer => write!(f, "data-engineer"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "data-scientist" | "ds" => Ok(Role::DataScientist),
            "data-engineer" | "de" => Ok(Role::DataEngineer),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Interviewer,
    Candidate,
}

/// One message in the interview conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn interviewer(content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(content.into(), Sender::Interviewer, at)
    }

    pub fn candidate(content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(content.into(), Sender::Candidate, at)
    }

    fn new(content: String, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp,
        }
    }
}

/// Score and explanatory note for a single candidate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEvaluation {
    /// Score in the closed range 1..=10.
    pub score: u8,
    /// Which signals fired, or "Standard response" when none did.
    pub note: String,
}

/// Note attached to the neutral score substituted when remote evaluation fails.
pub const FALLBACK_NOTE: &str = "Error in LLM evaluation, using fallback scoring";

/// Score substituted when remote evaluation fails.
pub const FALLBACK_SCORE: u8 = 5;

impl ResponseEvaluation {
    pub fn new(score: u8, note: impl Into<String>) -> Self {
        Self {
            score,
            note: note.into(),
        }
    }

    /// The neutral evaluation used when a remote evaluation cannot be obtained.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_SCORE, FALLBACK_NOTE)
    }
}

/// The outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponseRecord {
    pub question_index: usize,
    pub question: String,
    pub response: String,
    pub score: u8,
    pub note: String,
}

/// A finished interview, as handed to record stores and exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub id: Uuid,
    pub candidate_name: String,
    pub role: Role,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub questions: Vec<QuestionResponseRecord>,
    /// Mean of the per-question scores, rounded to one decimal place.
    pub final_score: f64,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl InterviewRecord {
    /// Interview length in whole minutes, rounded to the nearest minute.
    pub fn duration_minutes(&self) -> i64 {
        let secs = (self.end_time - self.start_time).num_seconds();
        (secs as f64 / 60.0).round() as i64
    }
}
