//! Keyword-heuristic response scoring.
//!
//! Every response starts at a base score of 5 and gains points for each
//! signal that fires. The result is capped at 10. The scorer is total: any
//! string, including the empty string, yields a valid evaluation.

use async_trait::async_trait;
use tracing::debug;

use crate::error::EvaluationError;
use crate::model::{ResponseEvaluation, Role};
use crate::traits::{EvaluationRequest, ResponseScorer};

pub const BASE_SCORE: u8 = 5;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Note used when no signal fires.
pub const STANDARD_NOTE: &str = "Standard response";

/// Responses longer than this many characters count as detailed.
pub const DETAILED_LENGTH: usize = 200;

const DATA_SCIENCE_KEYWORDS: &[&str] = &[
    "machine learning",
    "model",
    "algorithm",
    "statistical",
    "analysis",
    "python",
    "sql",
    "feature",
];

const DATA_ENGINEERING_KEYWORDS: &[&str] = &[
    "pipeline",
    "etl",
    "database",
    "architecture",
    "scaling",
    "streaming",
    "batch",
    "infrastructure",
];

const COLLABORATION_KEYWORDS: &[&str] = &[
    "team",
    "collaborate",
    "mentor",
    "share",
    "teach",
    "help",
    "stakeholder",
];

const PROBLEM_SOLVING_KEYWORDS: &[&str] = &[
    "approach",
    "solution",
    "process",
    "method",
    "strategy",
    "analyze",
    "challenge",
];

const ENTERPRISE_KEYWORDS: &[&str] = &[
    "enterprise",
    "large-scale",
    "production",
    "governance",
    "compliance",
];

/// Technical-depth vocabulary for a role.
pub fn technical_keywords(role: Role) -> &'static [&'static str] {
    match role {
        Role::DataScientist => DATA_SCIENCE_KEYWORDS,
        Role::DataEngineer => DATA_ENGINEERING_KEYWORDS,
    }
}

/// A heuristic signal: which keywords trigger it, what it is worth, and the
/// note fragment it contributes.
struct Signal {
    keywords: &'static [&'static str],
    points: u8,
    note: &'static str,
}

const SHARED_SIGNALS: &[Signal] = &[
    Signal {
        keywords: COLLABORATION_KEYWORDS,
        points: 1,
        note: "Good collaboration skills",
    },
    Signal {
        keywords: PROBLEM_SOLVING_KEYWORDS,
        points: 1,
        note: "Structured problem-solving",
    },
];

const ENTERPRISE_SIGNAL: Signal = Signal {
    keywords: ENTERPRISE_KEYWORDS,
    points: 1,
    note: "Enterprise experience",
};

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Score a response with the keyword heuristics.
///
/// Signals are evaluated in a fixed order (technical depth, collaboration,
/// problem-solving, length, enterprise) and the note lists the fragments of
/// the signals that fired in that order.
pub fn score_response(response: &str, role: Role) -> ResponseEvaluation {
    let lowered = response.to_lowercase();
    let mut score = u32::from(BASE_SCORE);
    let mut notes: Vec<&str> = Vec::new();

    let technical = Signal {
        keywords: technical_keywords(role),
        points: 2,
        note: "Strong technical knowledge",
    };

    for signal in std::iter::once(&technical).chain(SHARED_SIGNALS) {
        if contains_any(&lowered, signal.keywords) {
            score += u32::from(signal.points);
            notes.push(signal.note);
        }
    }

    if response.chars().count() > DETAILED_LENGTH {
        score += 1;
        notes.push("Detailed responses");
    }

    if contains_any(&lowered, ENTERPRISE_SIGNAL.keywords) {
        score += u32::from(ENTERPRISE_SIGNAL.points);
        notes.push(ENTERPRISE_SIGNAL.note);
    }

    let score = score.clamp(u32::from(MIN_SCORE), u32::from(MAX_SCORE)) as u8;
    let note = if notes.is_empty() {
        STANDARD_NOTE.to_string()
    } else {
        notes.join(", ")
    };

    debug!(%role, score, note = %note, "scored response");
    ResponseEvaluation { score, note }
}

/// The local, never-failing scoring strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeterministicScorer;

#[async_trait]
impl ResponseScorer for DeterministicScorer {
    fn name(&self) -> &str {
        "deterministic"
    }

    async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ResponseEvaluation, EvaluationError> {
        Ok(score_response(&request.response, request.role))
    }
}
