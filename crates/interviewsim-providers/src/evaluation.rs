//! Scoring rubric, reply validation, and the evaluation endpoint wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use interviewsim_core::model::{ResponseEvaluation, Role};

use crate::error::ProviderError;

/// Instruction sent to the model with every evaluation.
pub fn rubric(role: Role) -> String {
    format!(
        "You are an expert technical interviewer evaluating a candidate's response for a {role} position.\n\
         Evaluate the response based on:\n\
         1. Technical depth and accuracy\n\
         2. Problem-solving approach\n\
         3. Communication clarity\n\
         4. Experience level\n\
         5. Collaboration and team skills\n\
         \n\
         Provide a score from 1-10 and a brief note explaining your evaluation.\n\
         \n\
         IMPORTANT: Respond with ONLY a valid JSON object, with no additional text, markdown, or explanation.\n\
         It must follow this exact structure:\n\
         {{\"score\": number, \"note\": string}}\n\
         \n\
         Example of a valid response:\n\
         {{\"score\": 8, \"note\": \"Strong technical understanding demonstrated with clear examples\"}}"
    )
}

/// User message carrying the candidate's answer.
pub fn evaluation_prompt(role: Role, response: &str) -> String {
    format!("Evaluate this response for a {role} position:\n{response}")
}

/// Strictly parse a `{"score": number, "note": string}` reply.
///
/// The score must be a JSON number in 1..=10 (fractional scores are rounded
/// to the nearest integer) and the note must be a string. Anything else is
/// rejected with the raw text attached.
pub fn parse_evaluation(raw: &str) -> Result<ResponseEvaluation, ProviderError> {
    let invalid = |reason: &str| ProviderError::InvalidEvaluation {
        reason: reason.to_string(),
        raw: raw.to_string(),
    };

    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| invalid(&format!("reply is not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| invalid("reply is not a JSON object"))?;

    let score = object
        .get("score")
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid("score must be a number"))?;
    let note = object
        .get("note")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("note must be a string"))?;

    if !(1.0..=10.0).contains(&score) {
        return Err(invalid(&format!("score must be between 1 and 10, got {score}")));
    }

    Ok(ResponseEvaluation::new(score.round() as u8, note))
}

/// Body of `POST /api/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequestBody {
    pub response: String,
    pub role: Role,
    #[serde(default)]
    pub question_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Successful reply of `POST /api/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateReply {
    pub score: u8,
    pub note: String,
}

/// Error payload returned with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReply {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl ErrorReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            raw_response: None,
        }
    }
}
