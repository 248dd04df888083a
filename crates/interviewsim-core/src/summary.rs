//! Aggregate score and the derived hiring summary.
//!
//! The recommendation tier, strengths, and improvement areas are pure lookup
//! tables keyed by role and score band. They are computed once, when the
//! interview finishes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{QuestionResponseRecord, Role};

/// Final score used when an interview ends without any answered question.
pub const DEFAULT_FINAL_SCORE: f64 = 7.0;

/// Scores at or above this are "Strong Hire".
pub const STRONG_HIRE_THRESHOLD: f64 = 8.0;

/// Scores at or above this (and below the strong-hire threshold) are "Hire".
pub const HIRE_THRESHOLD: f64 = 6.0;

/// Round to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the per-question scores, rounded to one decimal place.
pub fn final_score(records: &[QuestionResponseRecord]) -> f64 {
    if records.is_empty() {
        return DEFAULT_FINAL_SCORE;
    }
    let total: f64 = records.iter().map(|r| f64::from(r.score)).sum();
    round_one_decimal(total / records.len() as f64)
}

/// Hiring recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    #[serde(rename = "Hire")]
    Hire,
    #[serde(rename = "No Hire")]
    NoHire,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_HIRE_THRESHOLD {
            Recommendation::StrongHire
        } else if score >= HIRE_THRESHOLD {
            Recommendation::Hire
        } else {
            Recommendation::NoHire
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::NoHire => "No Hire",
        }
    }

    /// One-sentence explanation shown alongside the tier.
    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => {
                "Strong Hire - Excellent candidate with demonstrated expertise and growth potential"
            }
            Recommendation::Hire => {
                "Hire - Good candidate with solid foundation, may need some development"
            }
            Recommendation::NoHire => {
                "No Hire - Candidate needs significant development before being ready for this role"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn strengths(role: Role, score: f64) -> Vec<String> {
    let list: &[&str] = match (Recommendation::from_score(score), role) {
        (Recommendation::StrongHire, Role::DataScientist) => &[
            "Advanced technical expertise",
            "Strong problem-solving approach",
            "Excellent communication",
            "Leadership potential",
            "Continuous learning mindset",
        ],
        (Recommendation::StrongHire, Role::DataEngineer) => &[
            "Deep technical knowledge",
            "Scalable thinking",
            "Strong architecture skills",
            "Mentorship qualities",
            "Enterprise experience",
        ],
        (Recommendation::Hire, Role::DataScientist) => &[
            "Good technical foundation",
            "Analytical thinking",
            "Team collaboration",
            "Learning oriented",
        ],
        (Recommendation::Hire, Role::DataEngineer) => &[
            "Solid engineering skills",
            "Understanding of data systems",
            "Good problem-solving",
            "Team player",
        ],
        (Recommendation::NoHire, _) => &[
            "Clear communication skills",
            "Professional demeanor",
            "Relevant experience",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

pub fn improvements(role: Role, score: f64) -> Vec<String> {
    let list: &[&str] = match (Recommendation::from_score(score), role) {
        (Recommendation::StrongHire, _) => &["None significant - ready for advanced challenges"],
        (Recommendation::Hire, Role::DataScientist) => &[
            "Could deepen MLOps knowledge",
            "More experience with enterprise tools",
            "Leadership development",
        ],
        (Recommendation::Hire, Role::DataEngineer) => &[
            "Could improve cloud architecture skills",
            "More experience with streaming systems",
            "Team leadership development",
        ],
        (Recommendation::NoHire, Role::DataScientist) => &[
            "Needs stronger technical foundation",
            "Limited enterprise experience",
            "Communication could be clearer",
            "Lacks depth in key areas",
        ],
        (Recommendation::NoHire, Role::DataEngineer) => &[
            "Insufficient technical depth",
            "Limited scalability thinking",
            "Needs more enterprise exposure",
            "Architecture knowledge gaps",
        ],
    };
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(scores: &[u8]) -> Vec<QuestionResponseRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| QuestionResponseRecord {
                question_index: i,
                question: format!("Q{i}"),
                response: String::new(),
                score,
                note: String::new(),
            })
            .collect()
    }

    #[test]
    fn final_score_is_rounded_mean() {
        let score = final_score(&records(&[6, 8, 10]));
        assert_eq!(score, 8.0);
        assert_eq!(Recommendation::from_score(score), Recommendation::StrongHire);

        assert_eq!(final_score(&records(&[5, 6, 6])), 5.7);
        assert_eq!(final_score(&records(&[7, 8])), 7.5);
    }

    #[test]
    fn final_score_defaults_without_records() {
        assert_eq!(final_score(&[]), 7.0);
    }

    #[test]
    fn recommendation_tiers() {
        assert_eq!(Recommendation::from_score(10.0), Recommendation::StrongHire);
        assert_eq!(Recommendation::from_score(8.0), Recommendation::StrongHire);
        assert_eq!(Recommendation::from_score(7.9), Recommendation::Hire);
        assert_eq!(Recommendation::from_score(6.0), Recommendation::Hire);
        assert_eq!(Recommendation::from_score(5.9), Recommendation::NoHire);
        assert_eq!(Recommendation::from_score(1.0), Recommendation::NoHire);

        assert_eq!(Recommendation::StrongHire.label(), "Strong Hire");
        assert_eq!(Recommendation::Hire.to_string(), "Hire");
        assert_eq!(Recommendation::NoHire.label(), "No Hire");
    }

    #[test]
    fn summary_tables_follow_score_band() {
        assert_eq!(strengths(Role::DataEngineer, 9.0)[0], "Deep technical knowledge");
        assert_eq!(strengths(Role::DataScientist, 6.5).len(), 4);
        assert_eq!(
            strengths(Role::DataScientist, 3.0),
            strengths(Role::DataEngineer, 3.0)
        );
        assert_eq!(
            improvements(Role::DataScientist, 8.0),
            vec!["None significant - ready for advanced challenges".to_string()]
        );
        assert_eq!(
            improvements(Role::DataEngineer, 5.0)[3],
            "Architecture knowledge gaps"
        );
    }
}
