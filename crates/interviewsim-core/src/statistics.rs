//! Aggregate statistics over stored interview records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{InterviewRecord, Role};
use crate::summary::{round_one_decimal, STRONG_HIRE_THRESHOLD};

/// Headline numbers for a set of finished interviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_candidates: usize,
    /// Mean final score, rounded to one decimal place (0.0 with no records).
    pub average_score: f64,
    pub strong_hires: usize,
    pub per_role: BTreeMap<String, usize>,
}

impl DashboardStats {
    pub fn compute(records: &[InterviewRecord]) -> Self {
        let total_candidates = records.len();
        let average_score = if records.is_empty() {
            0.0
        } else {
            let sum: f64 = records.iter().map(|r| r.final_score).sum();
            round_one_decimal(sum / total_candidates as f64)
        };
        let strong_hires = records
            .iter()
            .filter(|r| r.final_score >= STRONG_HIRE_THRESHOLD)
            .count();

        let mut per_role: BTreeMap<String, usize> =
            Role::ALL.iter().map(|r| (r.to_string(), 0)).collect();
        for record in records {
            *per_role.entry(record.role.to_string()).or_default() += 1;
        }

        Self {
            total_candidates,
            average_score,
            strong_hires,
            per_role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Recommendation;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(role: Role, final_score: f64) -> InterviewRecord {
        let now = Utc::now();
        InterviewRecord {
            id: Uuid::new_v4(),
            candidate_name: "x".into(),
            role,
            start_time: now,
            end_time: now,
            questions: vec![],
            final_score,
            recommendation: Recommendation::from_score(final_score),
            strengths: vec![],
            improvements: vec![],
        }
    }

    #[test]
    fn empty_dashboard() {
        let stats = DashboardStats::compute(&[]);
        assert_eq!(stats.total_candidates, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.strong_hires, 0);
        assert_eq!(stats.per_role["data-scientist"], 0);
    }

    #[test]
    fn aggregates_scores_and_roles() {
        let records = vec![
            record(Role::DataScientist, 8.0),
            record(Role::DataEngineer, 6.5),
            record(Role::DataEngineer, 7.2),
        ];
        let stats = DashboardStats::compute(&records);
        assert_eq!(stats.total_candidates, 3);
        assert_eq!(stats.average_score, 7.2);
        assert_eq!(stats.strong_hires, 1);
        assert_eq!(stats.per_role["data-engineer"], 2);
        assert_eq!(stats.per_role["data-scientist"], 1);
    }
}
