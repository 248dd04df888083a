//! JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use interviewsim_core::model::{InterviewRecord, Role};

/// Default file name for a full export made on `date`.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("interview-records-{}.json", date.format("%Y-%m-%d"))
}

/// File name for a single-interview summary.
///
/// The candidate name is reduced to alphanumeric runs joined by `-`, so the
/// result is always a bare file name in the current directory.
pub fn summary_filename(record: &InterviewRecord) -> String {
    let slug = record
        .candidate_name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        return "interview-summary.json".to_string();
    }
    format!("interview-summary-{slug}.json")
}

/// Write all records as a pretty-printed JSON array.
pub fn export_records_json(records: &[InterviewRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("failed to serialize records")?;
    write(path, &json)
}

/// Condensed, shareable view of one interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub candidate: String,
    pub role: Role,
    pub score: f64,
    pub recommendation: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub questions: usize,
}

impl InterviewSummary {
    pub fn from_record(record: &InterviewRecord) -> Self {
        Self {
            candidate: record.candidate_name.clone(),
            role: record.role,
            score: record.final_score,
            recommendation: record.recommendation.description().to_string(),
            strengths: record.strengths.clone(),
            improvements: record.improvements.clone(),
            timestamp: record.end_time,
            questions: record.questions.len(),
        }
    }
}

/// Write the summary of one interview as pretty-printed JSON.
pub fn export_summary_json(record: &InterviewRecord, path: &Path) -> Result<()> {
    let summary = InterviewSummary::from_record(record);
    let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
    write(path, &json)
}

fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write export to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::record;

    #[test]
    fn filenames() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            default_export_filename(date),
            "interview-records-2026-10-19.json"
        );
        let r = record("Ada  King Lovelace", Role::DataScientist, &[7]);
        assert_eq!(summary_filename(&r), "interview-summary-Ada-King-Lovelace.json");
    }

    #[test]
    fn summary_filename_strips_path_components() {
        let r = record("../../etc/passwd", Role::DataEngineer, &[5]);
        let name = summary_filename(&r);
        assert_eq!(name, "interview-summary-etc-passwd.json");
        assert_eq!(Path::new(&name).components().count(), 1);

        let r = record("C:\\Users\\..", Role::DataEngineer, &[5]);
        assert_eq!(summary_filename(&r), "interview-summary-C-Users.json");

        let r = record("/ . /", Role::DataScientist, &[5]);
        assert_eq!(summary_filename(&r), "interview-summary.json");
    }

    #[test]
    fn exported_records_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("records.json");
        let records = vec![
            record("Ada", Role::DataScientist, &[6, 8, 10]),
            record("Grace", Role::DataEngineer, &[5, 5]),
        ];

        export_records_json(&records, &path).unwrap();
        let loaded: Vec<InterviewRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn summary_carries_recommendation_text() {
        let r = record("Ada", Role::DataScientist, &[6, 8, 10]);
        let summary = InterviewSummary::from_record(&r);
        assert_eq!(summary.score, 8.0);
        assert!(summary.recommendation.starts_with("Strong Hire"));
        assert_eq!(summary.questions, 3);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(summary_filename(&r));
        export_summary_json(&r, &path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["candidate"], "Ada");
        assert_eq!(value["role"], "data-scientist");
    }
}
