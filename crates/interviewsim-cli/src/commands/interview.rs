//! The `interviewsim interview` command.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use interviewsim_core::error::InterviewError;
use interviewsim_core::model::Role;
use interviewsim_core::session::{InterviewSession, SubmitOutcome, CLOSING_MESSAGE};
use interviewsim_providers::{create_scorer, ScoringMode};

pub async fn execute(
    name: String,
    role: Role,
    scoring: Option<ScoringMode>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;
    let mode = scoring.unwrap_or(config.scoring);
    if mode == ScoringMode::RemoteEvaluation && config.remote.api_key.is_none() {
        anyhow::bail!(
            "remote-evaluation scoring needs an API key: set INTERVIEWSIM_API_KEY or [remote].api_key"
        );
    }
    let scorer = create_scorer(mode, &config);
    tracing::info!(scorer = scorer.name(), records = %store.path().display(), "starting interview");

    let mut session =
        InterviewSession::new(scorer, Arc::new(store)).with_question_cap(config.question_cap);
    session.start(&name, role)?;

    if let Some(opening) = session.state().transcript.last() {
        println!("Interviewer: {}", opening.content);
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match session.submit_response(&line).await {
            Ok(outcome) => outcome,
            Err(InterviewError::Evaluation(e)) => {
                tracing::error!("could not score response: {e}");
                eprintln!("  [could not score that answer, please try again]");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match outcome {
            SubmitOutcome::NextQuestion(question) => {
                if let Some(last) = session.state().answered.last() {
                    eprintln!("  [score {}/10: {}]", last.score, last.note);
                }
                println!("Interviewer: {question}");
            }
            SubmitOutcome::Completed(record) => {
                println!("Interviewer: {CLOSING_MESSAGE}");
                println!();
                println!("Candidate:      {}", record.candidate_name);
                println!("Role:           {}", record.role.title());
                println!("Final score:    {:.1}/10", record.final_score);
                println!("Recommendation: {}", record.recommendation);
                println!("Record id:      {}", record.id);
                return Ok(());
            }
        }
    }

    anyhow::bail!(
        "input ended after {} of {} answers; interview not saved",
        session.state().answered.len(),
        session.question_cap()
    )
}
