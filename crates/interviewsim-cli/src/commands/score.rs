//! The `interviewsim score` command.

use std::path::PathBuf;

use anyhow::Result;

use interviewsim_core::model::Role;
use interviewsim_core::traits::EvaluationRequest;
use interviewsim_providers::{create_scorer, ScoringMode};

pub async fn execute(
    text: String,
    role: Role,
    question_index: usize,
    scoring: Option<ScoringMode>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, _) = super::open_store(config_path)?;
    let scorer = create_scorer(scoring.unwrap_or(config.scoring), &config);

    let request = EvaluationRequest::new(text.trim(), role, question_index);
    let evaluation = scorer.evaluate(&request).await?;

    println!("score: {}", evaluation.score);
    println!("note: {}", evaluation.note);
    Ok(())
}
