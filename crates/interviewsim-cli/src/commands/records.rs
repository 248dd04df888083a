//! The `interviewsim records` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use interviewsim_core::model::InterviewRecord;
use interviewsim_core::statistics::DashboardStats;
use interviewsim_core::traits::RecordStore;

pub fn execute(id: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    if let Some(prefix) = id {
        let record = super::find_record(&store, &prefix)?;
        print_record(&record);
        return Ok(());
    }

    let records = store.list_all()?;
    if records.is_empty() {
        println!("No interviews recorded yet. Run `interviewsim interview` to start one.");
        return Ok(());
    }

    let stats = DashboardStats::compute(&records);
    println!("Total candidates: {}", stats.total_candidates);
    println!("Average score:    {:.1}", stats.average_score);
    println!("Strong hires:     {}", stats.strong_hires);
    for (role, count) in &stats.per_role {
        println!("  {role}: {count}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Candidate",
        "Role",
        "Score",
        "Recommendation",
        "Date",
        "Minutes",
    ]);
    for record in &records {
        let id = record.id.to_string();
        table.add_row(vec![
            Cell::new(&id[..8]),
            Cell::new(&record.candidate_name),
            Cell::new(record.role.title()),
            Cell::new(format!("{:.1}", record.final_score)),
            Cell::new(record.recommendation.label()),
            Cell::new(record.start_time.format("%Y-%m-%d")),
            Cell::new(record.duration_minutes()),
        ]);
    }
    println!("\n{table}");
    Ok(())
}

fn print_record(record: &InterviewRecord) {
    println!("{} ({})", record.candidate_name, record.role.title());
    println!("Id:             {}", record.id);
    println!("Started:        {}", record.start_time.to_rfc3339());
    println!("Duration:       {} min", record.duration_minutes());
    println!("Final score:    {:.1}/10", record.final_score);
    println!(
        "Recommendation: {} - {}",
        record.recommendation,
        record.recommendation.description()
    );

    println!("\nStrengths:");
    for s in &record.strengths {
        println!("  + {s}");
    }
    println!("\nAreas for improvement:");
    for s in &record.improvements {
        println!("  - {s}");
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Score", "Note"]);
    for q in &record.questions {
        table.add_row(vec![
            Cell::new(q.question_index + 1),
            Cell::new(&q.question),
            Cell::new(q.score),
            Cell::new(&q.note),
        ]);
    }
    println!("\n{table}");
}
