//! The `interviewsim export` command.

use std::path::PathBuf;

use anyhow::Result;

use interviewsim_core::traits::RecordStore;
use interviewsim_report::{html, json};

pub fn execute(
    output: Option<PathBuf>,
    format: String,
    id: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    // A single record exported as JSON gets the per-candidate summary shape.
    if let (Some(prefix), "json") = (&id, format.as_str()) {
        let record = super::find_record(&store, prefix)?;
        let path = output.unwrap_or_else(|| PathBuf::from(json::summary_filename(&record)));
        json::export_summary_json(&record, &path)?;
        eprintln!("Summary saved to: {}", path.display());
        return Ok(());
    }

    let records = match &id {
        Some(prefix) => vec![super::find_record(&store, prefix)?],
        None => store.list_all()?,
    };

    let path = match format.as_str() {
        "json" => {
            let path = output.unwrap_or_else(|| {
                PathBuf::from(json::default_export_filename(chrono::Utc::now().date_naive()))
            });
            json::export_records_json(&records, &path)?;
            path
        }
        "html" => {
            let path = output.unwrap_or_else(|| PathBuf::from("interview-report.html"));
            html::write_html_report(&records, &path)?;
            path
        }
        other => anyhow::bail!("unknown export format: {other} (expected json or html)"),
    };

    eprintln!("Exported {} record(s) to: {}", records.len(), path.display());
    Ok(())
}
