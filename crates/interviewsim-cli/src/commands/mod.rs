pub mod export;
pub mod init;
pub mod interview;
pub mod questions;
pub mod records;
pub mod score;
pub mod serve;

use std::path::PathBuf;

use anyhow::Result;

use interviewsim_core::model::InterviewRecord;
use interviewsim_core::store::JsonFileRecordStore;
use interviewsim_core::traits::RecordStore;
use interviewsim_providers::config::load_config_from;
use interviewsim_providers::InterviewsimConfig;

/// Load the config and open the record store it names.
pub fn open_store(config_path: Option<PathBuf>) -> Result<(InterviewsimConfig, JsonFileRecordStore)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonFileRecordStore::new(config.records_path.clone());
    Ok((config, store))
}

/// Find the single record whose id starts with `prefix`.
pub fn find_record(store: &dyn RecordStore, prefix: &str) -> Result<InterviewRecord> {
    let mut matches: Vec<InterviewRecord> = store
        .list_all()?
        .into_iter()
        .filter(|r| r.id.to_string().starts_with(prefix))
        .collect();
    match matches.len() {
        0 => anyhow::bail!("no interview record with id '{prefix}'"),
        1 => Ok(matches.remove(0)),
        n => anyhow::bail!("id prefix '{prefix}' matches {n} records, be more specific"),
    }
}
