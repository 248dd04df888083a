//! interviewsim-providers — Remote response evaluation.
//!
//! Implements the remote-evaluation scoring strategy: the model-provider
//! call that grades a response against a fixed rubric, the HTTP client for
//! the evaluation endpoint, the endpoint server itself, and the fallback
//! wrapper that keeps an interview moving when evaluation fails.

pub mod anthropic;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod fallback;
pub mod mock;
pub mod remote;
pub mod server;

pub use config::{create_scorer, load_config, InterviewsimConfig, ScoringMode};
pub use error::ProviderError;
