//! interviewsim-core — Question sequencing, response scoring, and session state.
//!
//! This crate defines the data model, the scoring and record-store traits,
//! and the interview state machine that the rest of interviewsim builds on.

pub mod error;
pub mod model;
pub mod questions;
pub mod scoring;
pub mod sequencer;
pub mod session;
pub mod statistics;
pub mod store;
pub mod summary;
pub mod traits;
