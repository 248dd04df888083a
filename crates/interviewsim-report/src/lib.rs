//! interviewsim-report — Export of finished interview records.

pub mod html;
pub mod json;
