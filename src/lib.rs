//! Rule-based ATS resume analysis. Feed in extracted plain text, get back a
//! structured score report: contact/education/experience extraction, keyword
//! and action-verb coverage, readability, formatting checks, weighted section
//! scores, and prioritized suggestions. Pure functions over regexes and
//! vocabulary tables; no network, no model calls, no clock.

pub mod analyzer;
pub mod knowledge;

pub use analyzer::analyze;
pub use analyzer::types::{AtsResult, ExperienceLevel};
