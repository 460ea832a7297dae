//! Summarization orchestration

pub mod summarize;

pub use summarize::{SUMMARY_SEPARATOR, SummaryOrchestrator};
