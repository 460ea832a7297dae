//! TLDR-URL - summarizes web pages with an OpenAI chat completion model.
//!
//! Page text is cleaned, measured with a word-based token heuristic, split
//! along sentence boundaries when it would overflow the model's context
//! window, and summarized one chunk per concurrent completion call. The
//! per-chunk summaries are joined back together in page order.
//!
//! # Architecture
//!
//! - `ai` holds the token estimator, the chunker and the completion client
//! - `worker` holds the orchestrator that fans chunks out and joins results
//! - `utils` holds the collaborators: fetching, markup cleaning, URL checks
//! - `api` is the AWS Lambda entry point
//!
//! # Example
//!
//! ```no_run
//! use tldr_url::core::config::SummaryConfig;
//! use tldr_url::core::models::SummaryOptions;
//! use tldr_url::worker::SummaryOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tldr_url::setup_logging();
//!
//!     let orchestrator = SummaryOrchestrator::from_config(SummaryConfig::default())?;
//!     let options = SummaryOptions {
//!         word_count: Some(80),
//!         style: Some("neutral".to_string()),
//!     };
//!     let summary = orchestrator
//!         .summarize("<p>Rust 1.0 shipped in 2015.</p>", &options, "sk-...")
//!         .await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod utils;
pub mod worker;

pub use ai::estimate_tokens;
pub use crate::core::config::{AppConfig, SummaryConfig};
pub use crate::core::models::{SummaryOptions, TokenBudget};
pub use errors::{FetchError, SummaryError};
pub use worker::SummaryOrchestrator;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Safe to call more than once; later calls are ignored.
///
/// # Example
///
/// ```
/// tldr_url::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
