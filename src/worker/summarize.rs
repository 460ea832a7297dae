use std::time::Duration;

use futures::{StreamExt, TryStreamExt, stream};
use tracing::{info, warn};

use crate::ai::chunker::{ChunkMode, split_content};
use crate::ai::client::{ChunkSummarizer, LlmClient};
use crate::ai::tokens::estimate_tokens;
use crate::core::config::SummaryConfig;
use crate::core::models::{SummaryOptions, TokenBudget};
use crate::errors::SummaryError;
use crate::utils::clean::clean_content;

/// Separator between per-chunk summaries in the final text.
pub const SUMMARY_SEPARATOR: &str = "\n\n";

/// Slack allowed per attempt on top of the request timeout, covering retry backoff.
const ATTEMPT_GRACE: Duration = Duration::from_secs(5);

/// Entry point of the summarization core.
///
/// Cleans the content, sizes it against the model's context window, and
/// summarizes it in one or more concurrent completion calls.
pub struct SummaryOrchestrator<S> {
    config: SummaryConfig,
    summarizer: S,
}

impl SummaryOrchestrator<LlmClient> {
    /// Orchestrator backed by the Chat Completions client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: SummaryConfig) -> Result<Self, SummaryError> {
        let client = LlmClient::new(&config)?;
        Ok(Self::new(config, client))
    }
}

impl<S: ChunkSummarizer> SummaryOrchestrator<S> {
    pub fn new(config: SummaryConfig, summarizer: S) -> Self {
        Self { config, summarizer }
    }

    #[must_use]
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Chunks to summarize for already-cleaned content.
    ///
    /// Content within the input budget is sent whole, without any splitting.
    #[must_use]
    pub fn plan_chunks(&self, cleaned: &str, budget: &TokenBudget) -> Vec<String> {
        let total_tokens = estimate_tokens(cleaned);
        if total_tokens <= budget.max_input_tokens {
            return vec![cleaned.to_string()];
        }
        split_content(cleaned, budget.max_input_tokens, ChunkMode::Sentences)
    }

    /// Summarize raw page content.
    ///
    /// # Errors
    ///
    /// Fails with the first error raised by any chunk. Remaining in-flight
    /// chunk requests are dropped and no partial summary is returned.
    pub async fn summarize(
        &self,
        content: &str,
        options: &SummaryOptions,
        credentials: &str,
    ) -> Result<String, SummaryError> {
        let budget = TokenBudget::new(&self.config, options);
        let cleaned = clean_content(content);
        let chunks = self.plan_chunks(&cleaned, &budget);

        info!(
            content_chars = cleaned.len(),
            estimated_tokens = estimate_tokens(&cleaned),
            max_input_tokens = budget.max_input_tokens,
            max_output_tokens = budget.max_output_tokens,
            chunk_count = chunks.len(),
            "Planned summary"
        );

        let resolved = SummaryOptions {
            word_count: Some(budget.max_output_tokens),
            style: Some(options.style_or(&self.config.default_style).to_string()),
        };
        let resolved = &resolved;
        let limit = self
            .config
            .max_concurrent_requests
            .unwrap_or(chunks.len())
            .max(1);
        let guard = self.chunk_deadline();

        // Completion order is arbitrary; results are keyed by chunk index.
        // Dropping the stream on the first error cancels whatever is in flight.
        let mut summaries: Vec<(usize, String)> = stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| async move {
                let call = self.summarizer.summarize_chunk(
                    chunk,
                    resolved,
                    credentials,
                    budget.max_output_tokens,
                );
                match tokio::time::timeout(guard, call).await {
                    Ok(Ok(summary)) => Ok((index, summary)),
                    Ok(Err(e)) => {
                        warn!(chunk_index = index, "Chunk summary failed: {}", e);
                        Err(e)
                    }
                    Err(_) => {
                        warn!(chunk_index = index, "Chunk summary timed out");
                        Err(SummaryError::Unknown(anyhow::anyhow!(
                            "Summarizing chunk {index} timed out after {guard:?}"
                        )))
                    }
                }
            })
            .buffer_unordered(limit)
            .try_collect()
            .await?;
        summaries.sort_unstable_by_key(|(index, _)| *index);

        let summaries: Vec<String> = summaries.into_iter().map(|(_, summary)| summary).collect();
        Ok(summaries.join(SUMMARY_SEPARATOR))
    }

    fn chunk_deadline(&self) -> Duration {
        let attempts = u32::try_from(self.config.max_retries.saturating_add(1)).unwrap_or(u32::MAX);
        (self.config.request_timeout + ATTEMPT_GRACE).saturating_mul(attempts)
    }
}
