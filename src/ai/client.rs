//! LLM (`OpenAI`) API client module
//!
//! Sends one chunk at a time to the Chat Completions endpoint and returns the
//! first choice's text.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use super::prompt_builder::{build_prompt, build_request_body};
use crate::core::config::SummaryConfig;
use crate::core::models::SummaryOptions;
use crate::errors::SummaryError;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Turns one chunk into one summary.
///
/// Implementations must be independent per call: the orchestrator runs many
/// of these concurrently and shares nothing between them.
#[async_trait]
pub trait ChunkSummarizer: Send + Sync {
    /// # Errors
    ///
    /// [`SummaryError::Upstream`] for a non-success status,
    /// [`SummaryError::EmptyResponse`] when no choice came back, and
    /// [`SummaryError::Unknown`] for anything else.
    async fn summarize_chunk(
        &self,
        chunk: &str,
        options: &SummaryOptions,
        credentials: &str,
        max_output_tokens: usize,
    ) -> Result<String, SummaryError>;
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// LLM API client for generating chunk summaries
pub struct LlmClient {
    http: Client,
    endpoint: String,
    model_name: String,
    system_prompt: String,
    default_style: String,
    max_retries: usize,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &SummaryConfig) -> Result<Self, SummaryError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build OpenAI HTTP client: {e}"))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            model_name: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            default_style: config.default_style.clone(),
            max_retries: config.max_retries,
        })
    }

    fn headers(credentials: &str) -> Result<HeaderMap, SummaryError> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {credentials}"))
            .map_err(|e| anyhow::anyhow!("Invalid Authorization header: {e}"))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send_once(
        &self,
        body: &serde_json::Value,
        credentials: &str,
    ) -> Result<String, SummaryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .headers(Self::headers(credentials)?)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is informational only; the status is what callers see.
            match response.json::<ApiErrorBody>().await {
                Ok(err) => warn!(%status, message = %err.error.message, "OpenAI API error"),
                Err(_) => warn!(%status, "OpenAI API error without a readable body"),
            }
            return Err(SummaryError::Upstream(status.to_string()));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            anyhow::anyhow!("Failed to parse OpenAI response: {e}")
        })?;
        first_choice_text(parsed)
    }
}

fn first_choice_text(response: CompletionResponse) -> Result<String, SummaryError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .ok_or(SummaryError::EmptyResponse)
}

#[async_trait]
impl ChunkSummarizer for LlmClient {
    async fn summarize_chunk(
        &self,
        chunk: &str,
        options: &SummaryOptions,
        credentials: &str,
        max_output_tokens: usize,
    ) -> Result<String, SummaryError> {
        let style = options.style_or(&self.default_style);
        let prompt = build_prompt(&self.system_prompt, style, chunk);
        let body = build_request_body(&self.model_name, &prompt, max_output_tokens);

        #[cfg(feature = "debug-logs")]
        debug!(
            message_count = prompt.len(),
            style_chars = style.len(),
            "Built chunk prompt"
        );

        info!(
            chunk_chars = chunk.len(),
            max_output_tokens, "Requesting chunk summary"
        );

        // 100ms, 200ms, 400ms, ... capped at MAX_RETRY_DELAY.
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(MAX_RETRY_DELAY)
            .map(jitter)
            .take(self.max_retries);

        let summary = RetryIf::start(
            strategy,
            || self.send_once(&body, credentials),
            |e: &SummaryError| {
                let retry = e.is_transient();
                if retry {
                    debug!("Retrying chunk summary after transient error: {}", e);
                }
                retry
            },
        )
        .await?;

        info!(summary_chars = summary.len(), "Received chunk summary");
        Ok(summary)
    }
}
