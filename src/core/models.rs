use serde::{Deserialize, Serialize};

use super::config::SummaryConfig;

/// Caller preferences for a summary. Missing fields fall back to
/// [`SummaryConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl SummaryOptions {
    #[must_use]
    pub fn style_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.style
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
    }
}

/// Input/output split of the model's context window for one summarize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    pub max_input_tokens: usize,
    pub max_output_tokens: usize,
}

impl TokenBudget {
    #[must_use]
    pub fn new(config: &SummaryConfig, options: &SummaryOptions) -> Self {
        // A zero word count means "unspecified", as with an omitted field.
        let max_output_tokens = options
            .word_count
            .filter(|n| *n > 0)
            .unwrap_or(config.default_word_count);
        Self {
            max_input_tokens: config.total_context_limit.saturating_sub(max_output_tokens),
            max_output_tokens,
        }
    }
}

/// Body accepted by the Lambda entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(default)]
    pub summary_options: Option<SummaryOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
