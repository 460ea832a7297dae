use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Combined input+output ceiling of the default completion model.
pub const DEFAULT_TOTAL_CONTEXT_LIMIT: usize = 16_385;
pub const DEFAULT_WORD_COUNT: usize = 100;
pub const DEFAULT_STYLE: &str = "concise";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Knobs for the summarization pipeline, injected into the orchestrator and
/// the completion client.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub total_context_limit: usize,
    pub default_word_count: usize,
    pub default_style: String,
    pub model: String,
    pub system_prompt: String,
    pub api_base: String,
    /// Upper bound for a single completion call.
    pub request_timeout: Duration,
    /// Extra attempts for transient upstream failures. Zero disables retries.
    pub max_retries: usize,
    /// Cap on in-flight chunk requests; `None` sends every chunk at once.
    pub max_concurrent_requests: Option<usize>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            total_context_limit: DEFAULT_TOTAL_CONTEXT_LIMIT,
            default_word_count: DEFAULT_WORD_COUNT,
            default_style: DEFAULT_STYLE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: 0,
            max_concurrent_requests: None,
        }
    }
}

impl SummaryConfig {
    /// Builds a config from defaults overridden by environment variables.
    ///
    /// # Errors
    ///
    /// Returns the offending variable name when a numeric override does not parse.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        Ok(Self {
            total_context_limit: parse_var("TLDR_TOTAL_CONTEXT_LIMIT")?
                .unwrap_or(defaults.total_context_limit),
            default_word_count: parse_var("TLDR_DEFAULT_WORD_COUNT")?
                .unwrap_or(defaults.default_word_count),
            default_style: env::var("TLDR_DEFAULT_STYLE").unwrap_or(defaults.default_style),
            model: env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            system_prompt: defaults.system_prompt,
            api_base: env::var("OPENAI_API_BASE").unwrap_or(defaults.api_base),
            request_timeout: parse_var("TLDR_REQUEST_TIMEOUT_SECS")?
                .map_or(defaults.request_timeout, Duration::from_secs),
            max_retries: parse_var("TLDR_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            max_concurrent_requests: parse_var("TLDR_MAX_CONCURRENT_REQUESTS")?
                .filter(|n: &usize| *n > 0),
        })
    }
}

/// Environment for the Lambda entry point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// May be empty; the handler reports a missing key per request.
    pub openai_api_key: String,
    pub summary: SummaryConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// Propagates [`SummaryConfig::from_env`] failures.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            summary: SummaryConfig::from_env()?,
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{name}: {e}")),
        Err(_) => Ok(None),
    }
}
