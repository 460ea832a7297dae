use thiserror::Error;

/// Failures surfaced by the summarization core.
///
/// The orchestrator never recovers from these locally: the first one raised
/// by any chunk aborts the whole call and is handed back unchanged.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The completion service answered with a non-success status.
    #[error("Error summarizing content: {0}")]
    Upstream(String),

    /// The completion service answered successfully but returned no choices.
    #[error("No summary received from the completion service.")]
    EmptyResponse,

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// The request never got an HTTP answer (connect, send or timeout failure).
#[derive(Debug, Error)]
#[error("OpenAI API request failed: {0}")]
pub struct TransportError(String);

impl SummaryError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Only 5xx statuses and transport failures qualify; unreadable bodies and
    /// malformed credentials fail the same way every time.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SummaryError::Upstream(status) => status.starts_with('5'),
            SummaryError::EmptyResponse => false,
            SummaryError::Unknown(cause) => cause.is::<TransportError>(),
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::Unknown(TransportError(error.to_string()).into())
    }
}

/// Failures raised while retrieving the page to summarize.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch content from URL: {0}")]
    Status(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Error fetching content: {0}")]
    Http(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http(error.to_string())
    }
}
