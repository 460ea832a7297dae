//! Lambda entry point: validate the request, fetch the page, summarize it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{SummarizeRequest, SummaryOptions, SummaryResponse};
use crate::errors::SummaryError;
use crate::utils::{fetch_content, is_valid_url};
use crate::worker::summarize::SummaryOrchestrator;

pub use self::function_handler as handler;

/// Lambda handler for the summarize endpoint.
///
/// # Errors
///
/// Only configuration failures surface as Lambda errors; every request-level
/// problem becomes an HTTP error response.
#[tracing::instrument(level = "info", skip(event), fields(correlation_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    Ok(handle_request(&config, &event.payload).await)
}

/// Turn one API Gateway / Function URL payload into a response payload.
pub async fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    let request = match parse_request(payload) {
        Ok(r) => r,
        Err(response) => return response,
    };

    if !is_valid_url(&request.url) {
        warn!(url = %request.url, "Rejected URL");
        return helpers::err_response(400, "Invalid URL", Some("Please provide a valid URL."));
    }

    if config.openai_api_key.trim().is_empty() {
        error!("OPENAI_API_KEY is not configured");
        return helpers::err_response(
            500,
            "API Key Missing",
            Some("OpenAI API key is not configured."),
        );
    }

    let options = request.summary_options.unwrap_or_default();
    match summarize_url(config, &request.url, &options).await {
        Ok(summary) => helpers::json_response(200, &json!(SummaryResponse { summary })),
        Err(response) => response,
    }
}

/// Fetch `url` and summarize it. Does not validate the URL.
///
/// # Errors
///
/// Returns a ready-made error response for fetch or summary failures.
pub async fn summarize_url(
    config: &AppConfig,
    url: &str,
    options: &SummaryOptions,
) -> Result<String, Value> {
    let http = Client::builder()
        .timeout(config.summary.request_timeout)
        .build()
        .map_err(|e| internal_error(&format!("Failed to build HTTP client: {e}")))?;

    let content = fetch_content(&http, url).await.map_err(|e| {
        error!("Failed to fetch content: {}", e);
        internal_error(&e.to_string())
    })?;

    let orchestrator = SummaryOrchestrator::from_config(config.summary.clone())
        .map_err(|e| internal_error(&e.to_string()))?;

    let summary = orchestrator
        .summarize(&content, options, &config.openai_api_key)
        .await
        .map_err(|e| {
            error!("Failed to generate summary: {}", e);
            summary_error_response(&e)
        })?;

    info!(summary_chars = summary.len(), "Summary generated");
    Ok(summary)
}

fn internal_error(detail: &str) -> Value {
    helpers::err_response(500, "Internal Server Error", Some(detail))
}

fn summary_error_response(err: &SummaryError) -> Value {
    match err {
        SummaryError::Upstream(_) | SummaryError::EmptyResponse => {
            helpers::err_response(502, "Bad Gateway", Some(&err.to_string()))
        }
        SummaryError::Unknown(_) => internal_error(&err.to_string()),
    }
}

fn parse_request(payload: &Value) -> Result<SummarizeRequest, Value> {
    let bad_request = || {
        helpers::err_response(400, "Bad Request", Some("Request body is missing or invalid."))
    };

    // Direct invocations carry the request as the payload itself.
    let Some(body) = payload.get("body") else {
        return serde_json::from_value(payload.clone()).map_err(|e| {
            warn!("Unparsable direct payload: {}", e);
            bad_request()
        });
    };

    let Some(body) = body.as_str().filter(|b| !b.trim().is_empty()) else {
        error!("Request body is missing or not a string");
        return Err(bad_request());
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let decoded = if is_base64 {
        let bytes = STANDARD.decode(body).map_err(|e| {
            warn!("Invalid base64 body: {}", e);
            bad_request()
        })?;
        String::from_utf8(bytes).map_err(|_| bad_request())?
    } else {
        body.to_string()
    };

    serde_json::from_str(&decoded).map_err(|e| {
        warn!("Unparsable request body: {}", e);
        bad_request()
    })
}
