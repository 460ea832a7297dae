//! Lambda entry point: request validation and the fetch-then-summarize path.

use serde_json::{Value, json};
use tldr_url::api::handler::{handle_request, summarize_url};
use tldr_url::{AppConfig, SummaryConfig, SummaryOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_config(api_key: &str, api_base: &str) -> AppConfig {
    AppConfig {
        openai_api_key: api_key.to_string(),
        summary: SummaryConfig {
            api_base: api_base.to_string(),
            ..SummaryConfig::default()
        },
    }
}

fn error_of(response: &Value) -> Value {
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    body["error"].clone()
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let config = app_config("test-api-key", "http://unused.invalid/v1");
    let payload = json!({
        "body": json!({
            "url": "invalid-url",
            "summary_options": { "word_count": 100, "style": "concise" }
        }).to_string()
    });

    let response = handle_request(&config, &payload).await;

    assert_eq!(response["statusCode"], 400);
    let error = error_of(&response);
    assert_eq!(error["message"], "Invalid URL");
    assert_eq!(error["more_info"], "Please provide a valid URL.");
}

#[tokio::test]
async fn test_missing_api_key_is_reported() {
    let config = app_config("", "http://unused.invalid/v1");
    let payload = json!({ "body": json!({ "url": "https://example.com" }).to_string() });

    let response = handle_request(&config, &payload).await;

    assert_eq!(response["statusCode"], 500);
    let error = error_of(&response);
    assert_eq!(error["message"], "API Key Missing");
    assert_eq!(error["more_info"], "OpenAI API key is not configured.");
}

#[tokio::test]
async fn test_missing_body_is_a_bad_request() {
    let config = app_config("test-api-key", "http://unused.invalid/v1");
    let payload = json!({ "headers": { "content-type": "application/json" }, "body": null });

    let response = handle_request(&config, &payload).await;

    assert_eq!(response["statusCode"], 400);
    let error = error_of(&response);
    assert_eq!(error["code"], 400);
    assert_eq!(error["message"], "Bad Request");
    assert_eq!(error["more_info"], "Request body is missing or invalid.");
}

#[tokio::test]
async fn test_fetched_page_is_cleaned_and_summarized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "<html><body><script>x()</script><p>Rust is fast.</p></body></html>",
                "text/html",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Rust is quick." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = app_config("test-api-key", &format!("{}/v1", server.uri()));
    let summary = summarize_url(
        &config,
        &format!("{}/article", server.uri()),
        &SummaryOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(summary, "Rust is quick.");
}

#[tokio::test]
async fn test_non_text_pages_are_refused() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x89_u8, 0x50, 0x4E, 0x47], "image/png"),
        )
        .mount(&server)
        .await;

    let config = app_config("test-api-key", &format!("{}/v1", server.uri()));
    let response = summarize_url(
        &config,
        &format!("{}/image", server.uri()),
        &SummaryOptions::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(response["statusCode"], 500);
    let more_info = error_of(&response)["more_info"].as_str().unwrap().to_string();
    assert!(more_info.contains("image/png"));
}

#[tokio::test]
async fn test_fetch_status_failure_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = app_config("test-api-key", &format!("{}/v1", server.uri()));
    let response = summarize_url(
        &config,
        &format!("{}/missing", server.uri()),
        &SummaryOptions::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(response["statusCode"], 500);
    let error = error_of(&response);
    assert_eq!(error["message"], "Internal Server Error");
    assert!(error["more_info"].as_str().unwrap().contains("Not Found"));
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Plain text page."))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = app_config("test-api-key", &format!("{}/v1", server.uri()));
    let response = summarize_url(
        &config,
        &format!("{}/article", server.uri()),
        &SummaryOptions::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(response["statusCode"], 502);
    let more_info = error_of(&response)["more_info"].as_str().unwrap().to_string();
    assert!(more_info.contains("Internal Server Error"));
}

#[tokio::test]
async fn test_empty_completion_maps_to_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("Plain text page.", "text/plain"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let config = app_config("test-api-key", &format!("{}/v1", server.uri()));
    let response = summarize_url(
        &config,
        &format!("{}/article", server.uri()),
        &SummaryOptions::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(response["statusCode"], 502);
    let error = error_of(&response);
    assert_eq!(error["message"], "Bad Gateway");
    assert_eq!(
        error["more_info"],
        "No summary received from the completion service."
    );
}
