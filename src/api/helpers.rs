//! Response builders for the Lambda entry point.

use serde_json::{Value, json};

/// Returns a JSON response with the given status code and body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response shaped as `{"error": {code, message, more_info}}`.
#[must_use]
pub fn err_response(status_code: u16, message: &str, more_info: Option<&str>) -> Value {
    json_response(
        status_code,
        &json!({
            "error": {
                "code": status_code,
                "message": message,
                "more_info": more_info.unwrap_or_default(),
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &Value) -> Value {
        serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn error_response_carries_code_message_and_info() {
        let resp = err_response(400, "Bad Request", Some("The provided data was invalid"));
        assert_eq!(resp["statusCode"], 400);
        assert_eq!(resp["headers"]["Content-Type"], "application/json");
        assert_eq!(
            body_of(&resp)["error"],
            json!({
                "code": 400,
                "message": "Bad Request",
                "more_info": "The provided data was invalid",
            })
        );
    }

    #[test]
    fn error_response_defaults_more_info_to_empty() {
        let resp = err_response(404, "Not Found", None);
        assert_eq!(body_of(&resp)["error"]["more_info"], "");
    }
}
