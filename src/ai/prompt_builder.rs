use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use serde_json::{Value, json};

/// The user instruction embedding the style and the chunk text.
#[must_use]
pub fn user_instruction(style: &str, chunk: &str) -> String {
    format!("Summarize the following content in a {style} tone: {chunk}")
}

/// Two-message prompt: the fixed system instruction, then the user request.
#[must_use]
pub fn build_prompt(system_prompt: &str, style: &str, chunk: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(system_prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(user_instruction(style, chunk)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Chat Completions request body for `prompt`.
#[must_use]
pub fn build_request_body(model: &str, prompt: &[ChatCompletionMessage], max_tokens: usize) -> Value {
    let messages: Vec<Value> = prompt
        .iter()
        .filter_map(|msg| {
            let role = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function | MessageRole::tool => return None,
            };
            match &msg.content {
                Content::Text(text) => Some(json!({ "role": role, "content": text })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect();

    json!({
        "model": model,
        "messages": messages,
        "max_tokens": max_tokens,
    })
}
