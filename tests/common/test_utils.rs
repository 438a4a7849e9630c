use super::mocks::MockLlmClient;
use seo_sync::{
    config::WordPressConfig,
    seo::SeoSynchronizer,
    server::handlers::AppState,
    wordpress::WordPressClient,
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use wiremock::MockServer;

pub const WORDPRESS_PATH: &str = "/wp-json/seo/v1/update";
pub const WORDPRESS_TOKEN: &str = "wp-test-token";

pub const LAKERS_RESPONSE: &str = r#"{"content":["Lakers","LA Lakers","LAL"],"meta_description":"...","keywords":"lakers, preview","description":["Preview","2024 Preview"]}"#;

/// OpenAI-style chat completion body whose only choice carries `content`.
pub fn completion_body(content: Value) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 10, "total_tokens": 30 }
    })
}

pub fn wordpress_config(server: &MockServer) -> WordPressConfig {
    WordPressConfig {
        api_url: format!("{}{}", server.uri(), WORDPRESS_PATH),
        api_key: WORDPRESS_TOKEN.to_string(),
    }
}

pub fn create_synchronizer(llm: Arc<MockLlmClient>, server: &MockServer) -> SeoSynchronizer {
    SeoSynchronizer::new(llm, WordPressClient::new(wordpress_config(server)))
}

pub fn create_app_state(llm: Arc<MockLlmClient>, server: &MockServer) -> AppState {
    AppState {
        synchronizer: Arc::new(create_synchronizer(llm, server)),
    }
}

pub fn lakers_request() -> Value {
    json!({
        "team_names": "Lakers, LA Lakers",
        "title": "2024 Season Preview",
        "post_id": 42
    })
}

/// Polls the mock server until it has seen `count` requests or a few
/// seconds have passed. Used for work done by detached tasks.
pub async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<wiremock::Request> {
    for _ in 0..100 {
        let received = server.received_requests().await.unwrap_or_default();
        if received.len() >= count {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    server.received_requests().await.unwrap_or_default()
}
