use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cardex::services::chat_api_groq::GroqChatApi;
use cardex::traits::chat_api::ChatApi;

fn client_for(server: &MockServer) -> GroqChatApi {
    GroqChatApi::builder()
        .client(reqwest::Client::new())
        .base_url(server.uri())
        .model("openai/gpt-oss-120b".to_string())
        .api_key("TESTKEY".to_string())
        .build()
}

#[tokio::test]
async fn sends_two_messages_and_returns_the_first_choice_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer TESTKEY"))
        .and(body_partial_json(json!({
            "model": "openai/gpt-oss-120b",
            "temperature": 0.0,
            "stream": false,
            "messages": [
                { "role": "system" },
                { "role": "user", "content": "block one" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "[{\"name\":\"A\"}]" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let text = api.call_chat_api("instruction", "block one").await.unwrap();
    assert_eq!(text, "[{\"name\":\"A\"}]");
}

#[tokio::test]
async fn structured_upstream_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "rate limited", "type": "requests" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api.call_chat_api("instruction", "block").await.unwrap_err();
    assert_eq!(err.to_string(), "rate limited");
}

#[tokio::test]
async fn unstructured_upstream_error_body_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let err = api.call_chat_api("instruction", "block").await.unwrap_err();
    assert_eq!(err.to_string(), "bad gateway");
}

#[tokio::test]
async fn missing_choices_yield_an_empty_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let text = api.call_chat_api("instruction", "block").await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": { "role": "assistant", "content": "ok" } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = GroqChatApi::builder()
        .client(reqwest::Client::new())
        .base_url(format!("{}/", server.uri()))
        .model("openai/gpt-oss-120b".to_string())
        .api_key("TESTKEY".to_string())
        .build();
    let text = api.call_chat_api("instruction", "block").await.unwrap();
    assert_eq!(text, "ok");
}
