//! Completion tests against a mock chat-completions endpoint.

use ai_client::AiClient;

const COMPLETION_BODY: &str = r#"{
    "id": "chatcmpl-test",
    "object": "chat.completion",
    "created": 1700000000,
    "model": "gpt-3.5-turbo",
    "choices": [
        {
            "index": 0,
            "message": {"role": "assistant", "content": "Sentiment looks bullish."},
            "finish_reason": "stop"
        }
    ],
    "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
}"#;

fn client(base_url: String) -> AiClient {
    AiClient::with_base_url("test-key".to_string(), "gpt-3.5-turbo".to_string(), base_url)
}

#[tokio::test]
async fn analysis_returns_the_completion_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .create_async()
        .await;

    let text = client(server.url())
        .analyze_market_data("0xabc", &serde_json::json!({"totalVolume": "42"}))
        .await
        .unwrap();

    assert_eq!(text, "Sentiment looks bullish.");
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_choice_list_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-3.5-turbo",
                "choices": []
            }"#,
        )
        .create_async()
        .await;

    let err = client(server.url())
        .review_portfolio(&serde_json::json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("No response from the model"));
}
