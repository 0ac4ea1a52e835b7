//! Mock API tests for the OpenAI plugin.
//!
//! wiremock stands in for the vendor endpoint; response bodies follow the
//! official chat-completion and embeddings formats:
//! https://platform.openai.com/docs/api-reference/chat/object

use std::sync::Arc;

use hargow::LlmError;
use hargow::model::{
    Document, EmbedRequest, FinishReason, GenerateRequest, GenerationConfig, Message,
    OutputConfig, OutputFormat, Part, ToolDefinition,
};
use hargow::openai::{self, LegacyCompletionsApi, OpenAiConfig, OpenAiPlugin};
use hargow::registry::Registry;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_response(content: &str, finish_reason: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": finish_reason
        }],
        "usage": {
            "prompt_tokens": 9,
            "completion_tokens": 12,
            "total_tokens": 21
        },
        "system_fingerprint": "fp_44709d6fcb"
    })
}

/// An initialized plugin and registry pointed at the mock server.
fn init_against(server: &MockServer) -> (OpenAiPlugin, Registry) {
    let mut registry = Registry::new();
    let plugin = OpenAiPlugin::new(
        OpenAiConfig::new()
            .with_api_key("test-api-key")
            .with_base_url(server.uri()),
    );
    plugin.init(&mut registry).expect("init");
    (plugin, registry)
}

#[tokio::test]
async fn test_generate_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_completion_response(
                "Why did the dog cross the road?",
                "stop",
            )),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let model = openai::model(&registry, "gpt-4o").unwrap();

    let request = GenerateRequest::new(vec![Message::user_text("Tell a joke about dogs.")]);
    let response = model.generate(request.clone(), None).await.unwrap();

    assert_eq!(response.text(), "Why did the dog cross the road?");
    assert_eq!(response.candidates[0].finish_reason, FinishReason::Stop);
    assert_eq!(response.usage.input_tokens, 9);
    assert_eq!(response.usage.output_tokens, 12);
    assert_eq!(response.usage.total_tokens, 21);
    // The raw vendor response rides along, and the request is echoed back.
    assert_eq!(response.custom.as_ref().unwrap()["id"], json!("chatcmpl-123"));
    assert_eq!(response.request, Some(request));

    // The outbound body carries the converted message.
    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["model"], json!("gpt-4o"));
    assert_eq!(
        body["messages"],
        json!([{
            "role": "user",
            "content": [{"type": "text", "text": "Tell a joke about dogs."}]
        }])
    );
}

#[tokio::test]
async fn test_generate_sends_sampling_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "n": 3,
            "max_tokens": 10,
            "temperature": 0.7,
            "top_p": 0.9,
            "response_format": {"type": "text"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_response("Tell a joke", "length")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let model = openai::model(&registry, "gpt-4o").unwrap();

    let request = GenerateRequest::new(vec![Message::user_text("Tell a joke about dogs.")])
        .with_candidates(3)
        .with_config(GenerationConfig {
            max_output_tokens: 10,
            stop_sequences: vec!["\n".to_string()],
            temperature: 0.7,
            top_p: 0.9,
        })
        .with_output(OutputConfig::format(OutputFormat::Text));

    let response = model.generate(request, None).await.unwrap();
    assert_eq!(response.candidates[0].finish_reason, FinishReason::Length);

    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["stop"], json!(["\n"]));
}

#[tokio::test]
async fn test_generate_json_mode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(
            json!({"response_format": {"type": "json_object"}}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_response("{\"json\": \"test\"}", "stop")),
        )
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let model = openai::model(&registry, "gpt-4o").unwrap();

    let request = GenerateRequest::new(vec![Message::user_text("Give me JSON.")])
        .with_output(OutputConfig::format(OutputFormat::Json));
    let response = model.generate(request, None).await.unwrap();

    // JSON mode surfaces the content as a data part, not plain text.
    assert_eq!(
        response.candidates[0].message.content,
        vec![Part::data("{\"json\": \"test\"}")]
    );
}

#[tokio::test]
async fn test_generate_tool_call_response() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "id": "chatcmpl-456",
        "object": "chat.completion",
        "created": 1677652288,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_abc123",
                    "type": "function",
                    "function": {
                        "name": "tellAFunnyJoke",
                        "arguments": "{\"topic\":\"dogs\"}"
                    }
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 82, "completion_tokens": 17, "total_tokens": 99}
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let model = openai::model(&registry, "gpt-4o").unwrap();

    let request = GenerateRequest::new(vec![Message::user_text("Tell a joke about dogs.")]);
    let response = model.generate(request, None).await.unwrap();

    let candidate = &response.candidates[0];
    assert_eq!(candidate.finish_reason, FinishReason::Stop);
    let tool_request = candidate.message.content[0].as_tool_request().unwrap();
    assert_eq!(tool_request.name, "tellAFunnyJoke");
    assert_eq!(
        serde_json::to_value(&tool_request.input).unwrap(),
        json!({"topic": "dogs"})
    );
}

#[tokio::test]
async fn test_generate_with_legacy_variant_omits_strict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_completion_response("ok", "stop")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut registry = Registry::new();
    let plugin = OpenAiPlugin::new(
        OpenAiConfig::new()
            .with_api_key("test-api-key")
            .with_base_url(mock_server.uri()),
    )
    .with_variant(Arc::new(LegacyCompletionsApi));
    plugin.init(&mut registry).expect("init");

    let model = openai::model(&registry, "gpt-4o").unwrap();
    let schema = json!({"type": "object", "properties": {"topic": {"type": "string"}}});
    let request = GenerateRequest::new(vec![Message::user_text("Tell a joke about dogs.")])
        .with_tools(vec![ToolDefinition::new(
            "tellAFunnyJoke",
            "use when want to tell a funny joke",
            schema.as_object().expect("object schema").clone(),
        )]);
    model.generate(request, None).await.unwrap();

    // The legacy generation leaves the strict flag off the function tool.
    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let function = &body["tools"][0]["function"];
    assert_eq!(function["name"], json!("tellAFunnyJoke"));
    assert!(function.get("strict").is_none());
}

#[tokio::test]
async fn test_api_error_passes_through_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let model = openai::model(&registry, "gpt-4o").unwrap();

    let request = GenerateRequest::new(vec![Message::user_text("hi")]);
    let err = model.generate(request, None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(matches!(err, LlmError::ApiError { .. }));
    assert!(err.to_string().contains("Incorrect API key provided"));
}

#[tokio::test]
async fn test_embed_round_trip() {
    let mock_server = MockServer::start().await;

    // Vectors returned out of input order; the embedder must sort by index.
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .and(header("Authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "embedding", "embedding": [0.4, 0.5, 0.6], "index": 1},
                {"object": "embedding", "embedding": [0.1, 0.2, 0.3], "index": 0}
            ],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 8, "total_tokens": 8}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (_, registry) = init_against(&mock_server);
    let embedder = openai::embedder(&registry, "text-embedding-3-small").unwrap();

    let request = EmbedRequest::new(vec![
        Document::from_text("first chunk"),
        Document::from_text("second chunk"),
    ]);
    let response = embedder.embed(request).await.unwrap();

    assert_eq!(response.embeddings.len(), 2);
    assert_eq!(response.embeddings[0].embedding, vec![0.1, 0.2, 0.3]);
    assert_eq!(response.embeddings[1].embedding, vec![0.4, 0.5, 0.6]);

    // Both documents flatten into one batch call.
    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["input"], json!(["first chunk", "second chunk"]));
    assert_eq!(body["model"], json!("text-embedding-3-small"));
}
