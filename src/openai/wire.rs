//! OpenAI chat-completion and embeddings wire shapes.
//!
//! Typed request/response bodies for the two endpoints the plugin calls.
//! Request structs serialize with every unset optional omitted; response
//! structs default absent fields so partial vendor replies still decode.
//! Unmodeled response fields are retained in `extra` maps, at the response,
//! choice and message level, so the opaque passthrough on the generic
//! response stays lossless.

use serde::{Deserialize, Serialize};

use crate::model::JsonObject;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";
pub const ROLE_TOOL: &str = "tool";

/// `POST /chat/completions` request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Number of completions to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// One chat message, used in both directions: serialized into requests and
/// deserialized out of response choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Which tool call a `tool` message answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// Message fields this crate does not model (`refusal`, `annotations`),
    /// kept for the passthrough. Empty on request messages.
    #[serde(flatten, skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

impl ChatMessage {
    /// A system message with plain string content.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ROLE_SYSTEM.to_string(),
            content: Some(MessageContent::Text(content.into())),
            ..Self::default()
        }
    }

    /// A user message with multi-part content.
    pub fn user(parts: Vec<ContentPart>) -> Self {
        Self {
            role: ROLE_USER.to_string(),
            content: Some(MessageContent::Parts(parts)),
            ..Self::default()
        }
    }

    /// An assistant message with no content yet; the caller fills in text
    /// content and/or tool calls.
    pub fn assistant() -> Self {
        Self {
            role: ROLE_ASSISTANT.to_string(),
            ..Self::default()
        }
    }

    /// A tool-result message answering `tool_call_id`.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: ROLE_TOOL.to_string(),
            content: Some(MessageContent::Text(content.into())),
            tool_call_id: Some(tool_call_id.into()),
            ..Self::default()
        }
    }
}

/// Message content: either a plain string or a part list. The vendor accepts
/// both encodings on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// The plain string form, `None` for part lists.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(_) => None,
        }
    }
}

/// One entry of multi-part message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>, detail: ImageDetail) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: Some(detail),
            },
        }
    }
}

/// An image reference within message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

/// How much image detail the model should look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

/// A tool call within an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ToolType,
    pub function: FunctionCall,
}

/// The only tool type the completions API knows today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Function,
}

/// A function invocation: name plus a JSON-encoded arguments string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

/// A callable tool offered to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: ToolType,
    pub function: FunctionDefinition,
}

/// Function metadata within a [`Tool`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// JSON-schema document, passed through untouched.
    #[serde(default)]
    pub parameters: JsonObject,
    /// Strict schema adherence. Omitted entirely on API generations that
    /// predate the flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Response-format descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: ResponseFormatType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatType {
    Text,
    JsonObject,
}

/// `POST /chat/completions` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: CompletionUsage,
    /// Response fields this crate does not model, kept for the opaque
    /// passthrough.
    #[serde(flatten, skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// One generated choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: ChatMessage,
    /// Stop reason string; absent while streaming or on some error shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// Choice fields this crate does not model (`logprobs`), kept for the
    /// passthrough.
    #[serde(flatten, skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// Token accounting block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// `POST /embeddings` request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    pub input: Vec<String>,
    pub model: String,
}

/// `POST /embeddings` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    #[serde(default)]
    pub data: Vec<Embedding>,
    #[serde(default)]
    pub model: String,
}

/// One embedding vector with its position in the input batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message_serializes_as_part_list() {
        let msg = ChatMessage::user(vec![
            ContentPart::text("hi"),
            ContentPart::image_url("https://example.com/image.jpg", ImageDetail::Auto),
        ]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "hi"},
                    {"type": "image_url", "image_url": {"url": "https://example.com/image.jpg", "detail": "auto"}},
                ],
            })
        );
    }

    #[test]
    fn test_tool_message_serialization() {
        let msg = ChatMessage::tool("tellAFunnyJoke", "{\"joke\":\"...\"}");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "tool",
                "tool_call_id": "tellAFunnyJoke",
                "content": "{\"joke\":\"...\"}",
            })
        );
    }

    #[test]
    fn test_function_definition_strict_omitted_when_none() {
        let tool = Tool {
            kind: ToolType::Function,
            function: FunctionDefinition {
                name: "lookup".to_string(),
                description: String::new(),
                parameters: JsonObject::new(),
                strict: None,
            },
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(
            value,
            json!({"type": "function", "function": {"name": "lookup", "parameters": {}}})
        );

        let tool = Tool {
            kind: ToolType::Function,
            function: FunctionDefinition {
                strict: Some(false),
                ..tool.function
            },
        };
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["function"]["strict"], json!(false));
    }

    #[test]
    fn test_chat_completion_deserialization() {
        let body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677652288,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!", "refusal": null},
                "finish_reason": "stop",
                "logprobs": null
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21},
            "system_fingerprint": "fp_44709d6fcb"
        });
        let resp: ChatCompletion = serde_json::from_value(body).unwrap();
        assert_eq!(resp.id, "chatcmpl-123");
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(
            resp.choices[0].message.content.as_ref().unwrap().as_text(),
            Some("Hello!")
        );
        assert_eq!(resp.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(resp.usage.total_tokens, 21);
        // Unmodeled fields land in `extra` at every level, nulls included.
        assert_eq!(resp.extra["system_fingerprint"], json!("fp_44709d6fcb"));
        assert!(resp.choices[0].extra.contains_key("logprobs"));
        assert!(resp.choices[0].message.extra.contains_key("refusal"));
    }

    #[test]
    fn test_response_format_serialization() {
        let fmt = ResponseFormat {
            kind: ResponseFormatType::JsonObject,
        };
        assert_eq!(
            serde_json::to_value(fmt).unwrap(),
            json!({"type": "json_object"})
        );
    }
}
