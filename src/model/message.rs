//! Messages, roles and content parts.
//!
//! A [`Message`] is a role plus an ordered list of [`Part`]s. The role
//! determines which part kinds a provider will accept: tool-response parts
//! only make sense under [`Role::Tool`], tool-request parts under
//! [`Role::Model`], and so on. Providers enforce those constraints at
//! conversion time rather than here, so a `Message` itself is just data.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Who authored a message.
///
/// Serialized as lowercase strings. The set is closed: payloads carrying any
/// other tag fail to deserialize, so conversion code can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End-user input.
    User,
    /// Instructions to the model.
    System,
    /// Output produced by the model. Providers with an `assistant` role map
    /// this role onto it.
    Model,
    /// Results returned from tool execution.
    Tool,
}

/// A request from the model to invoke a named tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Name of the tool to call.
    ///
    /// This doubles as the call identifier on the wire: the generic shape
    /// carries no vendor-issued call id, so two concurrent calls to the same
    /// tool in one turn are not distinguishable. Kept for round-trip
    /// compatibility.
    pub name: String,
    /// Arguments for the call.
    #[serde(default)]
    pub input: JsonObject,
}

/// The output of a completed tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Name of the tool that ran. Used as the call identifier on the wire,
    /// same caveat as [`ToolRequest::name`].
    pub name: String,
    /// Result payload.
    #[serde(default)]
    pub output: JsonObject,
}

/// One piece of message content. Exactly one variant is active per part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// Plain text.
    Text { text: String },
    /// A media reference, addressed by URL.
    Media { content_type: String, url: String },
    /// Raw structured output, produced by JSON-mode translation. The string
    /// is carried verbatim and never validated against a schema here.
    Data { data: String },
    /// A tool invocation requested by the model.
    ToolRequest { tool_request: ToolRequest },
    /// The result of a tool invocation.
    ToolResponse { tool_response: ToolResponse },
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create a media part from a content type and URL.
    pub fn media(content_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Media {
            content_type: content_type.into(),
            url: url.into(),
        }
    }

    /// Create a structured-data part carrying a raw string.
    pub fn data(data: impl Into<String>) -> Self {
        Self::Data { data: data.into() }
    }

    /// Create a tool-request part.
    pub fn tool_request(name: impl Into<String>, input: JsonObject) -> Self {
        Self::ToolRequest {
            tool_request: ToolRequest {
                name: name.into(),
                input,
            },
        }
    }

    /// Create a tool-response part.
    pub fn tool_response(name: impl Into<String>, output: JsonObject) -> Self {
        Self::ToolResponse {
            tool_response: ToolResponse {
                name: name.into(),
                output,
            },
        }
    }

    /// Check if this is a text part.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Check if this is a media part.
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Media { .. })
    }

    /// Check if this is a structured-data part.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// Check if this is a tool-request part.
    pub fn is_tool_request(&self) -> bool {
        matches!(self, Self::ToolRequest { .. })
    }

    /// Check if this is a tool-response part.
    pub fn is_tool_response(&self) -> bool {
        matches!(self, Self::ToolResponse { .. })
    }

    /// The text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// The tool request, if this is a tool-request part.
    pub fn as_tool_request(&self) -> Option<&ToolRequest> {
        match self {
            Self::ToolRequest { tool_request } => Some(tool_request),
            _ => None,
        }
    }

    /// The tool response, if this is a tool-response part.
    pub fn as_tool_response(&self) -> Option<&ToolResponse> {
        match self {
            Self::ToolResponse { tool_response } => Some(tool_response),
            _ => None,
        }
    }
}

/// A role plus ordered content parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub content: Vec<Part>,
}

impl Message {
    /// Create a message from a role and parts.
    pub fn new(role: Role, content: Vec<Part>) -> Self {
        Self { role, content }
    }

    /// Create a user message with a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![Part::text(text)])
    }

    /// Create a system message with a single text part.
    pub fn system_text(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![Part::text(text)])
    }

    /// Create a model message with a single text part.
    pub fn model_text(text: impl Into<String>) -> Self {
        Self::new(Role::Model, vec![Part::text(text)])
    }
}
