//! Provider-agnostic generation model.
//!
//! These types are the neutral middle ground between hosts and provider
//! plugins: hosts build [`GenerateRequest`]s and read [`GenerateResponse`]s,
//! plugins convert both to and from their vendor's wire format. Nothing here
//! knows about any particular vendor.

pub mod document;
pub mod message;
pub mod request;
pub mod response;
pub mod tools;

/// A JSON object with string keys: the representation for tool arguments,
/// tool output and schema documents. `serde_json`'s map keeps keys sorted,
/// so serializations are canonical.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

pub use document::{Document, DocumentEmbedding, EmbedRequest, EmbedResponse};
pub use message::{Message, Part, Role, ToolRequest, ToolResponse};
pub use request::{GenerateRequest, GenerationConfig, OutputConfig, OutputFormat};
pub use response::{
    Candidate, FinishReason, GenerateResponse, GenerateResponseChunk, GenerationUsage,
};
pub use tools::ToolDefinition;
