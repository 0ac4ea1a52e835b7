//! Documents and embedding request/response types.

use serde::{Deserialize, Serialize};

use super::message::Part;
use super::JsonObject;

/// A piece of content to embed, structured as parts like message content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub content: Vec<Part>,
    /// Caller-defined metadata, carried but unused by providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

impl Document {
    /// Create a document from a single text fragment.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Part::text(text)],
            metadata: None,
        }
    }

    /// The text fragments of this document, one per text part.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(Part::as_text)
    }
}

/// A batch embedding request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub documents: Vec<Document>,
}

impl EmbedRequest {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

/// One embedding vector, aligned with one input fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentEmbedding {
    pub embedding: Vec<f32>,
}

/// A batch embedding response, one entry per input fragment in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub embeddings: Vec<DocumentEmbedding>,
}
