//! Generation response types.

use serde::{Deserialize, Serialize};

use super::message::{Message, Part};
use super::request::GenerateRequest;

/// Why a candidate stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishReason {
    /// Natural completion. Vendor tool-call stops also map here: requesting
    /// a tool is the model finishing its turn, not an abnormal end.
    Stop,
    /// The token limit was hit.
    Length,
    /// Content was withheld by the vendor's safety filter.
    Blocked,
    /// A reason with no generic counterpart (e.g. the deprecated
    /// function-call stop).
    Other,
    /// The vendor reported no reason, or one this crate does not know.
    Unknown,
}

/// Token accounting, copied verbatim from the vendor response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Position within the response, as reported by the vendor.
    pub index: u32,
    pub finish_reason: FinishReason,
    /// The generated message, always with [`super::Role::Model`].
    pub message: Message,
    /// Vendor-specific detail for this candidate. Reserved; currently never
    /// populated by the OpenAI plugin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
}

impl Candidate {
    /// Concatenated text and raw-data content of the candidate message.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for part in &self.message.content {
            match part {
                Part::Text { text } => out.push_str(text),
                Part::Data { data } => out.push_str(data),
                _ => {}
            }
        }
        out
    }
}

/// A provider-agnostic generation response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated alternatives, in vendor order.
    pub candidates: Vec<Candidate>,
    /// Token accounting for the whole call.
    #[serde(default)]
    pub usage: GenerationUsage,
    /// The full vendor response as an opaque JSON document, for callers that
    /// need vendor-specific detail the generic shape does not carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
    /// Echo of the request that produced this response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<GenerateRequest>,
}

impl GenerateResponse {
    /// Text of the first candidate, empty when there are no candidates.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(Candidate::text)
            .unwrap_or_default()
    }
}

/// One increment of a streamed response.
///
/// Streaming delivery is an anticipated extension: generate calls accept a
/// callback taking this type, but no provider produces chunks yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponseChunk {
    /// Candidate index the chunk belongs to.
    pub index: u32,
    /// New content parts in this increment.
    pub content: Vec<Part>,
}
