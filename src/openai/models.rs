//! Known OpenAI model and embedder catalog.
//!
//! The catalog drives what `init` registers and what capability descriptor
//! an unqualified `define_model` falls back to. Models missing from it can
//! still be registered by passing explicit capabilities.

use crate::registry::ModelCapabilities;

pub const GPT_4O: &str = "gpt-4o";
pub const GPT_4O_MINI: &str = "gpt-4o-mini";
pub const GPT_4_TURBO: &str = "gpt-4-turbo";
pub const GPT_4: &str = "gpt-4";

pub const TEXT_EMBEDDING_3_SMALL: &str = "text-embedding-3-small";
pub const TEXT_EMBEDDING_3_LARGE: &str = "text-embedding-3-large";
pub const TEXT_EMBEDDING_ADA_002: &str = "text-embedding-ada-002";

/// Embedders registered by `init`.
pub const KNOWN_EMBEDDERS: &[&str] = &[
    TEXT_EMBEDDING_3_SMALL,
    TEXT_EMBEDDING_3_LARGE,
    TEXT_EMBEDDING_ADA_002,
];

/// Models that honor an explicit `response_format` descriptor. For models
/// outside this list the output-format hint is ignored rather than sent.
pub const RESPONSE_FORMAT_MODELS: &[&str] = &[GPT_4O, GPT_4O_MINI, GPT_4_TURBO];

/// The model catalog registered by `init`.
const KNOWN_MODELS: &[(&str, ModelCapabilities)] = &[
    (GPT_4O, ModelCapabilities::MULTIMODAL),
    (GPT_4O_MINI, ModelCapabilities::MULTIMODAL),
    (GPT_4_TURBO, ModelCapabilities::MULTIMODAL),
    (GPT_4, ModelCapabilities::BASIC_TEXT),
];

/// Capability descriptor for a cataloged model, `None` for unknown names.
pub fn known_capabilities(name: &str) -> Option<ModelCapabilities> {
    KNOWN_MODELS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, capabilities)| *capabilities)
}

/// The full model catalog, in registration order.
pub(crate) fn known_models() -> impl Iterator<Item = (&'static str, ModelCapabilities)> {
    KNOWN_MODELS.iter().copied()
}
