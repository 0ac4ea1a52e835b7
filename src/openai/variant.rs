//! Capability differences between chat-completions API generations.
//!
//! The vendor has shipped more than one generation of its completions
//! surface, differing in small request details rather than in shape. Instead
//! of duplicating the whole conversion per generation, conversion is written
//! once against [`ApiVariant`] and the variant answers the points where the
//! generations disagree.

use crate::openai::models::RESPONSE_FORMAT_MODELS;

/// Answers the request-shaping questions that differ between API
/// generations.
pub trait ApiVariant: Send + Sync {
    /// Short identifier for logs.
    fn id(&self) -> &'static str;

    /// Whether `model` honors an explicit `response_format` descriptor.
    /// When this returns false the output-format hint is dropped silently.
    fn supports_response_format(&self, model: &str) -> bool;

    /// Whether function tools carry the `strict` schema flag. Variants
    /// without it omit the field entirely instead of sending `false`.
    fn supports_strict_schema(&self) -> bool;
}

/// The current completions generation: strict schema flag available.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentCompletionsApi;

impl ApiVariant for CurrentCompletionsApi {
    fn id(&self) -> &'static str {
        "completions"
    }

    fn supports_response_format(&self, model: &str) -> bool {
        RESPONSE_FORMAT_MODELS.contains(&model)
    }

    fn supports_strict_schema(&self) -> bool {
        true
    }
}

/// The pre-strict completions generation: same wire shape, no `strict`
/// field on function definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyCompletionsApi;

impl ApiVariant for LegacyCompletionsApi {
    fn id(&self) -> &'static str {
        "completions-legacy"
    }

    fn supports_response_format(&self, model: &str) -> bool {
        RESPONSE_FORMAT_MODELS.contains(&model)
    }

    fn supports_strict_schema(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::models;

    #[test]
    fn test_response_format_allow_list() {
        let variant = CurrentCompletionsApi;
        assert!(variant.supports_response_format(models::GPT_4O));
        assert!(variant.supports_response_format(models::GPT_4_TURBO));
        assert!(!variant.supports_response_format(models::GPT_4));
        assert!(!variant.supports_response_format("gpt-3.5-turbo"));
    }

    #[test]
    fn test_strict_schema_differs_by_generation() {
        assert!(CurrentCompletionsApi.supports_strict_schema());
        assert!(!LegacyCompletionsApi.supports_strict_schema());
    }
}
