//! Generation request types.

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::tools::ToolDefinition;
use super::JsonObject;

/// Common sampling parameters.
///
/// Zero (or empty) means "unset": a field is only forwarded to the vendor
/// when it differs from its zero value. The flip side is that an explicit
/// `temperature: 0.0` cannot be requested through this struct; callers that
/// need greedy sampling must rely on the vendor default. This mirrors how
/// hosts populate the config from loosely-typed flow input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Cap on tokens generated per candidate. 0 = vendor default.
    #[serde(default)]
    pub max_output_tokens: u32,
    /// Sequences that stop generation. Empty = none.
    #[serde(default)]
    pub stop_sequences: Vec<String>,
    /// Sampling temperature. 0.0 = vendor default.
    #[serde(default)]
    pub temperature: f64,
    /// Nucleus sampling cutoff. 0.0 = vendor default.
    #[serde(default)]
    pub top_p: f64,
}

/// Requested shape of the generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Free-form text.
    Text,
    /// A single JSON document.
    Json,
    /// Generated media. No chat-completion provider supports this; asking
    /// for it is a conversion error rather than a silent downgrade.
    Media,
}

/// Output-format hint plus an optional schema describing the expected
/// document. The schema rides along for callers that validate output
/// themselves; this crate does not re-validate anything against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<JsonObject>,
}

impl OutputConfig {
    /// Hint with a format and no schema.
    pub fn format(format: OutputFormat) -> Self {
        Self {
            format,
            schema: None,
        }
    }
}

/// A provider-agnostic generation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Conversation history, oldest first.
    pub messages: Vec<Message>,
    /// Sampling parameters. `None` leaves everything at vendor defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationConfig>,
    /// Tools the model may call.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
    /// Output-format hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
    /// Number of alternatives to generate. 0 = vendor default (one).
    #[serde(default)]
    pub candidates: u32,
}

impl GenerateRequest {
    /// Create a request from messages, everything else unset.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Set the sampling config.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the available tools.
    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    /// Set the output-format hint.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the candidate count.
    pub fn with_candidates(mut self, candidates: u32) -> Self {
        self.candidates = candidates;
        self
    }

    /// Whether this request asks for structured JSON output.
    pub fn is_json_output(&self) -> bool {
        self.output
            .as_ref()
            .is_some_and(|o| o.format == OutputFormat::Json)
    }
}
