//! Tool metadata forwarded to providers.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Descriptive metadata for a callable tool. Carries no behavior; providers
/// forward it so the model can decide when to request a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name, unique within a request.
    pub name: String,
    /// What the tool does and when to use it.
    #[serde(default)]
    pub description: String,
    /// JSON-schema-shaped description of the call arguments. Passed through
    /// to the vendor unmodified.
    #[serde(default)]
    pub input_schema: JsonObject,
    /// JSON-schema-shaped description of the result. Kept for callers that
    /// validate tool output themselves; never sent to the vendor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<JsonObject>,
}

impl ToolDefinition {
    /// Create a definition with a name, description and input schema.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: JsonObject,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            output_schema: None,
        }
    }
}
