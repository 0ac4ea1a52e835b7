//! Generic-request to chat-completion-request conversion.
//!
//! Maps the provider-agnostic [`GenerateRequest`] onto the vendor wire shape:
//! role-dependent message conversion, tool/function descriptors, sampling
//! parameters, and the response-format hint. Conversion is pure; nothing here
//! touches the network.

use crate::error::LlmError;
use crate::model::{GenerateRequest, Message, OutputFormat, Part, Role, ToolDefinition};
use crate::openai::variant::ApiVariant;
use crate::openai::wire;

/// Convert a generic generation request into a chat-completion request for
/// `model`, shaped for the given API variant.
pub fn convert_request(
    model: &str,
    input: &GenerateRequest,
    variant: &dyn ApiVariant,
) -> Result<wire::ChatCompletionRequest, LlmError> {
    let mut request = wire::ChatCompletionRequest {
        model: model.to_string(),
        messages: convert_messages(&input.messages)?,
        ..Default::default()
    };

    // Sampling parameters use zero-means-unset semantics, so only non-zero
    // values reach the wire.
    if let Some(config) = &input.config {
        if config.max_output_tokens != 0 {
            request.max_tokens = Some(config.max_output_tokens);
        }
        if !config.stop_sequences.is_empty() {
            request.stop = Some(config.stop_sequences.clone());
        }
        if config.temperature != 0.0 {
            request.temperature = Some(config.temperature);
        }
        if config.top_p != 0.0 {
            request.top_p = Some(config.top_p);
        }
    }

    if input.candidates > 0 {
        request.n = Some(input.candidates);
    }

    if !input.tools.is_empty() {
        let tools = input
            .tools
            .iter()
            .map(|tool| convert_tool(tool, variant))
            .collect();
        request.tools = Some(tools);
    }

    // The response-format hint only applies to models that accept the
    // descriptor; for everything else it is dropped on the floor.
    if let Some(output) = &input.output {
        if variant.supports_response_format(model) {
            let kind = match output.format {
                OutputFormat::Json => wire::ResponseFormatType::JsonObject,
                OutputFormat::Text => wire::ResponseFormatType::Text,
                OutputFormat::Media => {
                    return Err(LlmError::InvalidInput(
                        "unsupported output format: media".to_string(),
                    ));
                }
            };
            request.response_format = Some(wire::ResponseFormat { kind });
        }
    }

    Ok(request)
}

/// Convert generic messages into vendor chat messages, role by role.
fn convert_messages(messages: &[Message]) -> Result<Vec<wire::ChatMessage>, LlmError> {
    let mut converted = Vec::with_capacity(messages.len());

    for message in messages {
        match message.role {
            Role::System => {
                // The vendor system message is a plain string; only a leading
                // text part can provide it.
                let Some(text) = message.content.first().and_then(Part::as_text) else {
                    return Err(LlmError::InvalidInput(
                        "system message must start with a text part".to_string(),
                    ));
                };
                converted.push(wire::ChatMessage::system(text));
            }
            Role::User => {
                let mut parts = Vec::with_capacity(message.content.len());
                for part in &message.content {
                    parts.push(convert_part(part)?);
                }
                converted.push(wire::ChatMessage::user(parts));
            }
            Role::Model => {
                let mut assistant = wire::ChatMessage::assistant();
                // A json-mode candidate replayed as history carries its
                // document in a data part; either kind reads as assistant
                // text.
                let leading = message.content.first().and_then(|part| match part {
                    Part::Text { text } => Some(text),
                    Part::Data { data } => Some(data),
                    _ => None,
                });
                if let Some(text) = leading {
                    if !text.is_empty() {
                        assistant.content = Some(wire::MessageContent::Text(text.clone()));
                    }
                }
                let tool_calls = convert_tool_calls(&message.content)?;
                if !tool_calls.is_empty() {
                    assistant.tool_calls = Some(tool_calls);
                }
                converted.push(assistant);
            }
            Role::Tool => {
                for part in &message.content {
                    let Some(response) = part.as_tool_response() else {
                        continue;
                    };
                    let output = serde_json::to_string(&response.output)?;
                    converted.push(wire::ChatMessage::tool(response.name.clone(), output));
                }
            }
        }
    }

    Ok(converted)
}

/// Convert one user-message part into a vendor content part.
fn convert_part(part: &Part) -> Result<wire::ContentPart, LlmError> {
    match part {
        Part::Text { text } => Ok(wire::ContentPart::text(text.clone())),
        Part::Media { url, .. } => Ok(wire::ContentPart::image_url(
            url.clone(),
            wire::ImageDetail::Auto,
        )),
        _ => Err(LlmError::InvalidInput(
            "unknown part type in user message".to_string(),
        )),
    }
}

/// Collect every tool-request part of an assistant message as a tool call.
fn convert_tool_calls(content: &[Part]) -> Result<Vec<wire::ToolCall>, LlmError> {
    let mut calls = Vec::new();
    for part in content {
        let Some(request) = part.as_tool_request() else {
            continue;
        };
        // The generic part carries no vendor call id, so the tool name stands
        // in for it. Concurrent calls to the same tool then share an id; see
        // the crate docs.
        let arguments = if request.input.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&request.input)?
        };
        calls.push(wire::ToolCall {
            id: request.name.clone(),
            kind: wire::ToolType::Function,
            function: wire::FunctionCall {
                name: request.name.clone(),
                arguments,
            },
        });
    }
    Ok(calls)
}

/// Convert a tool definition into a vendor function tool. The input schema is
/// passed through untouched; the output schema never leaves this crate.
fn convert_tool(tool: &ToolDefinition, variant: &dyn ApiVariant) -> wire::Tool {
    wire::Tool {
        kind: wire::ToolType::Function,
        function: wire::FunctionDefinition {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.input_schema.clone(),
            strict: variant.supports_strict_schema().then_some(false),
        },
    }
}
