//! Chat-completion-response to generic-response translation.
//!
//! The inverse of [`super::convert`]: vendor choices become candidates,
//! vendor finish reasons collapse onto the generic set, tool calls decode
//! back into tool-request parts, and the raw vendor response rides along as
//! the opaque `custom` document.

use crate::error::LlmError;
use crate::model::{
    Candidate, FinishReason, GenerateResponse, GenerationUsage, JsonObject, Message, Part, Role,
};
use crate::openai::wire;

/// Translate a chat-completion response into the generic shape.
///
/// `json_mode` reflects whether the originating request asked for structured
/// JSON output; it decides whether plain choice content becomes a data part
/// or a text part.
pub fn translate_response(
    response: wire::ChatCompletion,
    json_mode: bool,
) -> Result<GenerateResponse, LlmError> {
    let mut translated = GenerateResponse {
        usage: GenerationUsage {
            input_tokens: response.usage.prompt_tokens,
            output_tokens: response.usage.completion_tokens,
            total_tokens: response.usage.total_tokens,
        },
        ..GenerateResponse::default()
    };

    for choice in &response.choices {
        translated.candidates.push(translate_candidate(choice, json_mode)?);
    }

    translated.custom = Some(serde_json::to_value(&response)?);
    Ok(translated)
}

/// Translate one vendor choice into a candidate.
fn translate_candidate(choice: &wire::ChatChoice, json_mode: bool) -> Result<Candidate, LlmError> {
    // Total mapping: anything unrecognized (or absent) is Unknown, never an
    // error. A tool-call stop is a normal end of turn.
    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") | Some("tool_calls") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::Blocked,
        Some("function_call") => FinishReason::Other,
        other => {
            if let Some(reason) = other {
                tracing::warn!(reason = %reason, "unrecognized finish reason");
            }
            FinishReason::Unknown
        }
    };

    let mut message = Message::new(Role::Model, Vec::new());

    match &choice.message.tool_calls {
        Some(calls) if !calls.is_empty() => {
            for call in calls {
                let input = decode_arguments(&call.function.arguments)?;
                message
                    .content
                    .push(Part::tool_request(call.function.name.clone(), input));
            }
        }
        _ => {
            let content = choice
                .message
                .content
                .as_ref()
                .and_then(wire::MessageContent::as_text)
                .unwrap_or_default();
            let part = if json_mode {
                Part::data(content)
            } else {
                Part::text(content)
            };
            message.content.push(part);
        }
    }

    Ok(Candidate {
        index: choice.index,
        finish_reason,
        message,
        custom: None,
    })
}

/// Decode a tool-call arguments string into a JSON mapping. The empty string
/// means "no arguments", matching what conversion emits for empty input.
fn decode_arguments(arguments: &str) -> Result<JsonObject, LlmError> {
    if arguments.is_empty() {
        return Ok(JsonObject::new());
    }
    serde_json::from_str(arguments).map_err(|e| {
        LlmError::ParseError(format!("invalid tool call arguments {arguments:?}: {e}"))
    })
}
