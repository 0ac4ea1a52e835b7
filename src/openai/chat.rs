//! Chat-completion backed [`Model`] implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::model::{GenerateRequest, GenerateResponse};
use crate::openai::client::OpenAiClient;
use crate::openai::convert::convert_request;
use crate::openai::translate::translate_response;
use crate::openai::variant::ApiVariant;
use crate::registry::{Model, ModelInfo, StreamingCallback};

/// One registered chat-completion model. Generation is convert → call →
/// translate, with the originating request echoed onto the response.
pub struct ChatModel {
    name: String,
    info: ModelInfo,
    client: Arc<OpenAiClient>,
    variant: Arc<dyn ApiVariant>,
}

impl ChatModel {
    pub(crate) fn new(
        name: impl Into<String>,
        info: ModelInfo,
        client: Arc<OpenAiClient>,
        variant: Arc<dyn ApiVariant>,
    ) -> Self {
        Self {
            name: name.into(),
            info,
            client,
            variant,
        }
    }
}

#[async_trait]
impl Model for ChatModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn info(&self) -> &ModelInfo {
        &self.info
    }

    async fn generate(
        &self,
        request: GenerateRequest,
        _callback: Option<&StreamingCallback>,
    ) -> Result<GenerateResponse, LlmError> {
        // TODO: invoke the callback with incremental chunks once the client
        // grows an SSE streaming call; until then every response is unary.
        let json_mode = request.is_json_output();
        let wire_request = convert_request(&self.name, &request, self.variant.as_ref())?;

        tracing::debug!(model = %self.name, "sending chat completion request");
        let wire_response = self.client.create_chat_completion(&wire_request).await?;

        let mut response = translate_response(wire_response, json_mode)?;
        response.request = Some(request);
        Ok(response)
    }
}
