//! Embeddings-endpoint backed [`Embedder`] implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::model::{DocumentEmbedding, EmbedRequest, EmbedResponse};
use crate::openai::client::OpenAiClient;
use crate::openai::wire;
use crate::registry::Embedder;

/// One registered embedding model.
pub struct EmbeddingModel {
    name: String,
    client: Arc<OpenAiClient>,
}

impl EmbeddingModel {
    pub(crate) fn new(name: impl Into<String>, client: Arc<OpenAiClient>) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }
}

#[async_trait]
impl Embedder for EmbeddingModel {
    fn name(&self) -> &str {
        &self.name
    }

    /// Flatten the text parts of every document into one batch and make a
    /// single embeddings call. Non-text parts are skipped; the vendor only
    /// embeds text.
    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError> {
        let mut input = Vec::new();
        for document in &request.documents {
            input.extend(document.texts().map(str::to_string));
        }

        let wire_request = wire::EmbeddingRequest {
            input,
            model: self.name.clone(),
        };

        tracing::debug!(model = %self.name, batch = wire_request.input.len(), "sending embeddings request");
        let mut wire_response = self.client.create_embeddings(&wire_request).await?;

        // The vendor is not obliged to return vectors in input order.
        wire_response.data.sort_by_key(|embedding| embedding.index);

        let embeddings = wire_response
            .data
            .into_iter()
            .map(|embedding| DocumentEmbedding {
                embedding: embedding.embedding,
            })
            .collect();

        Ok(EmbedResponse { embeddings })
    }
}
