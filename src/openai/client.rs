//! Thin HTTP client for the OpenAI REST API.
//!
//! Covers exactly the two endpoints the plugin needs: chat completions and
//! embeddings. Auth, URL joining, and error classification live here so the
//! model implementations stay pure data translation.

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::LlmError;
use crate::openai::wire::{
    ChatCompletion, ChatCompletionRequest, EmbeddingRequest, EmbeddingResponse,
};

/// Default API endpoint; overridable for proxies and compatible servers.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client holding credentials and the endpoint base URL.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// API key for authentication
    api_key: secrecy::SecretString,
    /// Base URL for the API
    base_url: String,
    /// HTTP client for making requests
    http_client: Client,
}

impl OpenAiClient {
    /// Create a client with the given key and base URL.
    pub fn new(api_key: secrecy::SecretString, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build request headers
    fn build_headers(&self) -> Result<reqwest::header::HeaderMap, LlmError> {
        let mut headers = reqwest::header::HeaderMap::new();

        let auth_value = format!("Bearer {}", self.api_key.expose_secret());
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&auth_value)
                .map_err(|e| LlmError::ConfigurationError(format!("Invalid API key: {e}")))?,
        );

        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// POST a JSON body and decode a JSON reply, mapping non-2xx statuses to
    /// [`LlmError::ApiError`].
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, LlmError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.build_url(path);
        let headers = self.build_headers()?;

        tracing::debug!(url = %url, "sending request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(format!("Failed to send request: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| LlmError::HttpError(format!("Failed to read response: {e}")))?;

        tracing::debug!(url = %url, status = %status.as_u16(), "response received");

        if !status.is_success() {
            return Err(LlmError::api_error(
                status.as_u16(),
                format!("Request failed with status {status}: {response_text}"),
            ));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| LlmError::JsonError(format!("Failed to parse response: {e}")))
    }

    /// Call `POST /chat/completions`.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, LlmError> {
        self.post_json("chat/completions", request).await
    }

    /// Call `POST /embeddings`.
    pub async fn create_embeddings(
        &self,
        request: &EmbeddingRequest,
    ) -> Result<EmbeddingResponse, LlmError> {
        self.post_json("embeddings", request).await
    }
}
