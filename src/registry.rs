//! Host-owned registry of models and embedders.
//!
//! The registry is a plain value: the host constructs one, hands it to each
//! plugin's `init` to populate, and decides for itself how to share it
//! afterwards (typically behind an `Arc` once registration is done, since
//! lookups take `&self`). There is deliberately no process-global instance;
//! a plugin registers into whatever registry it is given.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::model::{
    EmbedRequest, EmbedResponse, GenerateRequest, GenerateResponse, GenerateResponseChunk,
};

/// Callback invoked with response increments during streamed generation.
///
/// Accepted everywhere, driven nowhere yet: providers that grow streaming
/// support will start calling it without a signature change.
pub type StreamingCallback = dyn Fn(GenerateResponseChunk) -> Result<(), LlmError> + Send + Sync;

/// What a model can do. Hosts consult this before routing a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelCapabilities {
    /// Accepts multi-message conversation history.
    pub multiturn: bool,
    /// Accepts tool definitions and emits tool calls.
    pub tools: bool,
    /// Honors a system message.
    pub system_role: bool,
    /// Accepts media parts in user messages.
    pub media: bool,
}

impl ModelCapabilities {
    /// Text-only chat models: conversation, tools and system role, no media.
    pub const BASIC_TEXT: Self = Self {
        multiturn: true,
        tools: true,
        system_role: true,
        media: false,
    };

    /// Multimodal chat models: everything in [`Self::BASIC_TEXT`] plus media
    /// input.
    pub const MULTIMODAL: Self = Self {
        multiturn: true,
        tools: true,
        system_role: true,
        media: true,
    };
}

/// Registration metadata for a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    /// Human-readable label, e.g. `"OpenAI - gpt-4o"`.
    pub label: String,
    /// Capability descriptor.
    pub supports: ModelCapabilities,
}

/// A registered generative model.
#[async_trait]
pub trait Model: Send + Sync {
    /// Bare model name, without the provider prefix.
    fn name(&self) -> &str;

    /// Registration metadata.
    fn info(&self) -> &ModelInfo;

    /// Run one generation call. The callback is reserved for streamed
    /// delivery and may be ignored by providers without streaming support.
    async fn generate(
        &self,
        request: GenerateRequest,
        callback: Option<&StreamingCallback>,
    ) -> Result<GenerateResponse, LlmError>;
}

/// A registered embedder.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Bare embedder name, without the provider prefix.
    fn name(&self) -> &str;

    /// Embed a batch of documents.
    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError>;
}

/// Model and embedder lookup table, keyed `"provider/name"`.
#[derive(Default)]
pub struct Registry {
    models: HashMap<String, Arc<dyn Model>>,
    embedders: HashMap<String, Arc<dyn Embedder>>,
}

fn key(provider: &str, name: &str) -> String {
    format!("{provider}/{name}")
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under `provider/name`, replacing any previous entry
    /// with the same key.
    pub fn register_model(&mut self, provider: &str, model: Arc<dyn Model>) {
        self.models.insert(key(provider, model.name()), model);
    }

    /// Register an embedder under `provider/name`, replacing any previous
    /// entry with the same key.
    pub fn register_embedder(&mut self, provider: &str, embedder: Arc<dyn Embedder>) {
        self.embedders
            .insert(key(provider, embedder.name()), embedder);
    }

    /// Look up a model. `None` when it was never registered.
    pub fn lookup_model(&self, provider: &str, name: &str) -> Option<Arc<dyn Model>> {
        self.models.get(&key(provider, name)).cloned()
    }

    /// Look up an embedder. `None` when it was never registered.
    pub fn lookup_embedder(&self, provider: &str, name: &str) -> Option<Arc<dyn Embedder>> {
        self.embedders.get(&key(provider, name)).cloned()
    }

    /// Whether a model is registered.
    pub fn is_defined_model(&self, provider: &str, name: &str) -> bool {
        self.models.contains_key(&key(provider, name))
    }

    /// Whether an embedder is registered.
    pub fn is_defined_embedder(&self, provider: &str, name: &str) -> bool {
        self.embedders.contains_key(&key(provider, name))
    }

    /// All registered model keys, sorted.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    /// All registered embedder keys, sorted.
    pub fn embedder_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.embedders.keys().cloned().collect();
        names.sort();
        names
    }
}
