//! OpenAI provider plugin.
//!
//! Registers chat-completion models and embedders with a host [`Registry`]
//! and owns the conversion between the generic generation types and the
//! vendor's chat-completion wire format.
//!
//! The plugin is a two-state machine: a fresh value is **uninitialized**;
//! [`OpenAiPlugin::init`] resolves credentials, builds the HTTP client and
//! registers the known catalog, moving it to **initialized**. The transition
//! happens at most once per value. Calling `init` twice, or `define_model` /
//! `define_embedder` before `init`, is a programming error and panics.

pub mod chat;
pub mod client;
pub mod convert;
pub mod embed;
pub mod models;
pub mod translate;
pub mod variant;
pub mod wire;

use std::sync::{Arc, Mutex, MutexGuard};

use secrecy::SecretString;

use crate::error::LlmError;
use crate::registry::{Embedder, Model, ModelCapabilities, ModelInfo, Registry};

pub use chat::ChatModel;
pub use client::{DEFAULT_BASE_URL, OpenAiClient};
pub use convert::convert_request;
pub use embed::EmbeddingModel;
pub use translate::translate_response;
pub use variant::{ApiVariant, CurrentCompletionsApi, LegacyCompletionsApi};

use models::{KNOWN_EMBEDDERS, known_capabilities, known_models};

/// Provider id; registry keys take the form `"openai/<name>"`.
pub const PROVIDER: &str = "openai";

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const LABEL_PREFIX: &str = "OpenAI";

/// Plugin configuration.
#[derive(Debug, Clone, Default)]
pub struct OpenAiConfig {
    /// API key. When unset, `init` falls back to [`API_KEY_ENV`].
    pub api_key: Option<SecretString>,
    /// Endpoint override for proxies and API-compatible servers. Defaults to
    /// [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key explicitly instead of reading the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Point the plugin at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// OpenAI provider plugin. See the module docs for the lifecycle.
pub struct OpenAiPlugin {
    config: OpenAiConfig,
    variant: Arc<dyn ApiVariant>,
    state: Mutex<PluginState>,
}

/// Registration state, written exactly once by `init`.
#[derive(Default)]
struct PluginState {
    /// The shared HTTP client; `Some` doubles as the initialized flag.
    client: Option<Arc<OpenAiClient>>,
}

impl OpenAiPlugin {
    /// Create an uninitialized plugin.
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            variant: Arc::new(CurrentCompletionsApi),
            state: Mutex::new(PluginState::default()),
        }
    }

    /// Shape requests for a different completions API generation.
    pub fn with_variant(mut self, variant: Arc<dyn ApiVariant>) -> Self {
        self.variant = variant;
        self
    }

    fn state(&self) -> MutexGuard<'_, PluginState> {
        // The misuse panics below fire while the lock is held. The state they
        // leave behind is still consistent, so recover from poisoning instead
        // of cascading panics into every later caller.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Initialize the plugin: resolve the API key, build the HTTP client and
    /// register the known model and embedder catalog with `registry`.
    ///
    /// Returns a configuration error when no API key can be resolved.
    ///
    /// # Panics
    ///
    /// Panics when called more than once on the same plugin value.
    pub fn init(&self, registry: &mut Registry) -> Result<(), LlmError> {
        let mut state = self.state();
        if state.client.is_some() {
            panic!("openai plugin already initialized");
        }

        let api_key = self.resolve_api_key()?;
        let base_url = self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = Arc::new(OpenAiClient::new(api_key, base_url));
        state.client = Some(client.clone());

        for (name, capabilities) in known_models() {
            define_chat_model(registry, &client, self.variant.clone(), name, capabilities);
        }
        for name in KNOWN_EMBEDDERS {
            define_embedding_model(registry, &client, name);
        }

        tracing::debug!(
            variant = %self.variant.id(),
            base_url = %client.base_url(),
            "openai plugin initialized"
        );
        Ok(())
    }

    fn resolve_api_key(&self) -> Result<SecretString, LlmError> {
        if let Some(api_key) = &self.config.api_key {
            return Ok(api_key.clone());
        }
        match std::env::var(API_KEY_ENV) {
            Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
            _ => Err(LlmError::ConfigurationError(format!(
                "OpenAI requires an API key, set via config or the {API_KEY_ENV} \
                 environment variable. You can get an API key at \
                 https://platform.openai.com/api-keys"
            ))),
        }
    }

    /// Register a chat model under the `openai` provider and return its
    /// handle.
    ///
    /// With `None` capabilities the known catalog decides; a name outside
    /// the catalog is then an error. Explicit capabilities register any
    /// name as-is.
    ///
    /// # Panics
    ///
    /// Panics when the plugin has not been initialized.
    pub fn define_model(
        &self,
        registry: &mut Registry,
        name: &str,
        capabilities: Option<ModelCapabilities>,
    ) -> Result<Arc<dyn Model>, LlmError> {
        let state = self.state();
        let Some(client) = state.client.clone() else {
            panic!("openai plugin init not called");
        };

        let capabilities = match capabilities {
            Some(capabilities) => capabilities,
            None => known_capabilities(name).ok_or_else(|| {
                LlmError::InvalidInput(format!(
                    "unknown model {name:?} and no capabilities provided"
                ))
            })?,
        };

        Ok(define_chat_model(
            registry,
            &client,
            self.variant.clone(),
            name,
            capabilities,
        ))
    }

    /// Register an embedder under the `openai` provider and return its
    /// handle.
    ///
    /// # Panics
    ///
    /// Panics when the plugin has not been initialized.
    pub fn define_embedder(
        &self,
        registry: &mut Registry,
        name: &str,
    ) -> Result<Arc<dyn Embedder>, LlmError> {
        let state = self.state();
        let Some(client) = state.client.clone() else {
            panic!("openai plugin init not called");
        };
        Ok(define_embedding_model(registry, &client, name))
    }
}

fn define_chat_model(
    registry: &mut Registry,
    client: &Arc<OpenAiClient>,
    variant: Arc<dyn ApiVariant>,
    name: &str,
    capabilities: ModelCapabilities,
) -> Arc<dyn Model> {
    let info = ModelInfo {
        label: format!("{LABEL_PREFIX} - {name}"),
        supports: capabilities,
    };
    let model: Arc<dyn Model> = Arc::new(ChatModel::new(name, info, client.clone(), variant));
    registry.register_model(PROVIDER, model.clone());
    model
}

fn define_embedding_model(
    registry: &mut Registry,
    client: &Arc<OpenAiClient>,
    name: &str,
) -> Arc<dyn Embedder> {
    let embedder: Arc<dyn Embedder> = Arc::new(EmbeddingModel::new(name, client.clone()));
    registry.register_embedder(PROVIDER, embedder.clone());
    embedder
}

/// Look up a registered `openai/` model.
pub fn model(registry: &Registry, name: &str) -> Option<Arc<dyn Model>> {
    registry.lookup_model(PROVIDER, name)
}

/// Look up a registered `openai/` embedder.
pub fn embedder(registry: &Registry, name: &str) -> Option<Arc<dyn Embedder>> {
    registry.lookup_embedder(PROVIDER, name)
}

/// Whether `name` is registered as an `openai/` model.
pub fn is_defined_model(registry: &Registry, name: &str) -> bool {
    registry.is_defined_model(PROVIDER, name)
}

/// Whether `name` is registered as an `openai/` embedder.
pub fn is_defined_embedder(registry: &Registry, name: &str) -> bool {
    registry.is_defined_embedder(PROVIDER, name)
}
