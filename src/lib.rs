//! Provider-agnostic generation model with an OpenAI chat-completion plugin.
//!
//! This crate is a data-translation adapter. It defines a small
//! provider-agnostic request/response model for text generation
//! ([`model`]), a registry of model and embedder handles ([`registry`]),
//! and an OpenAI plugin ([`openai`]) that maps the generic shapes onto the
//! vendor's chat-completion API: roles, multi-part content, tool calls,
//! sampling parameters, output formats, finish reasons and usage counters.
//!
//! # Quick start
//!
//! ```no_run
//! use hargow::model::{GenerateRequest, Message};
//! use hargow::openai::{OpenAiConfig, OpenAiPlugin};
//! use hargow::registry::{Model, Registry};
//!
//! # async fn run() -> Result<(), hargow::LlmError> {
//! let mut registry = Registry::new();
//!
//! // Reads OPENAI_API_KEY unless a key is set on the config.
//! let plugin = OpenAiPlugin::new(OpenAiConfig::new());
//! plugin.init(&mut registry)?;
//!
//! let model = hargow::openai::model(&registry, "gpt-4o").unwrap();
//! let request = GenerateRequest::new(vec![Message::user_text("Tell a joke about dogs.")]);
//! let response = model.generate(request, None).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//!
//! - The generic tool-call shape carries no vendor call id, so the tool
//!   *name* stands in for it on the wire. Two concurrent calls to the same
//!   tool within one turn are therefore not distinguishable.
//! - Sampling parameters use zero-means-unset semantics; an explicit
//!   `temperature: 0.0` cannot be expressed.
//! - Generate calls accept a streaming callback, but no provider invokes it
//!   yet; responses are always unary.

pub mod error;
pub mod model;
pub mod openai;
pub mod registry;

pub use error::LlmError;
pub use registry::Registry;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::error::LlmError;
    pub use crate::model::{
        Candidate, Document, EmbedRequest, EmbedResponse, FinishReason, GenerateRequest,
        GenerateResponse, GenerationConfig, Message, OutputConfig, OutputFormat, Part, Role,
        ToolDefinition,
    };
    pub use crate::openai::{OpenAiConfig, OpenAiPlugin};
    pub use crate::registry::{Embedder, Model, ModelCapabilities, ModelInfo, Registry};
}
