pub mod openai;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Res;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the core functionality for interacting with large
/// language models. Implementing this trait allows different LLM providers
/// to be used with soi-bot.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate a reply to one inbound user message.
    ///
    /// The persona directive is sent as the system message and the user
    /// text as the sole conversational turn; no history is carried between
    /// invocations. Errors are returned, never panicked — the caller owns
    /// the fallback policy.
    async fn generate_reply(&self, user_text: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
