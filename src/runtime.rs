//! Runtime services and shared state for soi-bot.

use tracing::{debug, instrument};

use crate::{
    base::{config::Config, types::Void},
    server,
    service::{chat::ChatClient, llm::LlmClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the LLM client, chat client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The LINE client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Self {
        // Missing credentials are not fatal here; the external APIs reject
        // the first call instead.
        debug!(
            "Credentials present - LINE secret: {}, LINE token: {}, OpenAI key: {}",
            !config.line_channel_secret.is_empty(),
            !config.line_channel_access_token.is_empty(),
            !config.openai_api_key.is_empty()
        );

        // Initialize the LLM client.
        let llm = LlmClient::openai(&config);

        // Initialize the LINE client.
        let chat = ChatClient::line(&config);

        Self { config, llm, chat }
    }

    pub async fn start(&self) -> Void {
        server::serve(self.clone()).await
    }
}
