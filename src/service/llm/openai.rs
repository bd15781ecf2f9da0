//! Thin wrapper around async-openai for OpenAI LLM calls.

use std::sync::Arc;

use crate::base::{config::Config, types::Res};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    /// Creates a new OpenAI LLM client.
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    model: String,
    persona_directive: String,
    temperature: f32,
}

impl OpenAiLlmClient {
    pub fn new(config: &Config) -> Self {
        let cfg = OpenAIConfig::new().with_api_key(config.openai_api_key.clone());

        Self {
            client: Client::with_config(cfg),
            model: config.openai_model.clone(),
            persona_directive: config.persona_directive.clone(),
            temperature: config.openai_temperature,
        }
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    /// Generate a reply from the persona directive and one user message.
    #[instrument(skip_all)]
    async fn generate_reply(&self, user_text: &str) -> Res<String> {
        debug!("Generating reply with persona directive and user message");

        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(self.persona_directive.clone()),
                name: Some("System".to_string()),
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(user_text.to_string()),
                name: Some("User".to_string()),
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default().model(&self.model).messages(messages).temperature(self.temperature).build()?;

        let response = self.client.chat().create(request).await?;
        let content = response.choices.first().and_then(|choice| choice.message.content.clone());

        content.ok_or_else(|| anyhow::anyhow!("Completion response contained no message content."))
    }
}
