//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default OpenAI model to use
fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default sampling temperature for the OpenAI model
fn default_openai_temperature() -> f32 {
    0.7
}

/// Default port for the webhook server
fn default_port() -> u16 {
    3000
}

/// Default persona directive for the completion client.
fn default_persona_directive() -> String {
    prompts::PERSONA_SYSTEM_DIRECTIVE.to_string()
}

/// Default fallback text sent when reply generation fails.
fn default_fallback_text() -> String {
    prompts::FALLBACK_TEXT.to_string()
}

/// Default empty credential.
///
/// Missing secrets are not a startup failure: the respective external API
/// rejects the first call instead.
fn default_credential() -> String {
    String::new()
}

/// Configuration for the soi-bot application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared inner configuration; `Config` clones are cheap handles to it.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The configuration values themselves, deserialized from the environment
/// and the optional config file.
#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// LINE channel secret used to verify webhook signatures (`LINE_CHANNEL_SECRET`).
    #[serde(default = "default_credential")]
    pub line_channel_secret: String,
    /// LINE channel access token used to deliver replies (`LINE_CHANNEL_ACCESS_TOKEN`).
    #[serde(default = "default_credential")]
    pub line_channel_access_token: String,
    /// OpenAI API key (`OPENAI_API_KEY`).
    #[serde(default = "default_credential")]
    pub openai_api_key: String,
    /// OpenAI model to use (`OPENAI_MODEL`).
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Sampling temperature to use for the OpenAI model (`OPENAI_TEMPERATURE`).
    /// Value between 0 and 2. Higher values like 0.8 make output more random,
    /// while lower values like 0.2 make it more focused and deterministic.
    #[serde(default = "default_openai_temperature")]
    pub openai_temperature: f32,
    /// Optional custom persona directive to override the default (`PERSONA_DIRECTIVE`).
    #[serde(default = "default_persona_directive")]
    pub persona_directive: String,
    /// Optional custom fallback text to override the default (`FALLBACK_TEXT`).
    #[serde(default = "default_fallback_text")]
    pub fallback_text: String,
    /// Port the webhook server listens on (`PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            line_channel_secret: default_credential(),
            line_channel_access_token: default_credential(),
            openai_api_key: default_credential(),
            openai_model: default_openai_model(),
            openai_temperature: default_openai_temperature(),
            persona_directive: default_persona_directive(),
            fallback_text: default_fallback_text(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, plus an optional TOML file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.openai_temperature < 0.0 || result.openai_temperature > 2.0 {
            return Err(anyhow::anyhow!("OpenAI temperature must be between 0 and 2."));
        }

        Ok(result)
    }
}
