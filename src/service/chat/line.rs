//! Chat service integration for soi-bot.
//!
//! This module provides the LINE Messaging API implementation of the
//! `GenericChatClient` trait:
//! - Verifying webhook signatures against the channel secret
//! - Delivering reply messages addressed by reply tokens

use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{ReplyMessage, Res, Void},
};

use super::{ChatClient, GenericChatClient};

/// LINE Messaging API reply endpoint.
const LINE_REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

// Extra methods on `ChatClient` applied by the LINE implementation.

impl ChatClient {
    /// Creates a new LINE chat client.
    pub fn line(config: &Config) -> Self {
        let client = LineChatClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Helpers.

/// Compute the webhook signature for a raw body: base64 of HMAC-SHA256
/// keyed by the channel secret.
pub fn compute_signature(channel_secret: &str, body: &[u8]) -> Res<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()).map_err(|err| anyhow::anyhow!("Failed to create HMAC: {}", err))?;
    mac.update(body);

    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

// Structs.

/// Body of a reply request: one reply token plus the messages it addresses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<ReplyMessage>,
}

/// LINE chat client implementation.
#[derive(Clone)]
struct LineChatClient {
    channel_secret: String,
    access_token: String,
    client: reqwest::Client,
}

impl LineChatClient {
    /// Create a new LINE chat client.
    pub fn new(config: &Config) -> Self {
        Self {
            channel_secret: config.line_channel_secret.clone(),
            access_token: config.line_channel_access_token.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenericChatClient for LineChatClient {
    fn verify_signature(&self, body: &[u8], signature: &str) -> bool {
        // The header value is the base64 of the HMAC; anything undecodable
        // cannot match.
        let Ok(provided) = BASE64_STANDARD.decode(signature) else {
            return false;
        };

        let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(self.channel_secret.as_bytes()) else {
            return false;
        };
        mac.update(body);

        mac.verify_slice(&provided).is_ok()
    }

    #[instrument(skip(self, text))]
    async fn reply(&self, reply_token: &str, text: &str) -> Void {
        let request = ReplyRequest {
            reply_token,
            messages: vec![ReplyMessage::text(text)],
        };

        let response = self.client.post(LINE_REPLY_ENDPOINT).bearer_auth(&self.access_token).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Reply delivery failed: {status} {body}"));
        }

        debug!("Reply delivered");

        Ok(())
    }
}

// Tests.
