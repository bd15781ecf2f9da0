pub mod line;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat
/// platforms like LINE. Implementing this trait allows different chat
/// services to be used with soi-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Verify that an inbound webhook body was signed by the platform.
    ///
    /// Signature computation is byte-exact over the original payload, so
    /// this must be given the raw, unparsed request body.
    fn verify_signature(&self, body: &[u8], signature: &str) -> bool;

    /// Deliver one text reply addressed by an event's reply token.
    ///
    /// Reply tokens are single-use and time-limited by the platform;
    /// delivery after expiry fails and is not retried.
    async fn reply(&self, reply_token: &str, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
