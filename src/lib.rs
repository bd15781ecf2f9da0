//! Library root for `soi-bot`.
//!
//! Soi-bot is an OpenAI-powered childcare-support assistant for LINE designed to:
//! - Receive message events from the LINE Messaging API webhook
//! - Generate warm, empathetic replies in the "Soi-chan" persona
//! - Deliver each reply back to the originating conversation
//! - Fall back to a fixed apology whenever reply generation fails
//!
//! The bot integrates with LINE for chat and OpenAI for generated replies.
//! The architecture is built around extensible traits that allow for
//! different implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod server;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the soi-bot runtime:
/// - Creates the runtime context with the LLM and chat clients
/// - Starts the webhook server that processes inbound events
pub async fn start(config: Config) -> Void {
    info!("Starting soi-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config);

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
