//! Event handling for soi-bot.
//!
//! This module provides functionality for handling webhook events:
//! - Filtering inbound events down to text messages
//! - Coordinating the reply flow between services (LLM, chat)
//! - Substituting the fallback text when reply generation fails

pub mod webhook_event;
