use tracing::{error, instrument, warn};

use crate::{
    base::{
        config::Config,
        types::{InboundEvent, Void},
    },
    service::{chat::ChatClient, llm::LlmClient},
};

/// Process one webhook event, isolating its failures from sibling events.
///
/// Any error from the inner pipeline (a missing reply token, a delivery
/// failure) is logged here and goes no further, so one event can never
/// abort the rest of its batch.
#[instrument(skip_all)]
pub async fn handle_webhook_event(event: InboundEvent, config: &Config, llm: &LlmClient, chat: &ChatClient) {
    // Process the event.
    let result = handle_webhook_event_internal(event, config, llm, chat).await;

    // Log any errors.
    if let Err(err) = &result {
        error!("Error while handling webhook event: {}", err);
    }
}

#[instrument(skip_all)]
async fn handle_webhook_event_internal(event: InboundEvent, config: &Config, llm: &LlmClient, chat: &ChatClient) -> Void {
    // Only text messages get a reply; every other event kind is silently skipped.

    if event.event_type != "message" {
        return Ok(());
    }

    let Some(message) = event.message else {
        return Ok(());
    };

    if message.message_type != "text" {
        return Ok(());
    }

    let Some(text) = message.text else {
        return Ok(());
    };

    // A text message without a reply token cannot be answered.
    let Some(reply_token) = event.reply_token else {
        return Err(anyhow::anyhow!("Text message event is missing a reply token."));
    };

    // Call the LLM with the user's message; on failure, fall back to the
    // static apology so the user always receives a response.

    let reply_text = match llm.generate_reply(&text).await {
        Ok(generated) => generated,
        Err(err) => {
            warn!("Reply generation failed, using fallback text: {}", err);
            config.fallback_text.clone()
        }
    };

    // Deliver the reply to the originating conversation.

    chat.reply(&reply_token, &reply_text).await?;

    Ok(())
}
