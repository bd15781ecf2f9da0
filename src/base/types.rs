//! Common result aliases and the webhook wire shapes.

use serde::{Deserialize, Serialize};

/// Application-wide error type.
pub type Err = anyhow::Error;
/// Application-wide result type.
pub type Res<T> = Result<T, Err>;
/// Result with no success value.
pub type Void = Res<()>;

/// Full webhook body posted by the LINE platform.
///
/// An absent `events` field is an empty batch, never an error.
#[derive(Debug, Deserialize)]
pub struct InboundPayload {
    /// The ordered batch of notifications in this delivery.
    #[serde(default)]
    pub events: Vec<InboundEvent>,
}

/// One notification from the LINE platform.
///
/// Only `type == "message"` events carry a `message`; the reply token is
/// absent on event kinds that cannot be replied to.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    /// Event kind (`message`, `follow`, `unfollow`, ...).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Message content, present only for `message` events.
    #[serde(default)]
    pub message: Option<EventMessage>,
    /// Single-use, time-limited handle that addresses a reply.
    #[serde(default)]
    pub reply_token: Option<String>,
}

/// Message content of a `message` event; `text` is present only for text messages.
#[derive(Debug, Deserialize)]
pub struct EventMessage {
    /// Media kind (`text`, `image`, `sticker`, ...).
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message text, for `text` messages.
    #[serde(default)]
    pub text: Option<String>,
}

/// Outbound message delivered via a reply token.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyMessage {
    /// Always `text` for this bot.
    #[serde(rename = "type")]
    pub message_type: String,
    /// The content to deliver.
    pub text: String,
}

impl ReplyMessage {
    /// A plain text reply.
    pub fn text(text: &str) -> Self {
        Self {
            message_type: "text".to_string(),
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_message_event() {
        let body = r#"{
            "destination": "U0000",
            "events": [
                {
                    "type": "message",
                    "replyToken": "abc123",
                    "source": { "type": "user", "userId": "U1111" },
                    "message": { "id": "444", "type": "text", "text": "こんにちは" }
                }
            ]
        }"#;

        let payload: InboundPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.events.len(), 1);

        let event = &payload.events[0];
        assert_eq!(event.event_type, "message");
        assert_eq!(event.reply_token.as_deref(), Some("abc123"));

        let message = event.message.as_ref().unwrap();
        assert_eq!(message.message_type, "text");
        assert_eq!(message.text.as_deref(), Some("こんにちは"));
    }

    #[test]
    fn missing_events_field_is_an_empty_batch() {
        let payload: InboundPayload = serde_json::from_str(r#"{"destination": "U0000"}"#).unwrap();
        assert!(payload.events.is_empty());
    }

    #[test]
    fn parses_non_message_event_without_message_or_token() {
        let body = r#"{"events": [{"type": "unfollow", "source": {"type": "user"}}]}"#;

        let payload: InboundPayload = serde_json::from_str(body).unwrap();
        let event = &payload.events[0];
        assert_eq!(event.event_type, "unfollow");
        assert!(event.message.is_none());
        assert!(event.reply_token.is_none());
    }

    #[test]
    fn parses_sticker_message_without_text() {
        let body = r#"{
            "events": [
                {
                    "type": "message",
                    "replyToken": "abc123",
                    "message": { "id": "444", "type": "sticker", "packageId": "1", "stickerId": "2" }
                }
            ]
        }"#;

        let payload: InboundPayload = serde_json::from_str(body).unwrap();
        let message = payload.events[0].message.as_ref().unwrap();
        assert_eq!(message.message_type, "sticker");
        assert!(message.text.is_none());
    }

    #[test]
    fn reply_message_serializes_with_type_tag() {
        let message = ReplyMessage::text("大丈夫だよ🌷");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "大丈夫だよ🌷");
    }
}
