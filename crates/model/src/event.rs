use alloc::{string::String, vec::Vec};
use serde::Deserialize;

/// Inbound webhook body posted by the messaging platform.
#[derive(Deserialize)]
pub struct WebhookRequest {
    /// Batch of events to be dispatched independently.
    pub events: Vec<Event>,
}

/// One unit of activity reported by the platform webhook.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// A user sent a message to the bot.
    Message(MessageEvent),
    /// Any other event kind (follow, unfollow, postback, and so on).
    #[serde(other)]
    Unsupported,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Short-lived credential required to reply to this specific event.
    pub reply_token: String,
    pub message: Message,
}

/// Content of an inbound message.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Text { text: String },
    /// Non-text content (images, stickers, video, and so on).
    #[serde(other)]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::{Event, Message, WebhookRequest};

    #[test]
    fn decodes_text_message_event() {
        let event: Event = serde_json::from_str(
            r#"{"type":"message","replyToken":"R1","message":{"type":"text","id":"325708","text":"こんにちは"}}"#,
        )
        .unwrap();
        let Event::Message(event) = event else {
            panic!("expected a message event");
        };
        assert_eq!(event.reply_token, "R1");
        let Message::Text { text } = event.message else {
            panic!("expected text content");
        };
        assert_eq!(text, "こんにちは");
    }

    #[test]
    fn skips_non_text_message_content() {
        let event: Event = serde_json::from_str(
            r#"{"type":"message","replyToken":"R2","message":{"type":"image","id":"325709"}}"#,
        )
        .unwrap();
        let Event::Message(event) = event else {
            panic!("expected a message event");
        };
        assert!(matches!(event.message, Message::Unsupported));
    }

    #[test]
    fn skips_unrecognized_event_kinds() {
        let follow: Event =
            serde_json::from_str(r#"{"type":"follow","replyToken":"R3"}"#).unwrap();
        assert!(matches!(follow, Event::Unsupported));

        let postback: Event =
            serde_json::from_str(r#"{"type":"postback","postback":{"data":"x"}}"#).unwrap();
        assert!(matches!(postback, Event::Unsupported));
    }

    #[test]
    fn decodes_mixed_batches() {
        let WebhookRequest { events } = serde_json::from_str(
            r#"{"destination":"U1","events":[{"type":"message","replyToken":"R1","message":{"type":"text","text":"hi"}},{"type":"unfollow"}]}"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Event::Message(_)));
        assert!(matches!(events[1], Event::Unsupported));
    }

    #[test]
    fn rejects_body_without_events() {
        assert!(serde_json::from_str::<WebhookRequest>(r#"{"destination":"U1"}"#).is_err());
        assert!(serde_json::from_str::<WebhookRequest>("{}").is_err());
    }
}
