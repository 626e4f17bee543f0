use alloc::{string::String, vec::Vec};
use serde::Serialize;

/// Outbound message attached to a reply.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text { text: String },
}

/// Body of the platform's reply endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    /// Token issued with the inbound event being answered.
    pub reply_token: String,
    pub messages: Vec<OutboundMessage>,
}

#[cfg(test)]
mod tests {
    use super::{OutboundMessage, ReplyRequest};
    use alloc::{string::String, vec};

    #[test]
    fn serializes_reply_body() {
        let reply = ReplyRequest {
            reply_token: String::from("R1"),
            messages: vec![OutboundMessage::Text { text: String::from("問題: Q") }],
        };
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({
                "replyToken": "R1",
                "messages": [{ "type": "text", "text": "問題: Q" }]
            })
        );
    }
}
