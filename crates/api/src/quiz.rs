use crate::{error, fetch::Fetcher};
use model::{
    event::{Event, Message, MessageEvent},
    message::{OutboundMessage, ReplyRequest},
    quiz::QuizPayload,
};

const COMPLETION_MODEL: &str = "gpt-4o";

/// Substitute content when the completion API yields nothing usable.
const GENERATION_FAILED: &str = "生成に失敗しました。";

const PROMPT: &str = r#"あなたはアニメや小説に詳しいクイズマスターです。次の条件を満たすクイズ問題を1問生成してください。

### 条件
1. 問題は簡潔に、物語のあらすじを説明する形にしてください。
2. 正解のタイトルをフルで指定してください。
3. 一般的に使われている略称（例: 「転スラ」「このすば」など）があれば、リストで出力してください。
4. 出力形式は以下の通りにしてください。

### 出力フォーマット（JSON）
{
  "question": "ここに問題文を記述",
  "answer": "ここに正解のフルタイトルを記述",
  "accepted_aliases": ["略称1", "略称2"]
}
"#;

/// Handles one webhook event. Anything but a text message is skipped; for
/// text messages, the completion API is asked for a quiz and the formatted
/// result is sent back through the platform.
///
/// Completion failures are recovered locally so the user still receives a
/// reply; a failure while sending that reply propagates to the dispatcher.
pub async fn try_reply(fetcher: &Fetcher, event: Event) -> error::Result<()> {
    let Event::Message(MessageEvent { reply_token, message }) = event else {
        return Ok(());
    };

    let Message::Text { .. } = message else {
        return Ok(());
    };

    let content = match fetcher.create_completion(&completion_request()).await {
        Ok(completion) => completion.into_content(),
        Err(err) => {
            log::error!("Quiz completion request failed: {err}.");
            None
        }
    };

    let content = content.unwrap_or_else(|| String::from(GENERATION_FAILED));
    let payload = parse_payload(&content);

    let reply = ReplyRequest {
        reply_token,
        messages: vec![OutboundMessage::Text { text: payload.to_reply_text() }],
    };
    fetcher.send_reply(&reply).await
}

/// Fixed completion request: a single user-role prompt constrained to the
/// quiz object schema.
fn completion_request() -> serde_json::Value {
    serde_json::json!({
        "model": COMPLETION_MODEL,
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": "issue",
                "schema": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "answer": { "type": "string" },
                        "accepted_aliases": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["question", "answer", "accepted_aliases"]
                }
            }
        },
        "messages": [{ "role": "user", "content": PROMPT }]
    })
}

/// Decodes the model output, substituting the fixed fallback when it is not
/// valid quiz JSON. Never fails.
fn parse_payload(content: &str) -> QuizPayload {
    match serde_json::from_str(content) {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Cannot parse completion content as a quiz: {err}.");
            QuizPayload::fallback()
        }
    }
}
