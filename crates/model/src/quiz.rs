use alloc::{string::String, vec::Vec};
use serde::Deserialize;

/// Structured quiz the completion model is asked to produce.
#[derive(Deserialize)]
pub struct QuizPayload {
    /// Question text summarizing the plot of the work.
    pub question: String,
    /// Full, unambiguous title of the correct answer.
    pub answer: String,
    /// Commonly used short forms of `answer`, possibly empty.
    pub accepted_aliases: Vec<String>,
}

impl QuizPayload {
    /// Fixed substitute for model output that cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            question: String::from("応答を解析できませんでした。もう一度試してください。"),
            answer: String::new(),
            accepted_aliases: Vec::new(),
        }
    }

    /// Renders the reply text shown to the user.
    pub fn to_reply_text(&self) -> String {
        let aliases = if self.accepted_aliases.is_empty() {
            String::from("なし")
        } else {
            self.accepted_aliases.join(", ")
        };
        alloc::format!("問題: {}\n\n正解: {}\n\n略称: {aliases}", self.question, self.answer)
    }
}
