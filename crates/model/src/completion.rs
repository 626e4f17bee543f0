use alloc::{string::String, vec::Vec};
use serde::Deserialize;

/// The consumed slice of a chat completion response; every other field the
/// API returns is ignored.
#[derive(Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize)]
pub struct ChoiceMessage {
    /// Generated text. May be absent or `null`.
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice, if the API produced one.
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|choice| choice.message.content)
    }
}
