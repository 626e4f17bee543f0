use crate::error;
use model::{completion::CompletionResponse, message::ReplyRequest};

const COMPLETION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

/// Outbound HTTP client bundled with the two credentials shared by all
/// event handlers.
pub struct Fetcher {
    client: reqwest::Client,
    channel_access_token: Box<str>,
    openai_api_key: Box<str>,
}

impl Fetcher {
    pub fn new(channel_access_token: String, openai_api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            channel_access_token: channel_access_token.into_boxed_str(),
            openai_api_key: openai_api_key.into_boxed_str(),
        }
    }

    /// Requests a chat completion from the model provider.
    pub async fn create_completion(&self, body: &serde_json::Value) -> error::Result<CompletionResponse> {
        let response = self
            .client
            .post(COMPLETION_ENDPOINT)
            .bearer_auth(&*self.openai_api_key)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        let completion = serde_json::from_slice(&bytes)?;
        Ok(completion)
    }

    /// Sends reply messages through the platform's reply endpoint.
    pub async fn send_reply(&self, body: &ReplyRequest) -> error::Result<()> {
        self.client
            .post(REPLY_ENDPOINT)
            .bearer_auth(&*self.channel_access_token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
