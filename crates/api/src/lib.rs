mod error;
mod fetch;
mod quiz;
mod webhook;

pub use error::Error;

use fetch::Fetcher;
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Body, Bytes},
    header::{HeaderValue, CONTENT_TYPE},
    Method, Request, Response, StatusCode,
};
use std::sync::Arc;

/// Credentials required by the webhook service, supplied by the hosting
/// environment as opaque strings.
pub struct Config {
    /// Messaging-platform channel access token used to authorize replies.
    pub channel_access_token: String,
    /// API key for the completion provider.
    pub openai_api_key: String,
}

/// Request handler owning the outbound client shared by all connections.
/// Clones share the same client and credentials.
#[derive(Clone)]
pub struct App {
    fetcher: Arc<Fetcher>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let Config { channel_access_token, openai_api_key } = config;
        Self { fetcher: Arc::new(Fetcher::new(channel_access_token, openai_api_key)) }
    }

    /// Routes one request, converting rejections into bodyless responses.
    pub async fn respond<B: Body>(&self, req: Request<B>) -> Response<Full<Bytes>> {
        match self.try_respond(req).await {
            Ok(res) => res,
            Err(code) => {
                let mut res = Response::new(Full::new(Bytes::new()));
                *res.status_mut() = code;
                res
            }
        }
    }

    async fn try_respond<B: Body>(&self, req: Request<B>) -> Result<Response<Full<Bytes>>, StatusCode> {
        match (req.method(), req.uri().path()) {
            (&Method::POST, "/api/webhook") => {
                let body = req
                    .into_body()
                    .collect()
                    .await
                    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
                    .to_bytes();
                webhook::try_respond(&body, &self.fetcher).await
            }
            // Liveness response on every other GET.
            (&Method::GET, _) => {
                let mut res = Response::new(Full::new(Bytes::from_static(b"Hello World!")));
                assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("text/plain")).is_none());
                Ok(res)
            }
            _ => Err(StatusCode::NOT_FOUND),
        }
    }
}
