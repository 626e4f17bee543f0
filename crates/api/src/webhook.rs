use crate::{fetch::Fetcher, quiz};
use http_body_util::Full;
use hyper::{
    body::Bytes,
    header::{HeaderValue, CONTENT_TYPE},
    Response, StatusCode,
};
use model::event::WebhookRequest;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Fixed acknowledgement body returned once every handler has settled.
const ACK: &[u8] = br#"{"message":"ok"}"#;

/// Fans the decoded batch out to one detached handler per event, joins them
/// all, and acknowledges the batch regardless of per-event outcomes.
pub async fn try_respond(
    body: &[u8],
    fetcher: &Arc<Fetcher>,
) -> Result<Response<Full<Bytes>>, StatusCode> {
    let WebhookRequest { events } =
        serde_json::from_slice(body).map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut handlers = JoinSet::new();
    for event in events {
        let fetcher = fetcher.clone();
        handlers.spawn(async move { quiz::try_reply(&fetcher, event).await });
    }

    let (mut succeeded, mut failed) = (0usize, 0usize);
    while let Some(settled) = handlers.join_next().await {
        match settled {
            Ok(Ok(())) => succeeded += 1,
            Ok(Err(err)) => {
                failed += 1;
                log::error!("Failed to handle webhook event: {err}.");
            }
            Err(err) => {
                failed += 1;
                log::error!("Webhook event handler panicked: {err}.");
            }
        }
    }
    log::info!("Webhook batch settled: {succeeded} succeeded, {failed} failed.");

    let mut res = Response::new(Full::new(Bytes::from_static(ACK)));
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json")).is_none());
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::{try_respond, Arc, Fetcher, StatusCode, CONTENT_TYPE};
    use http_body_util::BodyExt;

    fn fetcher() -> Arc<Fetcher> {
        Arc::new(Fetcher::new(String::from("token"), String::from("key")))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn acknowledges_empty_batch() {
        let res = try_respond(br#"{"events":[]}"#, &fetcher()).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
        let body = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), br#"{"message":"ok"}"#);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn acknowledges_batch_of_skipped_events() {
        // Neither the follow event nor the image message reaches the network.
        let body = br#"{"events":[{"type":"follow","replyToken":"R1"},{"type":"message","replyToken":"R2","message":{"type":"image","id":"1"}}]}"#;
        let res = try_respond(body, &fetcher()).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejects_malformed_bodies() {
        assert_eq!(try_respond(b"not json", &fetcher()).await.unwrap_err(), StatusCode::BAD_REQUEST);
        assert_eq!(
            try_respond(br#"{"destination":"U1"}"#, &fetcher()).await.unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }
}
