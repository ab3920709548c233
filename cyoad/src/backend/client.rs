use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use cyoa_api::limits::enforce_max_message_size;
use cyoa_api::TransportError;

/// JSON GET client for the search service, with bounded retries.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    pub retry_backoff: Duration,
}

impl HttpClient {
    /// `req_timeout` covers the whole exchange: connect, headers and body.
    pub fn new(req_timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(req_timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;
        Ok(Self { inner, retry_backoff: Duration::from_millis(100) })
    }

    pub async fn get_json_with_retries<T: DeserializeOwned>(
        &self,
        url: &url::Url,
        retries: usize,
    ) -> Result<T, TransportError> {
        let mut last_err = None;
        for attempt in 0..=retries {
            match self.get_json(url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() => {
                    debug!(%url, attempt, error = %e, "[backend] request failed");
                    last_err = Some(e);
                    if attempt < retries {
                        tokio::time::sleep(self.retry_backoff).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_err.unwrap_or(TransportError::Connection))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &url::Url) -> Result<T, TransportError> {
        let resp = self
            .inner
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if let Some(len) = resp.content_length() {
            enforce_max_message_size(usize::try_from(len).unwrap_or(usize::MAX))
                .map_err(|_| TransportError::Io)?;
        }
        if !status.is_success() {
            let body = resp.bytes().await.map_err(classify)?;
            let detail = detail_from_body(&body);
            warn!(code = status.as_u16(), detail = detail.as_deref().unwrap_or(""), "[backend] error status");
            return Err(TransportError::Status { code: status.as_u16(), detail });
        }
        debug!(%url, code = status.as_u16(), "[backend] response");
        resp.json::<T>().await.map_err(classify)
    }
}

/// The service reports failures as `{"detail": ...}`; validation errors carry
/// a structured list instead of a string.
pub fn detail_from_body(body: &[u8]) -> Option<String> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    let detail = value.get("detail")?;
    Some(match detail.as_str() {
        Some(s) => s.to_string(),
        None => detail.to_string(),
    })
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connection
    } else if e.is_decode() {
        TransportError::Decode(decode_message(&e))
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Io
    }
}

// reqwest wraps the serde error; its text names the line and column
fn decode_message(e: &reqwest::Error) -> String {
    match std::error::Error::source(e) {
        Some(src) => src.to_string(),
        None => e.to_string(),
    }
}
