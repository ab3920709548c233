use thiserror::Error;

/// Failure talking to the external search/catalog service.
///
/// Surfaced to the page as a non-fatal message; never mixed up with an
/// empty (but successful) search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
    #[error("could not set up backend client: {0}")]
    Setup(String),
    #[error("could not connect to backend")]
    Connection,
    #[error("backend request timed out")]
    Timeout,
    #[error("i/o error while talking to backend")]
    Io,
    #[error("backend returned {code}{}", detail_suffix(.detail))]
    Status { code: u16, detail: Option<String> },
    #[error("malformed backend response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransportError::Connection | TransportError::Timeout | TransportError::Io
        )
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail.as_deref() {
        Some(d) if !d.trim().is_empty() => format!(": {d}"),
        _ => String::new(),
    }
}
