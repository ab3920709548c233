//! Access to the external search/catalog service.
//!
//! The service owns indexing, ranking and summaries; this module only knows
//! its three read endpoints.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::de::DeserializeOwned;

use cyoa_api::{CatalogEntry, CatalogPayload, SearchQuery, SearchResponse, Stats, TransportError};

pub mod client;

use client::HttpClient;

pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, TransportError>> + Send + 'a>>;

/// Read side of the search/catalog service.
pub trait Backend: Send + Sync {
    fn stats(&self) -> BackendFuture<'_, Stats>;
    fn games(&self) -> BackendFuture<'_, Vec<CatalogEntry>>;
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BackendFuture<'a, SearchResponse>;
}

pub struct HttpBackend {
    base: url::Url,
    client: HttpClient,
    retries: usize,
}

impl HttpBackend {
    pub fn new(base: &str, client: HttpClient, retries: usize) -> Result<Self, TransportError> {
        let mut base =
            url::Url::parse(base).map_err(|e| TransportError::InvalidUrl(format!("{base}: {e}")))?;
        // keep any path prefix when joining endpoint names
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client, retries })
    }

    pub fn from_config(cfg: &crate::config::BackendConfig) -> Result<Self, TransportError> {
        let mut client = HttpClient::new(Duration::from_millis(cfg.timeout_ms))?;
        client.retry_backoff = Duration::from_millis(cfg.backoff_ms);
        Self::new(&cfg.base_url, client, cfg.retries)
    }

    pub fn base_url(&self) -> &url::Url {
        &self.base
    }

    pub fn endpoint(&self, name: &str) -> Result<url::Url, TransportError> {
        self.base
            .join(name)
            .map_err(|e| TransportError::InvalidUrl(format!("{name}: {e}")))
    }

    pub fn search_url(&self, query: &SearchQuery) -> Result<url::Url, TransportError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", &query.text)
            .append_pair("mode", query.mode.as_str());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: url::Url) -> Result<T, TransportError> {
        self.client.get_json_with_retries(&url, self.retries).await
    }
}

impl Backend for HttpBackend {
    fn stats(&self) -> BackendFuture<'_, Stats> {
        Box::pin(async move { self.get_json(self.endpoint("stats")?).await })
    }

    fn games(&self) -> BackendFuture<'_, Vec<CatalogEntry>> {
        Box::pin(async move {
            let payload: CatalogPayload = self.get_json(self.endpoint("games")?).await?;
            Ok(payload.into_entries())
        })
    }

    fn search<'a>(&'a self, query: &'a SearchQuery) -> BackendFuture<'a, SearchResponse> {
        Box::pin(async move { self.get_json(self.search_url(query)?).await })
    }
}
