#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use cyoa_api::{
    CatalogEntry, GameId, MatchType, SearchQuery, SearchResponse, SearchResultEntry, Stats,
    TransportError,
};
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use cyoad::backend::{Backend, BackendFuture};
use cyoad::services::Services;

/// Canned backend; records the queries it was asked.
#[derive(Default)]
pub struct FakeBackend {
    pub stats: Option<Result<Stats, TransportError>>,
    pub games: Option<Result<Vec<CatalogEntry>, TransportError>>,
    pub search: Option<Result<SearchResponse, TransportError>>,
    pub seen: Mutex<Vec<SearchQuery>>,
}

impl Backend for FakeBackend {
    fn stats(&self) -> BackendFuture<'_, Stats> {
        let r = self.stats.clone().unwrap_or(Err(TransportError::Connection));
        Box::pin(async move { r })
    }

    fn games(&self) -> BackendFuture<'_, Vec<CatalogEntry>> {
        let r = self.games.clone().unwrap_or(Err(TransportError::Connection));
        Box::pin(async move { r })
    }

    fn search<'a>(&'a self, query: &'a SearchQuery) -> BackendFuture<'a, SearchResponse> {
        self.seen.lock().unwrap().push(query.clone());
        let r = self.search.clone().unwrap_or(Err(TransportError::Connection));
        Box::pin(async move { r })
    }
}

pub fn services(backend: FakeBackend) -> (Services, Arc<FakeBackend>) {
    let backend = Arc::new(backend);
    let ui_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ui");
    (Services::new(backend.clone(), ui_dir), backend)
}

pub struct TestResponse {
    pub code: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("valid json")
    }
}

/// One GET through the full router.
pub async fn get(svc: &Services, path: &str) -> TestResponse {
    let req = Request::get(path).body(Body::empty()).unwrap();
    let resp = cyoad::router::router(svc.clone()).oneshot(req).await.unwrap();
    let code = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse { code, content_type, body }
}

pub fn hit(id: i64, title: &str, score: f64, match_type: MatchType, snippet: Option<&str>) -> SearchResultEntry {
    SearchResultEntry {
        id: GameId::Int(id),
        title: title.into(),
        url: format!("https://cyoa.cafe/games/{id}"),
        score,
        match_type,
        snippet: snippet.map(str::to_string),
    }
}

pub fn game(title: &str, indexed: bool, summary: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        title: title.into(),
        is_indexed: indexed,
        has_summary: summary.is_some(),
        summary: summary.map(str::to_string),
    }
}

pub fn stats(total: u64, indexed: u64) -> Stats {
    Stats { total: Some(total), indexed: Some(indexed), ..Stats::default() }
}
