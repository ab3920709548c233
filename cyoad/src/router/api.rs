use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use cyoa_api::{SearchMode, SearchQuery};
use cyoa_present::{build_catalog, present_results, present_stats, FailureView};

use crate::services::Services;

use super::ui::query_error_message;
use super::util::{json_error, json_response, SearchParams};

pub async fn handle_search(
    State(services): State<Services>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mode = match params.mode.as_deref().unwrap_or_default().parse::<SearchMode>() {
        Ok(m) => m,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, &query_error_message(&e)),
    };
    let query = match SearchQuery::parse(params.q.as_deref().unwrap_or_default(), mode) {
        Ok(query) => query,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, &query_error_message(&e)),
    };
    let resp = match services.backend().search(&query).await {
        Ok(resp) => resp,
        Err(e) => return json_error(StatusCode::BAD_GATEWAY, &FailureView::search(&e).message),
    };
    let mode_used = if resp.mode_used.is_empty() { query.mode.as_str() } else { resp.mode_used.as_str() };
    json_response(&present_results(&resp.results, mode_used), services.debug_results())
}

pub async fn handle_catalog(State(services): State<Services>) -> Response {
    match services.backend().games().await {
        Ok(games) => json_response(&build_catalog(&games), services.debug_results()),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, &FailureView::catalog(&e).message),
    }
}

pub async fn handle_stats(State(services): State<Services>) -> Response {
    match services.backend().stats().await {
        Ok(stats) => json_response(&present_stats(&stats), services.debug_results()),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, &FailureView::stats(&e).message),
    }
}
