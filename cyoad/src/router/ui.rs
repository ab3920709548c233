use std::path::{Component, Path, PathBuf};

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use cyoa_api::{QueryError, SearchMode, SearchQuery};
use cyoa_present::{present_results, FailureView};

use crate::services::Services;
use crate::startup::initialize_page;

use super::render;
use super::util::{escape_html, SearchParams};

static DEFAULT_APP_JS: &str = include_str!("../../ui/assets/app.js");
static DEFAULT_STYLE_CSS: &str = include_str!("../../ui/assets/style.css");

/// First existing of: configured dir, crate `ui/`, `./ui`, `<exe dir>/ui`.
pub fn resolve_ui_dir(configured: Option<&Path>) -> PathBuf {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(dir) = configured {
        candidates.push(dir.to_path_buf());
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ui"));
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("ui"));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("ui"));
        }
    }
    for p in &candidates {
        if p.is_dir() {
            debug!("[ui] using directory: {}", p.display());
            return p.clone();
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ui")
}

pub async fn render_index(State(services): State<Services>) -> Html<String> {
    let page = initialize_page(services.backend()).await;
    let stats = match &page.stats {
        Ok(view) => render::stats_html(view),
        Err(failure) => render::failure_html(failure),
    };
    let (count, catalog) = match &page.catalog {
        Ok(view) => (view.len().to_string(), render::catalog_html(view)),
        Err(failure) => ("?".to_string(), render::failure_html(failure)),
    };
    let body = format!(
        "<section id=\"stats-container\">{stats}</section>\
         {form}\
         <section id=\"search-results\"></section>\
         <section id=\"all-games\"><h2>All games (<span id=\"game-count\">{count}</span>)</h2>\
         <div id=\"all-games-list\">{catalog}</div></section>",
        form = search_form("", SearchMode::default()),
    );
    Html(layout("CYOA Search", &body))
}

pub async fn render_search(
    State(services): State<Services>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let SearchParams { q: raw_q, mode: raw_mode } = params;
    let mode = raw_mode.as_deref().unwrap_or_default().parse::<SearchMode>();
    let shown_mode = mode.clone().unwrap_or_default();

    let Some(raw_q) = raw_q else {
        let body = format!(
            "{}<section id=\"search-results\"></section>",
            search_form("", shown_mode)
        );
        return Html(layout("CYOA Search", &body));
    };

    let results = match mode.and_then(|m| SearchQuery::parse(&raw_q, m)) {
        Err(e) => render::notice_html(&query_error_message(&e)),
        Ok(query) => match services.backend().search(&query).await {
            Ok(resp) => {
                let mode_used = if resp.mode_used.is_empty() {
                    query.mode.as_str()
                } else {
                    resp.mode_used.as_str()
                };
                render::results_html(&present_results(&resp.results, mode_used))
            }
            Err(e) => render::failure_html(&FailureView::search(&e)),
        },
    };
    let body = format!(
        "{}<section id=\"search-results\">{results}</section><p><a href=\"/\">Back to all games</a></p>",
        search_form(&raw_q, shown_mode)
    );
    let title = format!("Results - {}", raw_q.trim());
    Html(layout(&title, &body))
}

pub fn query_error_message(e: &QueryError) -> String {
    match e {
        QueryError::TooShort { min, .. } => format!("Query must contain at least {min} characters."),
        QueryError::UnknownMode(m) => format!("Unknown search mode {m:?}."),
    }
}

fn search_form(q: &str, mode: SearchMode) -> String {
    let options: String = SearchMode::all()
        .into_iter()
        .map(|m| {
            format!(
                "<option value=\"{v}\"{sel}>{v}</option>",
                v = m.as_str(),
                sel = if m == mode { " selected" } else { "" }
            )
        })
        .collect();
    format!(
        "<form id=\"search-form\" action=\"/search\" method=\"get\">\
            <input id=\"search-query\" name=\"q\" type=\"text\" value=\"{q}\" placeholder=\"Describe a game...\" autocomplete=\"off\" />\
            <select id=\"search-mode\" name=\"mode\">{options}</select>\
            <button type=\"submit\">Search</button>\
         </form>",
        q = escape_html(q),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title><link rel=\"stylesheet\" href=\"/assets/style.css\"/></head>\
         <body><main><h1><a href=\"/\">CYOA Search</a></h1>{body}</main>\
         <script src=\"/assets/app.js\" defer></script></body></html>",
        title = escape_html(title),
    )
}

/// Resolves `rel` under `<ui_dir>/assets`. Only plain file and directory
/// names are accepted: no root, drive prefix, `.` or `..`.
pub fn asset_path(ui_dir: &Path, rel: &str) -> Option<PathBuf> {
    let rel = Path::new(rel);
    let mut components = rel.components().peekable();
    components.peek()?;
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    // a backslash is a separator on windows but part of a name elsewhere
    if rel.to_str().map_or(true, |s| s.contains('\\')) {
        return None;
    }
    Some(ui_dir.join("assets").join(rel))
}

pub async fn serve_asset(
    State(services): State<Services>,
    axum::extract::Path(rel): axum::extract::Path<String>,
) -> Response {
    let Some(p) = asset_path(services.ui_dir(), &rel) else {
        debug!("[ui] rejected asset path {rel:?}");
        return StatusCode::BAD_REQUEST.into_response();
    };
    let content_type = content_type_for(&p);
    match tokio::fs::read(&p).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(e) => {
            debug!("[ui] asset fallback; failed to read {}: {}", p.display(), e);
            let builtin = match rel.as_str() {
                "app.js" => Some(DEFAULT_APP_JS),
                "style.css" => Some(DEFAULT_STYLE_CSS),
                _ => None,
            };
            match builtin {
                Some(text) => ([(header::CONTENT_TYPE, content_type)], text).into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
    }
}

fn content_type_for(p: &Path) -> &'static str {
    match p
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
        .as_str()
    {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
