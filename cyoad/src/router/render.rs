//! HTML fragments for the view records built in `cyoa-present`.

use cyoa_present::{
    Badge, CatalogView, FailureView, ResultsView, SnippetBlock, SnippetSegment, StatsView,
};

use super::util::escape_html;

pub fn results_html(view: &ResultsView) -> String {
    if let Some(message) = view.message() {
        return format!("<p class=\"empty\">{}</p>", escape_html(&message));
    }
    let mut items = String::new();
    for (i, r) in view.records().iter().enumerate() {
        let badge_class = match r.badge {
            Badge::AiMatch => "badge badge-ai",
            Badge::TextMatch => "badge badge-text",
        };
        let snippet = r
            .snippet
            .as_ref()
            .map(|s| snippet_html(&format!("snippet-{i}"), s))
            .unwrap_or_default();
        items.push_str(&format!(
            "<li class=\"result-item\">\
                <div class=\"result-head\">\
                    <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" title=\"ID: {id}\">{title}</a>\
                    <span class=\"{badge_class}\">{badge}</span>\
                    <span class=\"score\">Similarity: {score}</span>\
                </div>{snippet}\
            </li>",
            url = escape_html(&r.url),
            id = escape_html(&r.id.to_string()),
            title = escape_html(&r.title),
            badge = r.badge.label(),
            score = escape_html(&r.score_label),
        ));
    }
    format!(
        "<p class=\"mode\">Mode: {}</p><ul class=\"results\">{items}</ul>",
        escape_html(view.mode_used())
    )
}

pub fn snippet_html(dom_id: &str, block: &SnippetBlock) -> String {
    let mut inner = String::new();
    for seg in &block.segments {
        match seg {
            SnippetSegment::Text(t) => inner.push_str(&escape_html(t)),
            SnippetSegment::LineBreak => inner.push_str("<br>"),
        }
    }
    format!(
        "<div class=\"snippet\" id=\"{dom_id}\" data-expanded=\"{}\">{inner}</div>\
         <button type=\"button\" class=\"toggle\" data-target=\"{dom_id}\" data-attr=\"data-expanded\">{}</button>",
        block.expanded,
        if block.expanded { "Less" } else { "More" },
    )
}

pub fn catalog_html(view: &CatalogView) -> String {
    if view.is_empty() {
        return format!("<p class=\"empty\">{}</p>", CatalogView::EMPTY_MESSAGE);
    }
    let mut items = String::new();
    for rec in view.records() {
        let summary = match &rec.summary {
            Some(block) => format!(
                "<button type=\"button\" class=\"toggle\" data-target=\"{key}\" data-attr=\"hidden\">{label}</button>\
                 <div class=\"summary\" id=\"{key}\"{hidden}>{text}</div>",
                key = block.key,
                label = if block.revealed { "Hide summary" } else { "Show summary" },
                hidden = if block.revealed { "" } else { " hidden" },
                text = escape_html(&block.text).replace('\n', "<br>"),
            ),
            None => String::new(),
        };
        items.push_str(&format!(
            "<li class=\"game\">\
                <span class=\"title\">{title}</span>\
                <span class=\"status\">{index}</span>\
                <span class=\"status\">{summary_status}</span>{summary}\
            </li>",
            title = escape_html(&rec.title),
            index = rec.index_status,
            summary_status = rec.summary_status,
        ));
    }
    format!("<ul class=\"catalog\">{items}</ul>")
}

pub fn stats_html(view: &StatsView) -> String {
    let parts: Vec<String> = view
        .lines
        .iter()
        .map(|l| format!("<strong>{}:</strong> {}", escape_html(&l.label), escape_html(&l.value)))
        .collect();
    format!("<p class=\"stats\">{}</p>", parts.join(" | "))
}

pub fn failure_html(failure: &FailureView) -> String {
    format!(
        "<p class=\"error\" data-context=\"{}\">{}</p>",
        failure.context,
        escape_html(&failure.message)
    )
}

pub fn notice_html(message: &str) -> String {
    format!("<p class=\"notice\">{}</p>", escape_html(message))
}
