use serde::{Serialize, Serializer};

use cyoa_api::{GameId, MatchType, SearchResultEntry};

use crate::snippet::SnippetBlock;

/// Serialized as its display label, so JSON consumers show the same text as
/// the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    AiMatch,
    TextMatch,
}

impl Badge {
    pub fn for_match(match_type: MatchType) -> Self {
        match match_type {
            MatchType::Summary => Badge::AiMatch,
            _ => Badge::TextMatch,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::AiMatch => "AI Match",
            Badge::TextMatch => "Text Match",
        }
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub id: GameId,
    pub title: String,
    pub url: String,
    pub badge: Badge,
    pub score: f64,
    pub score_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SnippetBlock>,
}

/// Outcome of a successful search. An empty result set is its own state so
/// the page can say so instead of drawing an empty list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView {
    Matches { mode_used: String, records: Vec<ResultRecord> },
    Empty { mode_used: String },
}

impl ResultsView {
    pub fn mode_used(&self) -> &str {
        match self {
            ResultsView::Matches { mode_used, .. } | ResultsView::Empty { mode_used } => mode_used,
        }
    }

    pub fn records(&self) -> &[ResultRecord] {
        match self {
            ResultsView::Matches { records, .. } => records,
            ResultsView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsView::Empty { .. })
    }

    /// User-facing line for the empty state.
    pub fn message(&self) -> Option<String> {
        match self {
            ResultsView::Empty { mode_used } => Some(format!("No results found in {mode_used} mode.")),
            ResultsView::Matches { .. } => None,
        }
    }
}

pub fn present_results(results: &[SearchResultEntry], mode_used: &str) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Empty { mode_used: mode_used.to_string() };
    }
    let records = results.iter().map(present_entry).collect();
    ResultsView::Matches { mode_used: mode_used.to_string(), records }
}

fn present_entry(entry: &SearchResultEntry) -> ResultRecord {
    let snippet = match (entry.match_type, entry.snippet.as_deref()) {
        (MatchType::Summary, Some(text)) if !text.trim().is_empty() => {
            Some(SnippetBlock::from_text(text))
        }
        _ => None,
    };
    ResultRecord {
        id: entry.id.clone(),
        title: entry.title.clone(),
        url: entry.url.clone(),
        badge: Badge::for_match(entry.match_type),
        score: entry.score,
        score_label: format!("{}%", entry.score),
        snippet,
    }
}
