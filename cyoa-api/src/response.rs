use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Game identifier as issued by the backend: either a record id string or
/// a numeric row id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Int(i64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Int(n) => write!(f, "{n}"),
            GameId::Text(s) => f.write_str(s),
        }
    }
}

/// Which indexed field produced a hit. Anything the backend sends that we
/// do not recognise is treated as a plain text match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Summary,
    #[default]
    #[serde(other)]
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEntry {
    pub id: GameId,
    pub title: String,
    pub url: String,
    pub score: f64,
    #[serde(default, alias = "matchType")]
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultEntry>,
    #[serde(default, alias = "modeUsed")]
    pub mode_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default, alias = "isIndexed")]
    pub is_indexed: bool,
    #[serde(default, alias = "hasSummary")]
    pub has_summary: bool,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Body of `GET /games`. Older backends return a bare array, newer ones
/// wrap it in an object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    List(Vec<CatalogEntry>),
    Wrapped { games: Vec<CatalogEntry> },
}

impl CatalogPayload {
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            CatalogPayload::List(games) | CatalogPayload::Wrapped { games } => games,
        }
    }
}

/// Aggregate counters from `GET /stats`. Only the well-known keys are
/// typed; anything else is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, alias = "total_games", skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, alias = "indexed_games", skip_serializing_if = "Option::is_none")]
    pub indexed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_summary: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_text: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
