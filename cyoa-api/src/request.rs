use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest query (in chars, after trimming) forwarded to the backend.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Mixed,
    Summary,
    Text,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Mixed => "mixed",
            SearchMode::Summary => "summary",
            SearchMode::Text => "text",
        }
    }

    pub fn all() -> [SearchMode; 3] {
        [SearchMode::Mixed, SearchMode::Summary, SearchMode::Text]
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "mixed" => Ok(SearchMode::Mixed),
            "summary" => Ok(SearchMode::Summary),
            "text" => Ok(SearchMode::Text),
            _ => Err(QueryError::UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("query must contain at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
    #[error("unknown search mode: {0:?}")]
    UnknownMode(String),
}

/// A validated search request, ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub mode: SearchMode,
}

impl SearchQuery {
    pub fn parse(text: &str, mode: SearchMode) -> Result<Self, QueryError> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual < MIN_QUERY_CHARS {
            return Err(QueryError::TooShort { min: MIN_QUERY_CHARS, actual });
        }
        Ok(Self { text: text.to_string(), mode })
    }
}
