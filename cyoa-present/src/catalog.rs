use serde::Serialize;

use cyoa_api::CatalogEntry;

/// Lazily revealed summary. `key` is stable for a given catalog position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBlock {
    pub key: String,
    pub text: String,
    pub revealed: bool,
}

impl SummaryBlock {
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub position: usize,
    pub title: String,
    pub index_status: &'static str,
    pub summary_status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogView {
    Games { records: Vec<CatalogRecord> },
    Empty,
}

impl CatalogView {
    pub const EMPTY_MESSAGE: &'static str = "No games in the catalog yet.";

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogView::Empty)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        match self {
            CatalogView::Games { records } => records,
            CatalogView::Empty => &[],
        }
    }

    pub fn records_mut(&mut self) -> &mut [CatalogRecord] {
        match self {
            CatalogView::Games { records } => records,
            CatalogView::Empty => &mut [],
        }
    }
}

pub fn build_catalog(entries: &[CatalogEntry]) -> CatalogView {
    if entries.is_empty() {
        return CatalogView::Empty;
    }
    let records = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| catalog_record(position, entry))
        .collect();
    CatalogView::Games { records }
}

fn catalog_record(position: usize, entry: &CatalogEntry) -> CatalogRecord {
    let summary = entry
        .summary
        .as_deref()
        .filter(|s| entry.has_summary && !s.trim().is_empty())
        .map(|text| SummaryBlock {
            key: format!("summary-{position}"),
            text: text.to_string(),
            revealed: false,
        });
    CatalogRecord {
        position,
        title: entry.title.clone(),
        index_status: if entry.is_indexed { "Indexed" } else { "Not indexed" },
        summary_status: if summary.is_some() { "Summary available" } else { "No summary" },
        summary,
    }
}
