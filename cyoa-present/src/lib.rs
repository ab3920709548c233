//! View models for the game search page.
//!
//! Everything here is a pure transformation from backend data to records a
//! renderer can lay out. Nothing touches the network or any markup.

pub mod catalog;
pub mod failure;
pub mod results;
pub mod snippet;
pub mod stats;

pub use catalog::{build_catalog, CatalogRecord, CatalogView, SummaryBlock};
pub use failure::FailureView;
pub use results::{present_results, Badge, ResultRecord, ResultsView};
pub use snippet::{SnippetBlock, SnippetSegment};
pub use stats::{present_stats, StatLine, StatsView};
