use std::time::Instant;

use tracing::{info, warn};

use cyoa_present::{build_catalog, present_stats, CatalogView, FailureView, StatsView};

use crate::backend::Backend;

/// What the index page shows once its data has been loaded. Each section
/// fails on its own; one failing never blanks the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub stats: Result<StatsView, FailureView>,
    pub catalog: Result<CatalogView, FailureView>,
}

/// Loads stats and then the catalog. The host calls this once per page load.
pub async fn initialize_page(backend: &dyn Backend) -> PageState {
    let start = Instant::now();
    let stats = match backend.stats().await {
        Ok(stats) => Ok(present_stats(&stats)),
        Err(e) => {
            warn!(error = %e, "[page] stats unavailable");
            Err(FailureView::stats(&e))
        }
    };
    let catalog = match backend.games().await {
        Ok(games) => Ok(build_catalog(&games)),
        Err(e) => {
            warn!(error = %e, "[page] catalog unavailable");
            Err(FailureView::catalog(&e))
        }
    };
    tracing::debug!(elapsed = ?start.elapsed(), "[page] initialized");
    PageState { stats, catalog }
}

/// Boot-time reachability probe; never fatal.
pub async fn probe_backend(backend: &dyn Backend) -> bool {
    match backend.stats().await {
        Ok(_) => {
            info!("[backend] reachable");
            true
        }
        Err(e) => {
            warn!(error = %e, "[backend] not reachable yet; pages will show errors until it is");
            false
        }
    }
}
