use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::backend::{Backend, HttpBackend};
use crate::config::Config;

/// Everything a request handler needs. Read-only after startup; handed to
/// the router as shared state.
#[derive(Clone)]
pub struct Services {
    backend: Arc<dyn Backend>,
    ui_dir: PathBuf,
    debug_results: bool,
}

impl Services {
    pub fn new(backend: Arc<dyn Backend>, ui_dir: PathBuf) -> Self {
        Self { backend, ui_dir, debug_results: false }
    }

    pub fn with_debug_results(mut self, on: bool) -> Self {
        self.debug_results = on;
        self
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let backend = HttpBackend::from_config(&cfg.backend)
            .with_context(|| format!("backend url {:?}", cfg.backend.base_url))?;
        let ui_dir = crate::router::ui::resolve_ui_dir(cfg.ui_dir.as_deref());
        Ok(Self::new(Arc::new(backend), ui_dir).with_debug_results(cfg.debug_results))
    }

    pub fn backend(&self) -> &dyn Backend {
        &*self.backend
    }

    pub fn ui_dir(&self) -> &Path {
        &self.ui_dir
    }

    pub fn debug_results(&self) -> bool {
        self.debug_results
    }
}
