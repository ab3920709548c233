use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,     // http://127.0.0.1:8000
    pub timeout_ms: u64,      // 5000
    pub retries: usize,       // 1
    pub backoff_ms: u64,      // 100
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_ms: 5000,
            retries: 1,
            backoff_ms: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
    pub backend: BackendConfig,
    pub ui_dir: Option<PathBuf>,
    /// Serve over TLS only when both cert and key are configured.
    pub tls: Option<TlsPaths>,
    pub debug_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            backend: BackendConfig::default(),
            ui_dir: None,
            tls: None,
            debug_results: false,
        }
    }
}

impl Config {
    /// - CYOA_ADDR (default 127.0.0.1:8080)
    /// - CYOA_BACKEND_URL (default http://127.0.0.1:8000)
    /// - CYOA_BACKEND_TIMEOUT_MS (default 5000)
    /// - CYOA_BACKEND_RETRIES (default 1)
    /// - CYOA_BACKEND_BACKOFF_MS (default 100)
    /// - CYOA_UI_DIR (optional)
    /// - CYOA_CERT / CYOA_KEY (optional, both required for TLS)
    /// - CYOA_DEBUG_RESULTS (bool, default false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let non_empty = |key: &str| lookup(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        if let Some(addr) = non_empty("CYOA_ADDR") {
            cfg.addr = addr;
        }
        if let Some(url) = non_empty("CYOA_BACKEND_URL") {
            cfg.backend.base_url = url;
        }
        cfg.backend.timeout_ms = parse_or(non_empty("CYOA_BACKEND_TIMEOUT_MS"), cfg.backend.timeout_ms);
        cfg.backend.retries = parse_or(non_empty("CYOA_BACKEND_RETRIES"), cfg.backend.retries);
        cfg.backend.backoff_ms = parse_or(non_empty("CYOA_BACKEND_BACKOFF_MS"), cfg.backend.backoff_ms);
        cfg.ui_dir = non_empty("CYOA_UI_DIR").map(PathBuf::from);
        cfg.tls = match (non_empty("CYOA_CERT"), non_empty("CYOA_KEY")) {
            (Some(cert), Some(key)) => Some(TlsPaths { cert: cert.into(), key: key.into() }),
            _ => None,
        };
        cfg.debug_results = non_empty("CYOA_DEBUG_RESULTS")
            .map(|v| parse_bool(&v))
            .unwrap_or(cfg.debug_results);
        cfg
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.parse::<T>().ok()).unwrap_or(default)
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
