use std::collections::HashMap;
use std::path::PathBuf;

use cyoad::config::{BackendConfig, Config, TlsPaths};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = Config::from_lookup(lookup(&[]));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.addr, "127.0.0.1:8080");
    assert_eq!(cfg.backend, BackendConfig::default());
    assert!(cfg.tls.is_none());
}

#[test]
fn reads_overrides_and_ignores_garbage_numbers() {
    let cfg = Config::from_lookup(lookup(&[
        ("CYOA_ADDR", "0.0.0.0:9000"),
        ("CYOA_BACKEND_URL", " http://search:8000 "),
        ("CYOA_BACKEND_TIMEOUT_MS", "250"),
        ("CYOA_BACKEND_RETRIES", "lots"),
        ("CYOA_UI_DIR", "/srv/ui"),
        ("CYOA_DEBUG_RESULTS", "yes"),
    ]));
    assert_eq!(cfg.addr, "0.0.0.0:9000");
    assert_eq!(cfg.backend.base_url, "http://search:8000");
    assert_eq!(cfg.backend.timeout_ms, 250);
    assert_eq!(cfg.backend.retries, 1);
    assert_eq!(cfg.ui_dir, Some(PathBuf::from("/srv/ui")));
    assert!(cfg.debug_results);
}

#[test]
fn tls_needs_both_cert_and_key() {
    let cfg = Config::from_lookup(lookup(&[("CYOA_CERT", "c.pem")]));
    assert!(cfg.tls.is_none());
    let cfg = Config::from_lookup(lookup(&[("CYOA_CERT", "c.pem"), ("CYOA_KEY", "k.pem")]));
    assert_eq!(cfg.tls, Some(TlsPaths { cert: "c.pem".into(), key: "k.pem".into() }));
}
