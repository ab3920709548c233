use cyoad::config::Config;
use cyoad::{router, services, startup, tls};

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::from_env();
    info!(
        addr = %cfg.addr,
        backend = %cfg.backend.base_url,
        timeout_ms = cfg.backend.timeout_ms,
        retries = cfg.backend.retries,
        "[config] loaded"
    );

    let svc = services::Services::from_config(&cfg)?;
    info!("[ui] serving assets from {}", svc.ui_dir().display());
    startup::probe_backend(svc.backend()).await;

    let acceptor = match &cfg.tls {
        Some(paths) => {
            info!("[tls] loading certificate {} and key {}", paths.cert.display(), paths.key.display());
            let tls = tls::TlsConfig::load(&paths.cert, &paths.key)
                .context("tls config error; unset CYOA_CERT/CYOA_KEY to serve plain http")?;
            Some(tls.into_acceptor())
        }
        None => None,
    };

    let listener = TcpListener::bind(&cfg.addr)
        .await
        .with_context(|| format!("binding {}", cfg.addr))?;
    let app = router::router(svc);

    match acceptor {
        Some(acceptor) => {
            info!("cyoad listening on https://{}", cfg.addr);
            axum::serve(tls::TlsListener::new(listener, acceptor), app)
                .await
                .context("server error")?;
        }
        None => {
            info!("cyoad listening on http://{}", cfg.addr);
            axum::serve(listener, app).await.context("server error")?;
        }
    }
    Ok(())
}
