use anyhow::{anyhow, Context, Result};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::ServerConfig;
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use std::time::Duration;
use std::{fs::File, io::BufReader, path::Path, sync::Arc};
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::server::TlsStream;
use tokio_rustls::TlsAcceptor;
use tracing::{info, warn};

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TlsConfig {
    cfg: Arc<ServerConfig>,
}

impl TlsConfig {
    pub fn load(cert_path: &Path, key_path: &Path) -> Result<Self> {
        let certs = load_certs(cert_path)?;
        let key = load_key(key_path)?;

        let mut config = ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(certs, key)
            .context("building tls server config")?;
        config.alpn_protocols = vec![b"http/1.1".to_vec()];

        Ok(Self { cfg: Arc::new(config) })
    }

    pub fn into_acceptor(self) -> TlsAcceptor {
        TlsAcceptor::from(self.cfg)
    }
}

/// TCP listener that completes the TLS handshake before handing the stream
/// to `axum::serve`. Failed handshakes are logged and skipped.
pub struct TlsListener {
    inner: TcpListener,
    acceptor: TlsAcceptor,
}

impl TlsListener {
    pub fn new(inner: TcpListener, acceptor: TlsAcceptor) -> Self {
        Self { inner, acceptor }
    }
}

impl axum::serve::Listener for TlsListener {
    type Io = TlsStream<TcpStream>;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        loop {
            let (stream, peer) = match self.inner.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("[tls] accept error: {e}");
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    continue;
                }
            };
            match tokio::time::timeout(HANDSHAKE_TIMEOUT, self.acceptor.accept(stream)).await {
                Ok(Ok(tls)) => return (tls, peer),
                Ok(Err(e)) => warn!("[tls] handshake with {peer} failed: {e}"),
                Err(_) => warn!("[tls] handshake with {peer} timed out"),
            }
        }
    }

    fn local_addr(&self) -> std::io::Result<Self::Addr> {
        self.inner.local_addr()
    }
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let f = File::open(path).with_context(|| format!("opening certificate '{}'", path.display()))?;
    let mut reader = BufReader::new(f);
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow!("invalid certs in {}: {e}", path.display()))?;
    let Some(first) = certs.first() else {
        return Err(anyhow!("no certificates found in {}", path.display()));
    };
    info!(
        "[tls] loaded certificate chain (n={}) from {}; leaf_sha256: {}",
        certs.len(),
        path.display(),
        fingerprint(first.as_ref())
    );
    Ok(certs)
}

fn load_key(path: &Path) -> Result<PrivateKeyDer<'static>> {
    let f = File::open(path).with_context(|| format!("opening private key '{}'", path.display()))?;
    let mut reader = BufReader::new(f);
    rustls_pemfile::private_key(&mut reader)
        .with_context(|| format!("reading private key '{}'", path.display()))?
        .ok_or_else(|| anyhow!("no valid private key in {}", path.display()))
}

pub fn fingerprint(der: &[u8]) -> String {
    let digest = Sha256::digest(der);
    digest.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")
}
