// TLS web server wiring

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tower_http::services::ServeDir;

use crate::bootstrap::config::ServiceConfig;
use crate::bootstrap::{BootstrapError, BootstrapResult};

/// Start the secure web front-end with an externally supplied route table.
///
/// The route table owns request handling (including template rendering
/// from the configured template directory); the bootstrap adds static
/// asset serving and terminates TLS with the configured certificate/key
/// pair. Runs in the foreground until the server exits.
pub async fn serve(config: ServiceConfig, routes: Router) -> BootstrapResult<()> {
    let tls = RustlsConfig::from_pem_file(&config.cert_pem, &config.key_pem)
        .await
        .map_err(|e| {
            BootstrapError::tls(format!(
                "failed to load certificate pair {} / {}: {}",
                config.cert_pem.display(),
                config.key_pem.display(),
                e
            ))
        })?;

    let app = routes.nest_service("/static", ServeDir::new(&config.static_dir));

    let addr = config.bind_addr();
    log::info!("Serving on https://{}", addr);

    axum_server::bind_rustls(addr, tls)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_fails_without_certificate_pair() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServiceConfig::rooted_at(dir.path());

        let result = serve(config.clone(), Router::new()).await;
        match result {
            Err(BootstrapError::Tls(message)) => {
                assert!(message.contains("cert.pem"));
            }
            other => panic!("expected TLS error, got {:?}", other.err()),
        }
    }
}
