// Secure service bootstrap
//
// Wires the TLS-bound web front-end: fixed host/port, asset directories
// resolved relative to the launcher executable, certificate/key pair from
// the certs directory, and an externally supplied route table.

pub mod config;
pub mod server;

// Re-exports
pub use config::ServiceConfig;
pub use server::serve;

use thiserror::Error;

/// Result type for bootstrap operations
pub type BootstrapResult<T> = std::result::Result<T, BootstrapError>;

/// Errors raised while wiring the secure service
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TLS setup failed: {0}")]
    Tls(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Create a new configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    /// Create a new TLS error
    pub fn tls(reason: impl Into<String>) -> Self {
        Self::Tls(reason.into())
    }
}
