// Service bootstrap configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::bootstrap::{BootstrapError, BootstrapResult};

/// Fixed bind host for the web front-end
pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Fixed bind port for the web front-end
pub const PORT: u16 = 5000;

/// Process-wide configuration for one service start. Constructed
/// explicitly and passed into the bootstrap step; lifecycle scoped to that
/// single start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: IpAddr,
    pub port: u16,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub cert_pem: PathBuf,
    pub key_pem: PathBuf,
}

impl ServiceConfig {
    /// Resolve the fixed layout relative to the running executable, so the
    /// service finds its assets regardless of the invoking working
    /// directory.
    pub fn resolve() -> BootstrapResult<Self> {
        let exe = std::env::current_exe()?;
        let root = exe
            .parent()
            .ok_or_else(|| BootstrapError::config("executable path has no parent directory"))?;
        Ok(Self::rooted_at(root))
    }

    /// The fixed layout under an explicit root directory
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let certs = root.join("certs");
        Self {
            host: HOST,
            port: PORT,
            template_dir: root.join("app").join("templates"),
            static_dir: root.join("app").join("static"),
            cert_pem: certs.join("cert.pem"),
            key_pem: certs.join("key.pem"),
        }
    }

    /// Socket address the service binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
