//! Server settings loaded via OrthoConfig.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use backend::outbound::persistence::PoolConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Conventional variable consulted when no prefixed database URL is set.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Process-level settings for the doctor directory server.
///
/// The pool fields carry defaults so the settings load even when no
/// `DOCTOR_DIRECTORY_*` variable or config file is present.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DOCTOR_DIRECTORY")]
pub struct DoctorDirectorySettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Without one the directory serves the
    /// bundled sample doctors only.
    pub database_url: Option<String>,
    /// Maximum pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Seconds to wait for a pooled connection.
    #[ortho_config(default = 5)]
    pub pool_connection_timeout_secs: u64,
}

impl Default for DoctorDirectorySettings {
    fn default() -> Self {
        Self {
            bind_addr: None,
            database_url: None,
            pool_max_size: DEFAULT_POOL_MAX_SIZE,
            pool_connection_timeout_secs: DEFAULT_POOL_CONNECTION_TIMEOUT_SECS,
        }
    }
}

impl DoctorDirectorySettings {
    /// Listen address, `0.0.0.0:5000` by default.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Database URL from settings, then from `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        let present = |url: &String| !url.trim().is_empty();
        self.database_url
            .clone()
            .filter(present)
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok().filter(present))
    }

    /// Pool configuration, when a database URL is available.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url().map(|url| {
            PoolConfig::new(url)
                .with_max_size(self.pool_max_size.max(1))
                .with_connection_timeout(Duration::from_secs(self.pool_connection_timeout_secs))
        })
    }
}
