//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MATJIP_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use matjip::outbound::persistence::PoolConfig;
use matjip::outbound::token::DEFAULT_TOKEN_TTL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP server, the pool and token issuance.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MATJIP")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Minimum idle connections kept in the pool.
    pub pool_min_idle: Option<u32>,
    /// Connection checkout timeout in seconds.
    pub pool_timeout_secs: Option<u64>,
    /// Session token lifetime in seconds.
    pub token_ttl_secs: Option<u64>,
}

/// Failures raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value}: {source}")]
    InvalidBindAddr {
        /// Offending value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
    /// No database URL was configured.
    #[error("database url is required (set MATJIP_DATABASE_URL)")]
    MissingDatabaseUrl,
    /// A zero TTL would mint already-expired tokens.
    #[error("token ttl must be greater than zero")]
    ZeroTokenTtl,
}

impl AppSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Pool configuration assembled from the pool settings.
    ///
    /// # Errors
    /// Returns [`SettingsError::MissingDatabaseUrl`] when no URL is set.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let url = self
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)?;
        Ok(PoolConfig::new(url)
            .with_max_size(self.pool_max_size.unwrap_or(PoolConfig::DEFAULT_MAX_SIZE))
            .with_min_idle(Some(
                self.pool_min_idle.unwrap_or(PoolConfig::DEFAULT_MIN_IDLE),
            ))
            .with_connection_timeout(
                self.pool_timeout_secs
                    .map_or(PoolConfig::DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs),
            ))
    }

    /// Session token lifetime, defaulting to 24 hours.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroTokenTtl`] for a zero lifetime.
    pub fn token_ttl(&self) -> Result<Duration, SettingsError> {
        match self.token_ttl_secs {
            None => Ok(DEFAULT_TOKEN_TTL),
            Some(0) => Err(SettingsError::ZeroTokenTtl),
            Some(secs) => Ok(Duration::from_secs(secs)),
        }
    }
}
