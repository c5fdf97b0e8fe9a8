//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use matjip::outbound::persistence::DbPool;
use matjip::outbound::token::TokenSecret;

/// Everything needed to construct the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) token_secret: TokenSecret,
    pub(crate) token_ttl: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from loaded settings.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        db_pool: DbPool,
        token_secret: TokenSecret,
        token_ttl: Duration,
    ) -> Self {
        Self {
            bind_addr,
            db_pool,
            token_secret,
            token_ttl,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
