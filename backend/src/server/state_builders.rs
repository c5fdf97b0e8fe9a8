//! Wiring of outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use matjip::domain::ports::CredentialHashError;
use matjip::domain::{AuthService, RestaurantListingService};
use matjip::inbound::http::state::HttpState;
use matjip::outbound::credentials::Argon2CredentialHasher;
use matjip::outbound::persistence::{DbPool, DieselRestaurantRepository, DieselUserRepository};
use matjip::outbound::token::JwtSessionTokens;

use super::ServerConfig;

type ProductionAuthService =
    AuthService<DieselUserRepository, Argon2CredentialHasher, JwtSessionTokens>;

fn build_auth_service(
    config: &ServerConfig,
) -> Result<Arc<ProductionAuthService>, CredentialHashError> {
    let tokens = JwtSessionTokens::new(
        &config.token_secret,
        config.token_ttl,
        Arc::new(DefaultClock),
    );
    Ok(Arc::new(AuthService::new(
        Arc::new(DieselUserRepository::new(config.db_pool.clone())),
        Arc::new(Argon2CredentialHasher::new()?),
        Arc::new(tokens),
    )))
}

fn build_restaurant_service(pool: &DbPool) -> Arc<RestaurantListingService<DieselRestaurantRepository>> {
    Arc::new(RestaurantListingService::new(Arc::new(
        DieselRestaurantRepository::new(pool.clone()),
    )))
}

/// Build the HTTP state backed by PostgreSQL, Argon2 and JWT adapters.
///
/// The same [`AuthService`] instance serves registration, login and token
/// verification.
///
/// # Errors
/// Returns [`CredentialHashError`] when the credential hasher cannot be
/// prepared.
pub(crate) fn build_http_state(
    config: &ServerConfig,
) -> Result<web::Data<HttpState>, CredentialHashError> {
    let auth = build_auth_service(config)?;
    Ok(web::Data::new(HttpState::new(
        auth.clone(),
        auth.clone(),
        auth,
        build_restaurant_service(&config.db_pool),
    )))
}
