//! Shared harness for HTTP integration tests.
//!
//! Builds the real handlers, services and JWT adapter on top of in-memory
//! repositories so tests can assert on store traffic.

pub mod doubles;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use matjip::Trace;
use matjip::domain::ports::CredentialHasher;
use matjip::domain::{AuthService, RestaurantListingService};
use matjip::inbound::http::auth::{sign_in, sign_up, verify_token};
use matjip::inbound::http::error::{json_config, query_config};
use matjip::inbound::http::restaurants::list_restaurants;
use matjip::inbound::http::state::HttpState;
use matjip::outbound::token::{DEFAULT_TOKEN_TTL, JwtSessionTokens, TokenSecret};

use doubles::{InMemoryRestaurantRepository, InMemoryUserRepository};

/// Handles the tests keep to inspect store traffic and decode tokens.
pub struct Harness {
    pub users: Arc<InMemoryUserRepository>,
    pub restaurants: Arc<InMemoryRestaurantRepository>,
    pub tokens: Arc<JwtSessionTokens>,
    state: web::Data<HttpState>,
}

fn test_secret() -> TokenSecret {
    TokenSecret::from_bytes(b"integration-test-signing-secret-0123456789".to_vec())
}

impl Harness {
    /// Wire the services over the given stores and hasher.
    pub fn new<H>(
        users: InMemoryUserRepository,
        restaurants: InMemoryRestaurantRepository,
        hasher: H,
    ) -> Self
    where
        H: CredentialHasher + 'static,
    {
        let users = Arc::new(users);
        let restaurants = Arc::new(restaurants);
        let tokens = Arc::new(JwtSessionTokens::new(
            &test_secret(),
            DEFAULT_TOKEN_TTL,
            Arc::new(DefaultClock),
        ));
        let auth = Arc::new(AuthService::new(
            users.clone(),
            Arc::new(hasher),
            tokens.clone(),
        ));
        let listing = Arc::new(RestaurantListingService::new(restaurants.clone()));
        let state = web::Data::new(HttpState::new(auth.clone(), auth.clone(), auth, listing));
        Self {
            users,
            restaurants,
            tokens,
            state,
        }
    }

    /// Application with the production route layout.
    ///
    /// The returned app owns a clone of the state and does not borrow the
    /// harness.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state.clone())
            .app_data(json_config())
            .app_data(query_config())
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(list_restaurants)
                    .service(sign_up)
                    .service(sign_in)
                    .service(verify_token),
            )
    }
}
