//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the envelope schemas from
//! [`crate::inbound::http::schemas`] and the access token security scheme.
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::auth::{IdentityResult, SignInRequest, SignUpRequest, TokenResult};
use crate::inbound::http::restaurants::RestaurantResponse;
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, IdentityEnvelopeSchema, RestaurantListEnvelopeSchema,
    TokenEnvelopeSchema,
};

/// Enrich the generated document with the token security schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AccessToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "x-access-token",
                "Session token issued by POST /api/v1/sign-in or /api/v1/sign-up.",
            ))),
        );
        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Matjip backend API",
        description = "Restaurant listing with token-based sign-up and sign-in.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("AccessToken" = []), ("BearerToken" = [])),
    paths(
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::auth::sign_up,
        crate::inbound::http::auth::sign_in,
        crate::inbound::http::auth::verify_token,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        SignUpRequest,
        SignInRequest,
        TokenResult,
        IdentityResult,
        RestaurantResponse,
        TokenEnvelopeSchema,
        IdentityEnvelopeSchema,
        RestaurantListEnvelopeSchema,
        ErrorEnvelopeSchema,
    )),
    tags(
        (name = "restaurants", description = "Restaurant listing"),
        (name = "auth", description = "Sign-up, sign-in and token checks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
