//! Restaurant listing handler.
//!
//! ```text
//! GET /api/v1/restaurants
//! GET /api/v1/restaurants?category=한식
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use super::schemas::{ErrorEnvelopeSchema, RestaurantListEnvelopeSchema};
use super::state::HttpState;
use super::validation::parse_category;
use crate::domain::Restaurant;
use crate::inbound::http::ApiResult;

/// Success message for `GET /restaurants`.
pub const RESTAURANTS_MESSAGE: &str = "restaurant list retrieved";

/// Query parameters for `GET /api/v1/restaurants`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RestaurantsParams {
    /// Category filter: one of 한식, 중식, 일식, 양식, 분식, 구이, 회/초밥, 기타.
    pub category: Option<String>,
}

/// Restaurant entry in the listing `result`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Category label.
    pub category: String,
    /// Review video reference.
    pub video_url: String,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(value: Restaurant) -> Self {
        Self {
            title: value.title,
            address: value.address,
            category: value.category,
            video_url: value.video_url,
        }
    }
}

/// List active restaurants, optionally filtered by category.
#[utoipa::path(
    get,
    path = "/api/v1/restaurants",
    params(RestaurantsParams),
    responses(
        (status = 200, description = "Active restaurants", body = RestaurantListEnvelopeSchema),
        (status = 410, description = "Unknown category", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants",
    security([])
)]
#[get("/restaurants")]
pub async fn list_restaurants(
    state: web::Data<HttpState>,
    params: web::Query<RestaurantsParams>,
) -> ApiResult<HttpResponse> {
    let category = parse_category(params.category.as_deref())?;
    let rows = state.restaurants.list_restaurants(category).await?;
    let result: Vec<RestaurantResponse> = rows.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(Envelope::success(RESTAURANTS_MESSAGE, result)))
}
