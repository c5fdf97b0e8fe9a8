//! Restaurant listing use-case.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{RestaurantRepository, RestaurantRepositoryError, RestaurantsQuery};
use super::{Category, Error, Restaurant};

fn map_repository_error(error: RestaurantRepositoryError) -> Error {
    match error {
        RestaurantRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("restaurant repository unavailable: {message}"))
        }
        RestaurantRepositoryError::Query { message } => {
            Error::internal(format!("restaurant repository error: {message}"))
        }
    }
}

/// Read-side restaurant service backed by a [`RestaurantRepository`].
#[derive(Clone)]
pub struct RestaurantListingService<R> {
    restaurants: Arc<R>,
}

impl<R> RestaurantListingService<R> {
    /// Create a new service from the repository.
    pub fn new(restaurants: Arc<R>) -> Self {
        Self { restaurants }
    }
}

#[async_trait]
impl<R> RestaurantsQuery for RestaurantListingService<R>
where
    R: RestaurantRepository,
{
    async fn list_restaurants(&self, category: Option<Category>) -> Result<Vec<Restaurant>, Error> {
        self.restaurants
            .list_active(category)
            .await
            .map_err(map_repository_error)
    }
}
