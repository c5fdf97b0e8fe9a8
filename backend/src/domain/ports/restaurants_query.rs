//! Driving port for the restaurant listing.

use async_trait::async_trait;

use crate::domain::{Category, Error, Restaurant};

/// Read-side use-case for listing restaurants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantsQuery: Send + Sync {
    /// List active restaurants, optionally restricted to one category.
    async fn list_restaurants(&self, category: Option<Category>) -> Result<Vec<Restaurant>, Error>;
}
