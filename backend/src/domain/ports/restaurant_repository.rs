//! Driven port for restaurant listings.

use async_trait::async_trait;

use crate::domain::{Category, Restaurant};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading restaurant rows.
    pub enum RestaurantRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "restaurant read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "restaurant read query failed: {message}",
    }
}

/// Port for listing active restaurants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Return active restaurants, restricted to `category` when given.
    async fn list_active(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError>;
}
