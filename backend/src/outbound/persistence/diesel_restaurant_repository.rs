//! PostgreSQL-backed `RestaurantRepository` implementation.
//!
//! The category filter is added to a boxed query only when present, and is
//! always bound as a parameter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RestaurantRepository, RestaurantRepositoryError};
use crate::domain::{Category, Restaurant};

use super::error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::RestaurantRow;
use super::pool::{DbPool, PoolError};
use super::schema::restaurants;

/// Status code of listed restaurants.
const ACTIVE_STATUS: &str = "A";

/// Diesel-backed implementation of the [`RestaurantRepository`] port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RestaurantRepositoryError {
    RestaurantRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: &diesel::result::Error) -> RestaurantRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => RestaurantRepositoryError::connection(message),
        DieselFailure::UniqueViolation => RestaurantRepositoryError::query("database error"),
        DieselFailure::Query(message) => RestaurantRepositoryError::query(message),
    }
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            title: row.title,
            address: row.address,
            category: row.category,
            video_url: row.video_url,
        }
    }
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn list_active(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Restaurant>, RestaurantRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .select(RestaurantRow::as_select())
            .filter(restaurants::status.eq(ACTIVE_STATUS))
            .order(restaurants::restaurant_idx.asc())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(restaurants::category.eq(category.as_str()));
        }

        let rows: Vec<RestaurantRow> = query
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&err))?;
        Ok(rows.into_iter().map(Restaurant::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_keep_all_listing_fields() {
        let restaurant = Restaurant::from(RestaurantRow {
            title: "을지면옥".to_owned(),
            address: "서울 중구".to_owned(),
            category: "한식".to_owned(),
            video_url: "https://video.example/2".to_owned(),
        });
        assert_eq!(restaurant.title, "을지면옥");
        assert_eq!(restaurant.category, "한식");
        assert_eq!(restaurant.video_url, "https://video.example/2");
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        let error = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert!(matches!(
            map_diesel_error(&error),
            RestaurantRepositoryError::Connection { .. }
        ));
    }
}
