//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the schema stay private to this module; failures
//! are mapped onto the typed port errors.
//!
//! # Example
//!
//! ```ignore
//! use matjip::outbound::persistence::{DbPool, PoolConfig, DieselUserRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/matjip")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_restaurant_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
