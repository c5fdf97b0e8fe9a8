//! Embedded PostgreSQL databases for repository integration tests.
//!
//! Every test gets its own temporary database on a cluster shared by the
//! test binary, with the crate's embedded migrations applied. The cluster
//! is bootstrapped by `pg-embed-setup-unpriv`.
//!
//! When the cluster cannot start, tests fail unless `SKIP_TEST_CLUSTER` is
//! truthy, in which case they print a skip marker and return early.

use std::future::Future;

use diesel::pg::PgConnection;
use diesel::{Connection, RunQueryDsl};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use pg_embedded_setup_unpriv::test_support::shared_cluster_handle;
use tokio::runtime::Runtime;

use matjip::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

/// Migrated database, a pool over it and the runtime that drives the pool.
///
/// Fields drop in declaration order: the pool goes before its runtime and
/// the database goes last.
pub struct PgWorld {
    pool: DbPool,
    runtime: Runtime,
    url: String,
    _database: TemporaryDatabase,
}

impl PgWorld {
    /// Provision a fresh database and apply all migrations.
    pub fn start() -> Result<Self, String> {
        let runtime = Runtime::new().map_err(|err| err.to_string())?;
        let cluster = shared_cluster_handle().map_err(|err| format!("{err:?}"))?;
        let database = cluster
            .temporary_database(format!("matjip_test_{}", uuid::Uuid::new_v4().simple()))
            .map_err(|err| format!("{err:?}"))?;
        let url = database.url().to_string();

        run_pending_migrations(&url).map_err(|err| err.to_string())?;

        let config = PoolConfig::new(url.as_str())
            .with_max_size(2)
            .with_min_idle(Some(1));
        let pool = runtime
            .block_on(DbPool::new(config))
            .map_err(|err| err.to_string())?;

        Ok(Self {
            pool,
            runtime,
            url,
            _database: database,
        })
    }

    /// Pool handed to the repository under test.
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Drive an async repository call to completion.
    ///
    /// Must not be called from inside another Tokio runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Run raw SQL over a separate blocking connection.
    pub fn execute(&self, sql: &str) {
        let mut conn = PgConnection::establish(&self.url).expect("blocking connection");
        diesel::sql_query(sql)
            .execute(&mut conn)
            .unwrap_or_else(|err| panic!("`{sql}` failed: {err}"));
    }

    /// Open a blocking connection for seeding with bound parameters.
    pub fn connection(&self) -> PgConnection {
        PgConnection::establish(&self.url).expect("blocking connection")
    }
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Start a world, honouring the `SKIP_TEST_CLUSTER` policy on failure.
pub fn start_or_skip() -> Option<PgWorld> {
    match PgWorld::start() {
        Ok(world) => Some(world),
        Err(reason) if should_skip_test_cluster() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}
