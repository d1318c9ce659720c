//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: migrated in-memory SQLite behind sea-orm (always available)
//! - `TestPostgres`: migrated Postgres container (feature: "postgres")
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let title = builder.title("main");
//! # }
//! ```
//!
//! Container-backed tests opt in with the feature and are `#[ignore]`d so a
//! plain `cargo test` does not need Docker:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["postgres"] }
//! ```

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestPostgres;

/// In-memory SQLite database with the workspace migrations applied.
///
/// Every instance is a fresh, empty database. The pool is capped at one
/// connection because each SQLite `:memory:` connection is its own database.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test SQLite database ready");

        Self { connection }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

/// Builder for test data with deterministic values
///
/// Seeding from the test name keeps generated titles stable between runs
/// and distinct between tests.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_task");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A task title unique to this builder and `suffix`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let title = TestDataBuilder::new(7).title("main");
    /// assert_eq!(title, "task-7-main");
    /// ```
    pub fn title(&self, suffix: &str) -> String {
        format!("task-{}-{}", self.seed, suffix)
    }

    /// A string of exactly `len` characters, for length-limit tests
    pub fn text_of_len(&self, len: usize) -> String {
        "x".repeat(len)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that ids are pairwise distinct and strictly increasing
    pub fn assert_strictly_increasing(ids: &[i64], context: &str) {
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not strictly increasing: {:?}",
                context,
                ids
            );
        }
    }
}
