//! Shared harness for integration tests: a throwaway SQLite file database
//! with the crate's migrations applied.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use cosmopharma_site::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// File-backed SQLite database that lives for one test and removes its
/// files (including the WAL sidecars) on drop.
pub struct TestDb {
    path: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(path: &str) -> Self {
        std::fs::remove_file(path).ok(); // leftover from an aborted run

        let pool =
            establish_connection_pool(path).expect("Failed to open the test database.");
        let mut conn = pool
            .get()
            .expect("Failed to get a pooled connection.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            path: path.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
        std::fs::remove_file(format!("{}-shm", &self.path)).ok();
        std::fs::remove_file(format!("{}-wal", &self.path)).ok();
    }
}
