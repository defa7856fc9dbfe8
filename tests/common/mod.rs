//! Helpers for integration tests.

use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use car_rental_admin::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Migrated SQLite database living in its own temporary directory.
///
/// The directory, together with the WAL and SHM side files, is removed when
/// the value is dropped.
pub struct TestDb {
    // Fields drop in order: close the pool before removing the directory.
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
