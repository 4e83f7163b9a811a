//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pushkind_feedback::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_feedback::repository::DieselRepository;

/// Temporary, fully migrated database used in integration tests.
pub struct TestDb {
    // Removing the directory also removes the `-wal`/`-shm` side files.
    dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);

        let pool = establish_connection_pool(&path.to_string_lossy())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb { dir, path, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
