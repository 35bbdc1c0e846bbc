//! Database operations for diary entries, countdown events and cheer-up memos.
//!
//! This module provides SQLite database operations for the local journal store.
//! A connection pool (via r2d2) is used, but the pool is sized to a single
//! connection: the store has exactly one writer for the lifetime of the process,
//! and all operations are synchronous single statements.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Diary entry CRUD operations
//! - `events`: Countdown event CRUD and derived-field refresh
//! - `memos`: Cheer-up message side table
//!
//! # Example
//!
//! ```no_run
//! use daybook::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/daybook.sqlite"))?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod events;
pub mod memos;
pub mod schema;

use crate::errors::AppResult;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Handle to the local journal database.
///
/// Constructed once at process start and passed (or injected) into every
/// consumer; there is no hidden global instance. The underlying file is owned
/// exclusively by this process for its lifetime.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the journal database at the given path.
    ///
    /// If the database file doesn't exist, it will be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the connection
    /// pool cannot be initialized. This is fatal at startup: no store operation
    /// can succeed without an open handle.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        // Single writer, process lifetime.
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(crate::errors::DatabaseError::Pool)?;

        // Verify the connection is usable before handing the pool out
        let conn = pool.get().map_err(crate::errors::DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA quick_check")
            .map_err(crate::errors::DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Opens an in-memory database, for tests.
    #[cfg(test)]
    pub fn open_in_memory() -> AppResult<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(crate::errors::DatabaseError::Pool)?;
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| crate::errors::DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables if they don't exist. This is idempotent and
    /// safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}
