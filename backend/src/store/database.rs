//! SQLite connection handle shared by every request.
//!
//! The handle is opened once in `main.rs`, cloned into the application state and
//! closed when the server stops. Closing goes through the shared slot, so it
//! takes effect even while worker threads still hold clones. All statements go through `Database::run`,
//! which moves the work onto the blocking thread pool so the async workers are
//! never stalled by disk I/O.

use crate::error::{AppError, Result};
use log::info;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS books (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        title  TEXT NOT NULL,
        author TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS exams (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        title    TEXT NOT NULL,
        code     TEXT NOT NULL,
        type     TEXT NOT NULL,
        year     TEXT NOT NULL,
        filename TEXT NOT NULL,
        userid   INTEGER NOT NULL
    );
";

/// Clonable handle to the single SQLite connection.
///
/// Writers are serialized by the mutex; SQLite itself provides durability.
/// The slot is emptied by `close`.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl Database {
    /// Opens (or creates) the database file and makes sure both tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        info!("Opened database {:?}", path);
        Ok(Self::from_connection(conn))
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        }
    }

    /// Runs `f` against the connection on the blocking thread pool.
    ///
    /// Fails with `AppError::Internal` once the database has been closed.
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| AppError::Internal("database connection poisoned".to_string()))?;
            let conn = guard
                .as_ref()
                .ok_or_else(|| AppError::Internal("database is closed".to_string()))?;
            f(conn)
        })
        .await?
    }

    /// Closes the connection for every clone of this handle.
    ///
    /// Waits for a statement in flight to finish. Closing twice is a no-op.
    pub fn close(&self) -> Result<()> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| AppError::Internal("database connection poisoned".to_string()))?;
        if let Some(conn) = guard.take() {
            conn.close().map_err(|(_, e)| AppError::Storage(e))?;
            info!("Database closed");
        }
        Ok(())
    }
}

/// Creates the `books` and `exams` tables when missing.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
