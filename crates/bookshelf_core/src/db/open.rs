//! Connection bootstrap utilities for the catalog store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply the `books` schema before returning a usable connection.
//!
//! # Invariants
//! - Returned connections always have the `books` table present.
//! - Bootstrap is idempotent: re-opening an existing store is a no-op for
//!   the schema and never touches stored rows.

use super::{DbResult, StorageError};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BOOKS_SCHEMA_SQL: &str = include_str!("schema.sql");
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the catalog store at `path`, creating the file and the `books`
/// table if absent.
///
/// # Side effects
/// - Creates the store file when missing.
/// - Emits `catalog_open` logging events with duration and status.
pub fn open_catalog(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=catalog_open module=db status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=catalog_open module=db status=error mode=file duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StorageError::Unavailable {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=catalog_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=catalog_open module=db status=error mode=file duration_ms={} error_code=schema_rejected error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Unavailable {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Opens an in-memory catalog store with the schema applied.
///
/// Used by tests and smoke probes; behavior otherwise matches
/// [`open_catalog`].
pub fn open_catalog_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=catalog_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=catalog_open module=db status=error mode=memory duration_ms={} error_code=store_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StorageError::Unavailable {
                path: ":memory:".into(),
                source: err,
            });
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!(
                "event=catalog_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=catalog_open module=db status=error mode=memory duration_ms={} error_code=schema_rejected error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::Unavailable {
                path: ":memory:".into(),
                source: err,
            })
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch(BOOKS_SCHEMA_SQL)?;
    Ok(())
}
