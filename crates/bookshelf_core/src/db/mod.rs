//! SQLite storage bootstrap entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the Bookshelf core.
//! - Ensure the `books` schema exists before a connection is handed out.
//!
//! # Invariants
//! - Schema creation uses `CREATE TABLE IF NOT EXISTS` and is idempotent.
//! - Core code must not read/write catalog data before bootstrap succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;

pub use open::{open_catalog, open_catalog_in_memory};

pub type DbResult<T> = Result<T, StorageError>;

/// Storage-layer error for connection bootstrap and statement execution.
#[derive(Debug)]
pub enum StorageError {
    /// The store file could not be opened or the schema statement was
    /// rejected. Fatal at startup.
    Unavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },
    /// Statement-level failure on an already bootstrapped connection.
    Sqlite(rusqlite::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "catalog store `{}` unavailable: {source}", path.display())
            }
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
