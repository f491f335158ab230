//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and search APIs over the `books` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `BookDraft::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Search matching is case-insensitive and treats the term as a literal
//!   substring (LIKE wildcards in user input are escaped).

use crate::db::StorageError;
use crate::model::book::{Book, BookDraft, BookId, BookValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    author,
    genre,
    year,
    isbn
FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(StorageError),
    NotFound(BookId),
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: id {id}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(StorageError::Sqlite(value))
    }
}

/// Repository interface for book CRUD and search operations.
pub trait BookRepository {
    /// Validates and inserts one book, returning its store-assigned id.
    fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId>;
    /// Gets one book by id.
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Lists every book in insertion (id) order.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Case-insensitive substring search over title, author and genre.
    ///
    /// A blank (post-trim) term returns no rows.
    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>>;
    /// Overwrites all draft fields of the book with the given id.
    fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()>;
    /// Removes the book with the given id.
    fn delete_book(&self, id: BookId) -> RepoResult<()>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when the `books` table has not been created
    ///   on this connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_books_table(conn)?;
        Ok(Self { conn })
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO books (title, author, genre, year, isbn)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.title.as_str(),
                draft.author.as_str(),
                draft.genre.as_deref(),
                draft.year,
                draft.isbn.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>> {
        let Some(pattern) = build_like_pattern(term) else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE lower(title) LIKE ?1 ESCAPE '\\'
                OR lower(author) LIKE ?1 ESCAPE '\\'
                OR lower(genre) LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![pattern])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE books
             SET
                title = ?1,
                author = ?2,
                genre = ?3,
                year = ?4,
                isbn = ?5
             WHERE id = ?6;",
            params![
                draft.title.as_str(),
                draft.author.as_str(),
                draft.genre.as_deref(),
                draft.year,
                draft.isbn.as_deref(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_book(&self, id: BookId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_books_table(conn: &Connection) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'books'
        );",
        [],
        |row| row.get(0),
    )?;

    if exists == 0 {
        return Err(RepoError::MissingRequiredTable("books"));
    }

    Ok(())
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let id: BookId = row.get("id")?;

    let title: String = row.get("title")?;
    if title.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty title in books row id {id}"
        )));
    }

    let author: String = row.get("author")?;
    if author.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty author in books row id {id}"
        )));
    }

    // The year column is nullable in the schema; rows written by this
    // catalog always carry a value, so NULL decodes to the 0 default.
    let year = row.get::<_, Option<i64>>("year")?.unwrap_or(0);

    Ok(Book {
        id,
        title,
        author,
        genre: row.get("genre")?,
        year,
        isbn: row.get("isbn")?,
    })
}

/// Builds the lowercased `%term%` pattern, escaping LIKE wildcards so the
/// term matches literally. Returns `None` for blank input.
fn build_like_pattern(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return None;
    }

    let escaped = trimmed
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    Some(format!("%{escaped}%"))
}

#[cfg(test)]
mod tests {
    use super::build_like_pattern;

    #[test]
    fn like_pattern_is_lowercased_and_wrapped() {
        assert_eq!(build_like_pattern("Tolkien").as_deref(), Some("%tolkien%"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(
            build_like_pattern("100%_done").as_deref(),
            Some("%100\\%\\_done%")
        );
    }

    #[test]
    fn like_pattern_rejects_blank_input() {
        assert_eq!(build_like_pattern(""), None);
        assert_eq!(build_like_pattern("   "), None);
    }
}
