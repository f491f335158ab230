//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record and its client-supplied draft shape.
//! - Enforce field-level invariants before rows reach the store.
//!
//! # Invariants
//! - `id` is assigned by the store on insert and never changes afterwards.
//! - `title` and `author` are non-empty for every stored book.
//! - `year` stays within the catalog's accepted range.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

/// Earliest publication year the catalog accepts.
pub const YEAR_MIN: i64 = 0;
/// Latest publication year the catalog accepts.
pub const YEAR_MAX: i64 = 2100;

/// Canonical catalog record as persisted in the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable row id, assigned on insert.
    pub id: BookId,
    /// Required, non-empty.
    pub title: String,
    /// Required, non-empty.
    pub author: String,
    /// Optional; `None` when the form field was left blank.
    pub genre: Option<String>,
    /// Publication year within `[YEAR_MIN, YEAR_MAX]`; 0 when unknown.
    pub year: i64,
    /// Optional; stored as-is, no format validation.
    pub isbn: Option<String>,
}

/// Client-supplied field set for add and update flows.
///
/// Carries everything but the id, which the store owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: i64,
    pub isbn: Option<String>,
}

/// Field-level validation failure for a [`BookDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// A required text field is empty or whitespace-only.
    MissingRequiredField(&'static str),
    /// `year` falls outside `[YEAR_MIN, YEAR_MAX]`.
    YearOutOfRange(i64),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField(field) => {
                write!(f, "required field `{field}` is empty")
            }
            Self::YearOutOfRange(year) => {
                write!(f, "year {year} is outside {YEAR_MIN}..={YEAR_MAX}")
            }
        }
    }
}

impl Error for BookValidationError {}

impl BookDraft {
    /// Creates a draft with required fields set and everything else default.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Checks the draft against catalog invariants.
    ///
    /// # Errors
    /// - `MissingRequiredField` when `title` or `author` trims to empty.
    /// - `YearOutOfRange` when `year` is outside the accepted range.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::MissingRequiredField("title"));
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::MissingRequiredField("author"));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&self.year) {
            return Err(BookValidationError::YearOutOfRange(self.year));
        }
        Ok(())
    }
}

impl Book {
    /// Returns the draft shape of this record, dropping the id.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            year: self.year,
            isbn: self.isbn.clone(),
        }
    }
}
