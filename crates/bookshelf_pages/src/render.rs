//! Render models returned by page dispatch.
//!
//! # Responsibility
//! - Carry everything a page needs to draw itself, pre-shaped by the router.
//! - Keep message wording in one place so the UI renders values verbatim.
//!
//! # Invariants
//! - Render models hold plain data; no live store handles.

use bookshelf_core::{Book, BookDraft, BookId};
use std::path::PathBuf;

/// Raw form field values as the UI submits them.
///
/// Optional text fields arrive as plain strings; blank means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
    pub isbn: String,
}

impl BookForm {
    /// Normalizes form input into a draft: trims text and maps blank
    /// optional fields to `None`.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: blank_to_none(&self.genre),
            year: self.year,
            isbn: blank_to_none(&self.isbn),
        }
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year,
            isbn: book.isbn.clone().unwrap_or_default(),
        }
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Home page image probe result. A missing file is reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Found(PathBuf),
    Missing(PathBuf),
}

/// Home page content: static guidance plus the banner image status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub guidance: &'static str,
    pub image: ImageStatus,
}

/// Full-catalog table for the view page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfView {
    pub books: Vec<Book>,
    /// Set when the shelf is empty, in place of the table.
    pub empty_message: Option<String>,
}

/// One selectable row in the update/delete pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerChoice {
    pub id: BookId,
    pub title: String,
}

impl PickerChoice {
    /// Display label, e.g. `The Hobbit (ID: 3)`.
    pub fn label(&self) -> String {
        format!("{} (ID: {})", self.title, self.id)
    }
}

/// Book selection list shown before an update or delete submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub choices: Vec<PickerChoice>,
    /// Set when there is nothing to pick from.
    pub empty_message: Option<String>,
}

/// Render model for a navigation selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Home(HomeView),
    /// Blank add form; nothing is fetched.
    AddBook,
    ViewBooks(ShelfView),
    /// Blank search box; results arrive via the search submit.
    SearchBooks,
    UpdateBook(PickerView),
    DeleteBook(PickerView),
    /// The store could not serve this page; message is user-visible.
    Failed(String),
}

/// Result envelope for add/update/delete submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Store-assigned id of the affected book, when known.
    pub book_id: Option<BookId>,
    /// Human-readable message for the UI.
    pub message: String,
}

impl ActionOutcome {
    pub(crate) fn success(message: impl Into<String>, book_id: Option<BookId>) -> Self {
        Self {
            ok: true,
            book_id,
            message: message.into(),
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            book_id: None,
            message: message.into(),
        }
    }
}

/// Result envelope for the search submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub books: Vec<Book>,
    pub message: String,
}

/// Result envelope for the single-book fetch used to prefill the update
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub form: Option<BookForm>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::{BookForm, PickerChoice};

    #[test]
    fn form_draft_trims_and_maps_blanks_to_none() {
        let form = BookForm {
            title: "  The Hobbit  ".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            genre: "   ".to_string(),
            year: 1937,
            isbn: "".to_string(),
        };

        let draft = form.to_draft();
        assert_eq!(draft.title, "The Hobbit");
        assert_eq!(draft.genre, None);
        assert_eq!(draft.isbn, None);
        assert_eq!(draft.year, 1937);
    }

    #[test]
    fn picker_label_includes_title_and_id() {
        let choice = PickerChoice {
            id: 3,
            title: "The Hobbit".to_string(),
        };
        assert_eq!(choice.label(), "The Hobbit (ID: 3)");
    }
}
