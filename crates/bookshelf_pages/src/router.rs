//! Page dispatch for catalog flows.
//!
//! # Responsibility
//! - Turn navigation selections and form submits into repository calls.
//! - Recover every repository error into a user-visible message.
//!
//! # Invariants
//! - Dispatch functions never panic and never leak raw errors to the UI.
//! - Update and delete flows list the catalog first so the user picks a row
//!   by id before any mutation.

use crate::page::Page;
use crate::render::{
    ActionOutcome, BookForm, FetchOutcome, HomeView, ImageStatus, PageView, PickerChoice,
    PickerView, SearchOutcome, ShelfView,
};
use bookshelf_core::{BookId, BookRepository, BookValidationError, CatalogService, RepoError};
use log::warn;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CATALOG_FILE_NAME: &str = "library.db";
const CATALOG_PATH_ENV: &str = "BOOKSHELF_DB_PATH";
const HOME_IMAGE_FILE: &str = "library-image.jpg";

const HOME_GUIDANCE: &str = "Use the sidebar to navigate through the app and manage your library.
- Add Book: add a new book to your library.
- View Books: see all the books in your library.
- Search Books: search for a book by title, author, or genre.
- Update Book: edit the details of an existing book.
- Delete Book: remove a book from your library.";

const EMPTY_SHELF_MESSAGE: &str = "No books in the library yet.";
const NO_MATCH_MESSAGE: &str = "No books found.";
const BLANK_SEARCH_MESSAGE: &str = "Enter a title, author, or genre to search.";

static CATALOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Resolves the catalog store path once per process.
///
/// Defaults to `library.db` in the working directory; `BOOKSHELF_DB_PATH`
/// overrides it.
pub fn resolve_catalog_path() -> PathBuf {
    CATALOG_PATH
        .get_or_init(|| catalog_path_from(std::env::var(CATALOG_PATH_ENV).ok()))
        .clone()
}

fn catalog_path_from(raw: Option<String>) -> PathBuf {
    if let Some(value) = raw {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(CATALOG_FILE_NAME)
}

/// Renders the page for a navigation selection.
///
/// Store-backed pages degrade to [`PageView::Failed`] with a message when
/// the repository call fails.
pub fn open_page<R: BookRepository>(service: &CatalogService<R>, page: Page) -> PageView {
    match page {
        Page::Home => PageView::Home(HomeView {
            guidance: HOME_GUIDANCE,
            image: image_status(Path::new(HOME_IMAGE_FILE)),
        }),
        Page::AddBook => PageView::AddBook,
        Page::SearchBooks => PageView::SearchBooks,
        Page::ViewBooks => match service.list_books() {
            Ok(books) => {
                let empty_message = books
                    .is_empty()
                    .then(|| EMPTY_SHELF_MESSAGE.to_string());
                PageView::ViewBooks(ShelfView {
                    books,
                    empty_message,
                })
            }
            Err(err) => PageView::Failed(recover("view_books", &err)),
        },
        Page::UpdateBook => match picker_view(service) {
            Ok(view) => PageView::UpdateBook(view),
            Err(err) => PageView::Failed(recover("update_picker", &err)),
        },
        Page::DeleteBook => match picker_view(service) {
            Ok(view) => PageView::DeleteBook(view),
            Err(err) => PageView::Failed(recover("delete_picker", &err)),
        },
    }
}

/// Adds a book from the submitted form.
pub fn submit_add<R: BookRepository>(
    service: &CatalogService<R>,
    form: &BookForm,
) -> ActionOutcome {
    match service.add_book(&form.to_draft()) {
        Ok(id) => ActionOutcome::success("Book added successfully!", Some(id)),
        Err(err) => ActionOutcome::failure(recover("add_book", &err)),
    }
}

/// Searches the catalog for the submitted term.
///
/// Blank input short-circuits without touching the store, matching the
/// form's own guard.
pub fn submit_search<R: BookRepository>(
    service: &CatalogService<R>,
    term: &str,
) -> SearchOutcome {
    if term.trim().is_empty() {
        return SearchOutcome {
            books: Vec::new(),
            message: BLANK_SEARCH_MESSAGE.to_string(),
        };
    }

    match service.search_books(term) {
        Ok(books) => {
            let message = if books.is_empty() {
                NO_MATCH_MESSAGE.to_string()
            } else {
                format!("Found {} result(s).", books.len())
            };
            SearchOutcome { books, message }
        }
        Err(err) => SearchOutcome {
            books: Vec::new(),
            message: recover("search_books", &err),
        },
    }
}

/// Fetches one book to prefill the update form.
pub fn fetch_book<R: BookRepository>(service: &CatalogService<R>, id: BookId) -> FetchOutcome {
    match service.get_book(id) {
        Ok(Some(book)) => FetchOutcome {
            form: Some(BookForm::from(&book)),
            message: String::new(),
        },
        Ok(None) => FetchOutcome {
            form: None,
            message: missing_book_message(id),
        },
        Err(err) => FetchOutcome {
            form: None,
            message: recover("fetch_book", &err),
        },
    }
}

/// Rewrites all fields of the picked book from the submitted form.
pub fn submit_update<R: BookRepository>(
    service: &CatalogService<R>,
    id: BookId,
    form: &BookForm,
) -> ActionOutcome {
    match service.update_book(id, &form.to_draft()) {
        Ok(()) => ActionOutcome::success("Book updated successfully!", Some(id)),
        Err(err) => ActionOutcome::failure(recover("update_book", &err)),
    }
}

/// Deletes the picked book.
pub fn submit_delete<R: BookRepository>(
    service: &CatalogService<R>,
    id: BookId,
) -> ActionOutcome {
    match service.delete_book(id) {
        Ok(()) => ActionOutcome::success("Book deleted successfully!", Some(id)),
        Err(err) => ActionOutcome::failure(recover("delete_book", &err)),
    }
}

fn picker_view<R: BookRepository>(service: &CatalogService<R>) -> Result<PickerView, RepoError> {
    let choices = service
        .list_books()?
        .into_iter()
        .map(|book| PickerChoice {
            id: book.id,
            title: book.title,
        })
        .collect::<Vec<_>>();

    let empty_message = choices
        .is_empty()
        .then(|| EMPTY_SHELF_MESSAGE.to_string());

    Ok(PickerView {
        choices,
        empty_message,
    })
}

fn image_status(path: &Path) -> ImageStatus {
    if path.exists() {
        ImageStatus::Found(path.to_path_buf())
    } else {
        ImageStatus::Missing(path.to_path_buf())
    }
}

fn missing_book_message(id: BookId) -> String {
    format!("Book with ID {id} no longer exists.")
}

fn recover(flow: &'static str, err: &RepoError) -> String {
    warn!("event=page_flow_error module=pages flow={flow} error={err}");
    describe_repo_error(err)
}

fn describe_repo_error(err: &RepoError) -> String {
    match err {
        RepoError::Validation(BookValidationError::MissingRequiredField(_)) => {
            "Title and Author are required fields.".to_string()
        }
        RepoError::Validation(other) => other.to_string(),
        RepoError::NotFound(id) => missing_book_message(*id),
        other => format!("catalog operation failed: {other}"),
    }
}
