//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD and search entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookDraft, BookId};
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Use-case service wrapper for catalog operations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new book and returns its store-assigned id.
    ///
    /// Returns repository-level validation errors unchanged.
    pub fn add_book(&self, draft: &BookDraft) -> RepoResult<BookId> {
        self.repo.add_book(draft)
    }

    /// Gets one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Lists the whole catalog in insertion order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Searches title, author and genre for a substring match.
    pub fn search_books(&self, term: &str) -> RepoResult<Vec<Book>> {
        self.repo.search_books(term)
    }

    /// Rewrites all fields of an existing book by id.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_book(&self, id: BookId, draft: &BookDraft) -> RepoResult<()> {
        self.repo.update_book(id, draft)
    }

    /// Deletes a book by id.
    pub fn delete_book(&self, id: BookId) -> RepoResult<()> {
        self.repo.delete_book(id)
    }
}
