//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for books.
//! - Isolate SQLite query details from page/service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `BookDraft::validate()` before
//!   persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod book_repo;
