//! CLI smoke entry point.
//!
//! # Responsibility
//! - Open the catalog store and print a deterministic status line.
//! - Exit non-zero when the store is unavailable at startup.

use bookshelf_core::{open_catalog, CatalogService, SqliteBookRepository};
use bookshelf_pages::resolve_catalog_path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let path = resolve_catalog_path();

    let conn = match open_catalog(&path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = match SqliteBookRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = CatalogService::new(repo);

    match service.list_books() {
        Ok(books) => {
            println!("bookshelf_core version={}", bookshelf_core::core_version());
            println!("catalog path={} books={}", path.display(), books.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}
