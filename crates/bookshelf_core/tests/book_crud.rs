use bookshelf_core::db::open_catalog_in_memory;
use bookshelf_core::{
    BookDraft, BookRepository, BookValidationError, CatalogService, RepoError,
    SqliteBookRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn hobbit_draft() -> BookDraft {
    BookDraft {
        title: "The Hobbit".to_string(),
        author: "J.R.R. Tolkien".to_string(),
        genre: Some("Fantasy".to_string()),
        year: 1937,
        isbn: Some("123".to_string()),
    }
}

#[test]
fn add_and_get_roundtrip() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let id = repo.add_book(&hobbit_draft()).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "The Hobbit");
    assert_eq!(loaded.author, "J.R.R. Tolkien");
    assert_eq!(loaded.genre.as_deref(), Some("Fantasy"));
    assert_eq!(loaded.year, 1937);
    assert_eq!(loaded.isbn.as_deref(), Some("123"));
}

#[test]
fn add_then_list_yields_matching_fields_and_fresh_unique_ids() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let first = repo.add_book(&hobbit_draft()).unwrap();
    let second = repo
        .add_book(&BookDraft::new("Dune", "Frank Herbert"))
        .unwrap();
    assert_ne!(first, second);

    let books = repo.list_books().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, first);
    assert_eq!(books[0].title, "The Hobbit");
    assert_eq!(books[1].id, second);
    assert_eq!(books[1].author, "Frank Herbert");

    let ids: HashSet<_> = books.iter().map(|book| book.id).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn add_rejects_empty_title_and_leaves_store_unchanged() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let err = repo
        .add_book(&BookDraft::new("", "Author"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(BookValidationError::MissingRequiredField("title"))
    ));
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn add_rejects_empty_author() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let err = repo
        .add_book(&BookDraft::new("Title", ""))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(BookValidationError::MissingRequiredField("author"))
    ));
}

#[test]
fn add_rejects_out_of_range_year() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let mut draft = hobbit_draft();
    draft.year = 2101;

    let err = repo.add_book(&draft).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(BookValidationError::YearOutOfRange(2101))
    ));
}

#[test]
fn update_overwrites_every_field() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let id = repo.add_book(&hobbit_draft()).unwrap();

    let replacement = BookDraft {
        title: "The Lord of the Rings".to_string(),
        author: "J.R.R. Tolkien".to_string(),
        genre: None,
        year: 1954,
        isbn: None,
    };
    repo.update_book(id, &replacement).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.title, "The Lord of the Rings");
    assert_eq!(loaded.genre, None);
    assert_eq!(loaded.year, 1954);
    assert_eq!(loaded.isbn, None);
}

#[test]
fn update_not_found_leaves_store_unchanged() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let id = repo.add_book(&hobbit_draft()).unwrap();

    let err = repo
        .update_book(id + 1, &BookDraft::new("Ghost", "Nobody"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id + 1));

    let books = repo.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "The Hobbit");
}

#[test]
fn update_rejects_invalid_draft_before_touching_the_row() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let id = repo.add_book(&hobbit_draft()).unwrap();

    let err = repo
        .update_book(id, &BookDraft::new("", "Somebody"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.title, "The Hobbit");
}

#[test]
fn delete_removes_exactly_one_row_and_repeat_is_not_found() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let keep = repo.add_book(&hobbit_draft()).unwrap();
    let gone = repo
        .add_book(&BookDraft::new("Dune", "Frank Herbert"))
        .unwrap();

    repo.delete_book(gone).unwrap();

    let books = repo.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, keep);

    let err = repo.delete_book(gone).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == gone));
}

#[test]
fn get_book_returns_none_for_absent_id() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    assert!(repo.get_book(99).unwrap().is_none());
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_catalog_in_memory().unwrap();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();
    let service = CatalogService::new(repo);

    let id = service.add_book(&hobbit_draft()).unwrap();

    let fetched = service.get_book(id).unwrap().unwrap();
    assert_eq!(fetched.title, "The Hobbit");

    let ids: HashSet<_> = service
        .list_books()
        .unwrap()
        .into_iter()
        .map(|book| book.id)
        .collect();
    assert!(ids.contains(&id));

    service.delete_book(id).unwrap();
    assert!(service.get_book(id).unwrap().is_none());
}

#[test]
fn repository_rejects_unbootstrapped_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteBookRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("books"))
    ));
}
