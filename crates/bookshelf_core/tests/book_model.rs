use bookshelf_core::{Book, BookDraft, BookValidationError};

#[test]
fn validate_accepts_minimal_required_fields() {
    let draft = BookDraft::new("The Hobbit", "J.R.R. Tolkien");
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_whitespace_only_title() {
    let draft = BookDraft::new("   ", "J.R.R. Tolkien");
    assert_eq!(
        draft.validate(),
        Err(BookValidationError::MissingRequiredField("title"))
    );
}

#[test]
fn validate_rejects_whitespace_only_author() {
    let draft = BookDraft::new("The Hobbit", "\t");
    assert_eq!(
        draft.validate(),
        Err(BookValidationError::MissingRequiredField("author"))
    );
}

#[test]
fn validate_accepts_year_range_bounds() {
    let mut draft = BookDraft::new("Title", "Author");
    draft.year = 0;
    assert!(draft.validate().is_ok());
    draft.year = 2100;
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_years_outside_range() {
    let mut draft = BookDraft::new("Title", "Author");
    draft.year = -1;
    assert_eq!(
        draft.validate(),
        Err(BookValidationError::YearOutOfRange(-1))
    );
    draft.year = 2101;
    assert_eq!(
        draft.validate(),
        Err(BookValidationError::YearOutOfRange(2101))
    );
}

#[test]
fn to_draft_drops_the_id_and_keeps_fields() {
    let book = Book {
        id: 7,
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        genre: Some("Science Fiction".to_string()),
        year: 1965,
        isbn: None,
    };

    let draft = book.to_draft();
    assert_eq!(draft.title, "Dune");
    assert_eq!(draft.genre.as_deref(), Some("Science Fiction"));
    assert_eq!(draft.year, 1965);
    assert_eq!(draft.isbn, None);
}

#[test]
fn book_serializes_with_column_field_names() {
    let book = Book {
        id: 1,
        title: "The Hobbit".to_string(),
        author: "J.R.R. Tolkien".to_string(),
        genre: Some("Fantasy".to_string()),
        year: 1937,
        isbn: Some("123".to_string()),
    };

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "The Hobbit");
    assert_eq!(json["author"], "J.R.R. Tolkien");
    assert_eq!(json["genre"], "Fantasy");
    assert_eq!(json["year"], 1937);
    assert_eq!(json["isbn"], "123");

    let back: Book = serde_json::from_value(json).unwrap();
    assert_eq!(back, book);
}

#[test]
fn validation_error_messages_name_the_field() {
    let message = BookValidationError::MissingRequiredField("title").to_string();
    assert!(message.contains("title"));

    let message = BookValidationError::YearOutOfRange(2500).to_string();
    assert!(message.contains("2500"));
}
