//! Page routing layer for the Bookshelf catalog UI.
//!
//! # Responsibility
//! - Map sidebar navigation selections to catalog flows.
//! - Shape repository results into render models the UI can display as-is.
//!
//! # Invariants
//! - Dispatch is stateless: every call re-derives its data from the store.
//! - Repository errors never cross this boundary raw; they are recovered
//!   into user-visible messages.

pub mod page;
pub mod render;
pub mod router;

pub use page::Page;
pub use render::{
    ActionOutcome, BookForm, FetchOutcome, HomeView, ImageStatus, PageView, PickerChoice,
    PickerView, SearchOutcome, ShelfView,
};
pub use router::{
    fetch_book, open_page, resolve_catalog_path, submit_add, submit_delete, submit_search,
    submit_update,
};
