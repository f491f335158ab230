//! Navigation page set.
//!
//! # Responsibility
//! - Define the fixed sidebar menu and its display labels.

/// One sidebar menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AddBook,
    ViewBooks,
    SearchBooks,
    UpdateBook,
    DeleteBook,
}

impl Page {
    /// Sidebar order, top to bottom.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::AddBook,
        Page::ViewBooks,
        Page::SearchBooks,
        Page::UpdateBook,
        Page::DeleteBook,
    ];

    /// Display label shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::AddBook => "Add Book",
            Page::ViewBooks => "View Books",
            Page::SearchBooks => "Search Books",
            Page::UpdateBook => "Update Book",
            Page::DeleteBook => "Delete Book",
        }
    }

    /// Resolves a sidebar selection back to its page.
    pub fn from_label(label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.label() == label)
    }
}
