use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Book {
    pub title: String,
    pub pages: Vec<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            title: title.into(),
            pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }
}

/// Read-only mapping from book title to its pages, in load order.
///
/// Lookups never fail loudly: an unknown title or an out-of-range page
/// index simply yields nothing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book, replacing the pages of an existing entry with the same
    /// title. A replaced title keeps its original position. Returns `true`
    /// when an entry was replaced.
    pub(crate) fn insert(&mut self, book: Book) -> bool {
        match self.index.get(&book.title) {
            Some(&slot) => {
                self.books[slot] = book;
                true
            }
            None => {
                self.index.insert(book.title.clone(), self.books.len());
                self.books.push(book);
                false
            }
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.title.as_str()).collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, title: &str) -> Option<&Book> {
        self.index.get(title).map(|&slot| &self.books[slot])
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    pub fn page_count(&self, title: &str) -> usize {
        self.book(title).map(Book::page_count).unwrap_or(0)
    }

    pub fn page(&self, title: &str, index: usize) -> Option<&str> {
        self.book(title)?.page(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for book in iter {
            catalog.insert(book);
        }
        catalog
    }
}
