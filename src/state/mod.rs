use crate::catalog::Catalog;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The selected title and page had no text to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no content available for {title:?} page {}", .page_index + 1)]
pub struct ContentUnavailable {
    pub title: String,
    pub page_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderPosition<'a> {
    NoBookSelected,
    ViewingPage { title: &'a str, page_index: usize },
}

/// What the display surface shows for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    pub title: &'a str,
    /// One-based, for display.
    pub page_number: usize,
    pub page_count: usize,
    pub content: &'a str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderState {
    selected_title: Option<String>,
    page_index: usize,
}

impl ReaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> ReaderPosition<'_> {
        match &self.selected_title {
            Some(title) => ReaderPosition::ViewingPage {
                title,
                page_index: self.page_index,
            },
            None => ReaderPosition::NoBookSelected,
        }
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.selected_title.as_deref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn select_book(&mut self, title: &str) {
        debug!("selecting {title:?}");
        self.selected_title = Some(title.to_string());
        self.page_index = 0;
    }

    pub fn has_next(&self, catalog: &Catalog) -> bool {
        match &self.selected_title {
            Some(title) => self.page_index + 1 < catalog.page_count(title),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.selected_title.is_some() && self.page_index > 0
    }

    /// Moves one page forward, staying put on the last page.
    pub fn next_page(&mut self, catalog: &Catalog) -> bool {
        if !self.has_next(catalog) {
            return false;
        }
        self.page_index += 1;
        debug!("advanced to page index {}", self.page_index);
        true
    }

    /// Moves one page back, staying put on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page_index -= 1;
        debug!("went back to page index {}", self.page_index);
        true
    }

    /// Text of the current page, or `None` when no book is selected.
    ///
    /// A selected book whose page is missing or blank reports
    /// [`ContentUnavailable`]; the state itself is left untouched.
    pub fn current_content<'c>(
        &self,
        catalog: &'c Catalog,
    ) -> Result<Option<&'c str>, ContentUnavailable> {
        let Some(title) = self.selected_title.as_deref() else {
            return Ok(None);
        };

        match catalog.page(title, self.page_index) {
            Some(content) if !content.is_empty() => Ok(Some(content)),
            _ => {
                warn!(
                    "no content for {title:?} at page index {}",
                    self.page_index
                );
                Err(ContentUnavailable {
                    title: title.to_string(),
                    page_index: self.page_index,
                })
            }
        }
    }

    pub fn current_page<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> Result<Option<PageView<'a>>, ContentUnavailable> {
        let Some(content) = self.current_content(catalog)? else {
            return Ok(None);
        };
        let Some(title) = self.selected_title.as_deref() else {
            return Ok(None);
        };

        Ok(Some(PageView {
            title,
            page_number: self.page_index + 1,
            page_count: catalog.page_count(title),
            content,
        }))
    }
}
