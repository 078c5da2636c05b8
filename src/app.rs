use crate::catalog::{Catalog, CsvCatalogService};
use crate::config::ReaderConfig;
use crate::state::{ContentUnavailable, PageView, ReaderState};
use crate::ui::UiRuntime;
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Everything a UI runtime needs to drive one reading session.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    pub catalog: Catalog,
    pub state: ReaderState,
    pub config: ReaderConfig,
}

impl ReaderSession {
    pub fn new(catalog: Catalog, config: ReaderConfig) -> Self {
        Self {
            catalog,
            state: ReaderState::new(),
            config,
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.catalog.titles()
    }

    pub fn select_book(&mut self, title: &str) {
        self.state.select_book(title);
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page(&self.catalog)
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next(&self.catalog)
    }

    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    pub fn current_page(&self) -> Result<Option<PageView<'_>>, ContentUnavailable> {
        self.state.current_page(&self.catalog)
    }
}

/// High-level application orchestrator that wires catalog loading, state,
/// and UI.
pub struct ReaderApp<U: UiRuntime> {
    loader: CsvCatalogService,
    config: ReaderConfig,
    catalog: Option<Catalog>,
    ui: U,
}

impl<U: UiRuntime> ReaderApp<U> {
    pub fn new(ui: U, config: ReaderConfig) -> Self {
        Self {
            loader: CsvCatalogService::with_delimiter(config.delimiter),
            config,
            catalog: None,
            ui,
        }
    }

    pub fn open_catalog(&mut self, path: &Path) -> Result<()> {
        let catalog = self
            .loader
            .open_catalog(path)
            .with_context(|| format!("cannot start reader with catalog {}", path.display()))?;
        self.catalog = Some(catalog);
        Ok(())
    }

    pub fn run(self) -> Result<()> {
        let Some(catalog) = self.catalog else {
            bail!("no catalog loaded");
        };
        self.ui.run(ReaderSession::new(catalog, self.config))
    }
}
