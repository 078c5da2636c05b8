pub mod app;
pub mod catalog;
pub mod config;
pub mod state;
pub mod ui;

pub use app::{ReaderApp, ReaderSession};
pub use catalog::{Book, Catalog, CsvCatalogService, LoadError};
pub use config::{Cli, ReaderConfig};
pub use state::{ContentUnavailable, PageView, ReaderPosition, ReaderState};
