mod model;
mod service;

pub use model::{Book, Catalog};
pub use service::{CsvCatalogService, LoadError};
