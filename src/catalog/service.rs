use super::{Book, Catalog};
use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open catalog at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read catalog record {record}: {source}")]
    Read {
        record: usize,
        #[source]
        source: csv::Error,
    },
    #[error("catalog record {record} has no title field")]
    MissingTitle { record: usize },
}

/// Builds a [`Catalog`] from delimited text where every record is one book:
/// the first field is the title and each following field is a page.
#[derive(Debug, Clone)]
pub struct CsvCatalogService {
    delimiter: u8,
}

impl Default for CsvCatalogService {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvCatalogService {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn open_catalog(&self, path: &Path) -> Result<Catalog, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = self.read_catalog(file)?;
        info!(
            "loaded {} book(s) from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn read_catalog<R: Read>(&self, source: R) -> Result<Catalog, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(source);

        let mut catalog = Catalog::new();
        for (offset, record) in reader.records().enumerate() {
            let position = offset + 1;
            let record = record.map_err(|source| LoadError::Read {
                record: position,
                source,
            })?;

            let mut fields = record.iter();
            let Some(title) = fields.next() else {
                return Err(LoadError::MissingTitle { record: position });
            };
            let pages: Vec<String> = fields.map(str::to_string).collect();
            debug!("record {position}: {title:?} with {} page(s)", pages.len());

            // Last occurrence wins; the title keeps its first position.
            if catalog.insert(Book::new(title, pages)) {
                warn!("duplicate title {title:?} at record {position}, keeping the later pages");
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> Catalog {
        CsvCatalogService::default()
            .read_catalog(source.as_bytes())
            .expect("catalog should parse")
    }

    #[test]
    fn first_field_is_title_and_rest_are_pages() {
        let catalog = read("Alpha,p1,p2,p3\n");

        assert_eq!(catalog.titles(), vec!["Alpha"]);
        assert_eq!(catalog.page_count("Alpha"), 3);
        assert_eq!(catalog.page("Alpha", 0), Some("p1"));
        assert_eq!(catalog.page("Alpha", 2), Some("p3"));
    }

    #[test]
    fn records_may_have_different_lengths() {
        let catalog = read("Short,one\nLong,one,two,three,four\nEmpty\n");

        assert_eq!(catalog.titles(), vec!["Short", "Long", "Empty"]);
        assert_eq!(catalog.page_count("Short"), 1);
        assert_eq!(catalog.page_count("Long"), 4);
        assert_eq!(catalog.page_count("Empty"), 0);
    }

    #[test]
    fn quoted_pages_keep_commas_and_newlines() {
        let catalog = read("\"Title, The\",\"It was a dark night,\nand cold.\",end\n");

        assert_eq!(catalog.titles(), vec!["Title, The"]);
        assert_eq!(
            catalog.page("Title, The", 0),
            Some("It was a dark night,\nand cold.")
        );
        assert_eq!(catalog.page("Title, The", 1), Some("end"));
    }

    #[test]
    fn duplicate_titles_take_the_last_record() {
        let catalog = read("Alpha,first\nBeta,b\nAlpha,second,third\n");

        assert_eq!(catalog.titles(), vec!["Alpha", "Beta"]);
        assert_eq!(catalog.page_count("Alpha"), 2);
        assert_eq!(catalog.page("Alpha", 0), Some("second"));
    }

    #[test]
    fn custom_delimiter() {
        let catalog = CsvCatalogService::with_delimiter(b';')
            .read_catalog("Alpha;p1;p2\n".as_bytes())
            .expect("catalog should parse");

        assert_eq!(catalog.page("Alpha", 1), Some("p2"));
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        let bytes: &[u8] = b"Alpha,ok\nBeta,\xff\xfe\n";
        let err = CsvCatalogService::default()
            .read_catalog(bytes)
            .expect_err("non-UTF-8 record should fail");

        assert!(matches!(err, LoadError::Read { record: 2, .. }), "{err:?}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CsvCatalogService::default()
            .open_catalog(Path::new("definitely/not/here/books.csv"))
            .expect_err("missing file should fail");

        assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
        assert!(err.to_string().contains("books.csv"));
    }
}
