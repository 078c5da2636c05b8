use anyhow::{Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::Theme;

#[derive(Debug, Parser)]
#[command(name = "pagereader", about = "Read paginated books from a CSV catalog")]
pub struct Cli {
    /// CSV catalog: one book per row, title first, then one column per page.
    #[arg(default_value = "books.csv")]
    pub catalog: PathBuf,

    /// Start in dark mode.
    #[arg(long)]
    pub dark: bool,

    /// Window title.
    #[arg(long, default_value = "eBook")]
    pub title: String,

    /// Field delimiter of the catalog file.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    pub catalog_path: PathBuf,
    pub delimiter: u8,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: Theme,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("books.csv"),
            delimiter: b',',
            window_title: "eBook".to_string(),
            window_width: 485.0,
            window_height: 630.0,
            theme: Theme::Light,
        }
    }
}

impl TryFrom<Cli> for ReaderConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        if !cli.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
        }

        Ok(Self {
            catalog_path: cli.catalog,
            delimiter: cli.delimiter as u8,
            window_title: cli.title,
            theme: if cli.dark { Theme::Dark } else { Theme::Light },
            ..Self::default()
        })
    }
}
