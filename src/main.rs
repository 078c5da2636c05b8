use anyhow::Result;
use clap::Parser;
use pagereader::ui::GpuiRuntime;
use pagereader::{Cli, ReaderApp, ReaderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ReaderConfig::try_from(Cli::parse())?;
    let catalog_path = config.catalog_path.clone();

    let mut app = ReaderApp::new(GpuiRuntime, config);
    app.open_catalog(&catalog_path)?;

    app.run()
}
