use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-scrape")]
#[command(about = "Scrapes a JavaScript-rendered product catalog into a CSV export")]
#[command(version)]
pub struct Args {
    /// Path to the JSON catalog configuration
    pub config: PathBuf,

    /// Number of pages rendered concurrently (overrides the config)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// CSV file to write (overrides the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// WebDriver server URL (overrides the config and WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Commit and push the export with git once it is written
    #[arg(long)]
    pub publish: bool,

    /// Commit message used with --publish
    #[arg(long, default_value = "Add updated product data CSV")]
    pub commit_message: String,
}
