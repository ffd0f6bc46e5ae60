use catalog_scrape::export::export_csv;
use catalog_scrape::publish::GitPublisher;
use catalog_scrape::{Catalog, CatalogConfig};
use clap::Parser;
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = CatalogConfig::from_file(&args.config)?;

    // Override the WebDriver URL with an environment variable if provided
    if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
        if !webdriver_url.is_empty() {
            config.webdriver_url = webdriver_url;
        }
    }

    let output = args.output.clone().unwrap_or_else(|| config.output.clone());

    let mut catalog = Catalog::new(config);
    if let Some(concurrency) = args.concurrency {
        catalog = catalog.with_max_concurrency(concurrency);
    }
    if let Some(webdriver_url) = &args.webdriver_url {
        catalog = catalog.with_webdriver_url(webdriver_url);
    }

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!("Using WebDriver at {}", catalog.config().webdriver_url);
    ::log::info!(
        "Starting scraping of {} groups with up to {} concurrent pages",
        catalog.config().groups.len(),
        catalog.config().max_concurrency
    );

    let results = catalog.run().await?;
    export_csv(&output, &results)?;
    println!("Scraped data saved to {}", output.display());

    if args.publish {
        let publisher = GitPublisher::new(std::env::current_dir()?).with_message(&args.commit_message);
        if let Err(e) = publisher.publish(&output).await {
            ::log::error!("Error pushing {}: {}", output.display(), e);
        }
    }

    Ok(())
}
