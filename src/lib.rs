// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod export;
pub mod jobs;
pub mod parsers;
pub mod publish;
pub mod renderer;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CatalogConfig;
pub use error::{ConfigError, RenderError};
pub use jobs::{JobGroup, PageJob};
pub use results::{ProductRecord, ResultSet};

use crawlers::{Dispatcher, PageWorker};
use parsers::ProductExtractor;
use renderer::{PageRenderer, WebDriverRenderer};
use std::path::Path;
use std::sync::Arc;

/// Builder for one scrape of a catalog
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    /// Create a new Catalog from a configuration
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(CatalogConfig::from_file(path)?))
    }

    /// Set the maximum number of pages rendered at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the WebDriver server used by [`Catalog::run`]
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Scrape every group through a headless browser
    pub async fn run(self) -> Result<ResultSet, ConfigError> {
        let renderer = Arc::new(WebDriverRenderer::from_config(&self.config));
        self.run_with(renderer).await
    }

    /// Scrape every group with the given renderer.
    ///
    /// Groups run one after another in declaration order and their results are
    /// concatenated in that order. Only configuration problems are errors; page
    /// and item failures shrink the result instead.
    pub async fn run_with(self, renderer: Arc<dyn PageRenderer>) -> Result<ResultSet, ConfigError> {
        self.config.validate()?;
        let extractor = ProductExtractor::new(&self.config.competitor, self.config.selectors.compile()?);
        let worker = Arc::new(PageWorker::new(renderer, Arc::new(extractor)));
        let dispatcher = Dispatcher::new(worker, self.config.max_concurrency);

        let start_time = std::time::Instant::now();
        let mut results = ResultSet::new();

        for group in &self.config.groups {
            let jobs = group.jobs();
            ::log::info!("Scraping group {} ({} pages)", group.label, jobs.len());

            let group_results = dispatcher.run_all(jobs).await;
            ::log::info!("Group {} yielded {} records", group.label, group_results.len());
            results.append(group_results);
        }

        ::log::info!(
            "Scraping complete - {} records from {} groups in {:.2} seconds",
            results.len(),
            self.config.groups.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(results)
    }
}
