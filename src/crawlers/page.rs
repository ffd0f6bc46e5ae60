use crate::crawlers::PageScraper;
use crate::error::RenderError;
use crate::jobs::PageJob;
use crate::parsers::{Document, ProductExtractor};
use crate::renderer::PageRenderer;
use crate::results::ProductRecord;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Renders one listing page and extracts its products
pub struct PageWorker {
    renderer: Arc<dyn PageRenderer>,
    extractor: Arc<ProductExtractor>,
}

impl PageWorker {
    pub fn new(renderer: Arc<dyn PageRenderer>, extractor: Arc<ProductExtractor>) -> Self {
        Self {
            renderer,
            extractor,
        }
    }

    /// Fetches the rendered source; the session is closed on every path
    async fn fetch(&self, url: &str) -> Result<String, RenderError> {
        let mut session = self.renderer.open(url).await?;
        let source = session.source().await;

        if let Err(e) = session.close().await {
            ::log::warn!("{}", e);
        }

        source
    }
}

#[async_trait]
impl PageScraper for PageWorker {
    async fn scrape(&self, job: &PageJob) -> Vec<ProductRecord> {
        let start = std::time::Instant::now();
        ::log::info!("Scraping {}", job);

        let source = match self.fetch(job.url()).await {
            Ok(source) => source,
            Err(e) => {
                ::log::error!("Error scraping {}: {}", job, e);
                return Vec::new();
            }
        };

        let records = extract_records(&self.extractor, job.url(), &source);

        ::log::debug!(
            "Scraped {} in {:.2} seconds",
            job,
            start.elapsed().as_secs_f64()
        );
        records
    }
}

/// Runs the extractor over every item of a rendered page, skipping failed items
pub fn extract_records(extractor: &ProductExtractor, url: &str, source: &str) -> Vec<ProductRecord> {
    let page_url = match Url::parse(url) {
        Ok(page_url) => page_url,
        Err(e) => {
            ::log::error!("Cannot parse page url {}: {}", url, e);
            return Vec::new();
        }
    };

    let doc = Document::parse(page_url, source);
    let items = extractor.items(&doc);

    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        match extractor.extract(&doc, *item) {
            Ok(record) => records.push(record),
            Err(e) => ::log::warn!("Skipping item {} on {}: {}", position + 1, url, e),
        }
    }

    ::log::info!(
        "Found {} items on {}, kept {}",
        items.len(),
        url,
        records.len()
    );
    records
}
