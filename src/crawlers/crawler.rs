use crate::jobs::PageJob;
use crate::results::ProductRecord;
use async_trait::async_trait;

/// Scrapes one page into records.
///
/// Implementations never fail: any problem with the page is logged and turned
/// into an empty result, so one bad page cannot affect the others.
#[async_trait]
pub trait PageScraper: Send + Sync {
    async fn scrape(&self, job: &PageJob) -> Vec<ProductRecord>;
}
