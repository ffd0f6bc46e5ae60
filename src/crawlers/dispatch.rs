use crate::crawlers::PageScraper;
use crate::jobs::PageJob;
use crate::results::{ProductRecord, ResultSet};
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};

/// Runs page jobs on a bounded pool and merges their results in job order
pub struct Dispatcher<S> {
    scraper: Arc<S>,
    concurrency: usize,
}

impl<S: PageScraper + 'static> Dispatcher<S> {
    /// A concurrency of zero is treated as one
    pub fn new(scraper: Arc<S>, concurrency: usize) -> Self {
        Self {
            scraper,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Scrapes every job and flattens the results by submission index.
    ///
    /// Completion order does not matter: each task reports `(index, records)`
    /// and the slots are only flattened once every task has finished. A task
    /// that panics contributes nothing.
    pub async fn run_all(&self, jobs: Vec<PageJob>) -> ResultSet {
        let total = jobs.len();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let (result_tx, mut result_rx) = mpsc::channel::<(usize, Vec<ProductRecord>)>(total.max(1));

        let mut handles = Vec::with_capacity(total);
        for (index, job) in jobs.into_iter().enumerate() {
            let scraper = Arc::clone(&self.scraper);
            let semaphore = Arc::clone(&semaphore);
            let result_tx = result_tx.clone();

            handles.push(tokio::spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        ::log::error!("Worker pool closed before {}: {}", job, e);
                        return;
                    }
                };
                ::log::trace!("Job {} running: {}", index, job);

                let records = scraper.scrape(&job).await;
                if let Err(e) = result_tx.send((index, records)).await {
                    ::log::error!("Failed to report result of {}: {}", job, e);
                }
            }));
        }

        // Each task holds its own sender; the channel closes when the last one finishes.
        drop(result_tx);

        let mut slots: Vec<Option<Vec<ProductRecord>>> = (0..total).map(|_| None).collect();
        while let Some((index, records)) = result_rx.recv().await {
            slots[index] = Some(records);
        }

        for (index, handle) in handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                ::log::error!("Page job {} aborted: {}", index, e);
            }
        }

        let results: ResultSet = slots.into_iter().flatten().flatten().collect();
        ::log::info!("Dispatched {} pages, {} records", total, results.len());
        results
    }
}
