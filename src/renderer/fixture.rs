use crate::error::RenderError;
use crate::renderer::{PageRenderer, RenderSession};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory renderer serving static HTML per URL.
///
/// Unknown URLs fail to open like an unreachable page. Session opens and
/// closes are counted so callers can check that nothing leaks.
#[derive(Debug, Default)]
pub struct FixtureRenderer {
    pages: HashMap<String, FixturePage>,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

#[derive(Debug, Clone, Default)]
struct FixturePage {
    html: String,
    delay: Duration,
    broken_source: bool,
}

impl FixtureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: impl Into<String>) -> Self {
        self.with_delayed_page(url, html, Duration::ZERO)
    }

    /// Serves `html` after `delay`, to control completion order
    pub fn with_delayed_page(mut self, url: &str, html: impl Into<String>, delay: Duration) -> Self {
        self.pages.insert(
            url.to_string(),
            FixturePage {
                html: html.into(),
                delay,
                broken_source: false,
            },
        );
        self
    }

    /// A page that opens fine but whose source cannot be read
    pub fn with_broken_source(mut self, url: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            FixturePage {
                broken_source: true,
                ..FixturePage::default()
            },
        );
        self
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageRenderer for FixtureRenderer {
    async fn open(&self, url: &str) -> Result<Box<dyn RenderSession>, RenderError> {
        let page = self
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| RenderError::Navigation {
                url: url.to_string(),
                reason: "no fixture for url".to_string(),
            })?;

        self.opened.fetch_add(1, Ordering::SeqCst);
        if !page.delay.is_zero() {
            tokio::time::sleep(page.delay).await;
        }

        Ok(Box::new(FixtureSession {
            url: url.to_string(),
            page,
            closed: Arc::clone(&self.closed),
        }))
    }
}

struct FixtureSession {
    url: String,
    page: FixturePage,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl RenderSession for FixtureSession {
    fn url(&self) -> &str {
        &self.url
    }

    async fn source(&mut self) -> Result<String, RenderError> {
        if self.page.broken_source {
            return Err(RenderError::Source {
                url: self.url.clone(),
                reason: "fixture source unavailable".to_string(),
            });
        }
        Ok(self.page.html.clone())
    }

    async fn close(self: Box<Self>) -> Result<(), RenderError> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
