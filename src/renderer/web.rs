use crate::config::CatalogConfig;
use crate::error::RenderError;
use crate::renderer::{PageRenderer, RenderSession};
use async_trait::async_trait;
use fantoccini::error::{CmdError, NewSessionError};
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Local driver endpoints tried when the configured one refuses a session
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // Selenium / geckodriver default
    "http://127.0.0.1:4444",
];

/// Renders pages in headless Chrome through a WebDriver server.
///
/// Every [`open`](PageRenderer::open) starts a fresh browser session, so each
/// concurrently scraped page gets its own browser.
#[derive(Debug, Clone)]
pub struct WebDriverRenderer {
    webdriver_url: String,
    page_timeout: Duration,
    wait_for: Option<String>,
}

impl WebDriverRenderer {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            page_timeout: Duration::from_secs(45),
            wait_for: None,
        }
    }

    /// Renderer using the configured driver and timeout, waiting for listing items
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.webdriver_url)
            .with_page_timeout(config.page_timeout_secs)
            .with_wait_for(&config.selectors.item)
    }

    pub fn with_page_timeout(mut self, secs: u64) -> Self {
        self.page_timeout = Duration::from_secs(secs);
        self
    }

    /// CSS selector to wait for after navigation, so client-side rendering can finish
    pub fn with_wait_for(mut self, selector: &str) -> Self {
        self.wait_for = Some(selector.to_string());
        self
    }

    pub fn webdriver_url(&self) -> &str {
        &self.webdriver_url
    }

    /// Connects to the configured WebDriver, then to the common local fallbacks
    async fn connect(&self) -> Result<Client, RenderError> {
        let first_error = match self.start_session(&self.webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Started browser session at {}", self.webdriver_url);
                return Ok(client);
            }
            Err(e) => e,
        };

        for url in FALLBACK_WEBDRIVER_URLS {
            if url == self.webdriver_url {
                continue;
            }
            if let Ok(client) = self.start_session(url).await {
                ::log::info!(
                    "WebDriver at {} unavailable, using fallback {}",
                    self.webdriver_url,
                    url
                );
                return Ok(client);
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(first_error)
    }

    /// One session request, bounded by the page timeout
    async fn start_session(&self, webdriver_url: &str) -> Result<Client, RenderError> {
        match timeout(self.page_timeout, new_session(webdriver_url)).await {
            Ok(Ok(client)) => Ok(client),
            Ok(Err(e)) => Err(RenderError::Connect {
                webdriver_url: webdriver_url.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(RenderError::Timeout {
                url: webdriver_url.to_string(),
                secs: self.page_timeout.as_secs(),
            }),
        }
    }

    async fn navigate(&self, client: &Client, url: &str) -> Result<(), RenderError> {
        match timeout(self.page_timeout, client.goto(url)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(navigation_error(e, url)),
            Err(_) => {
                return Err(RenderError::Timeout {
                    url: url.to_string(),
                    secs: self.page_timeout.as_secs(),
                });
            }
        }

        if let Some(selector) = &self.wait_for {
            let waited = client
                .wait()
                .at_most(self.page_timeout)
                .for_element(Locator::Css(selector.as_str()))
                .await;
            if let Err(e) = waited {
                // An empty listing never shows the selector; keep whatever rendered.
                ::log::warn!("No {} appeared on {}: {}", selector, url, e);
            }
        }

        Ok(())
    }
}

#[async_trait]
impl PageRenderer for WebDriverRenderer {
    async fn open(&self, url: &str) -> Result<Box<dyn RenderSession>, RenderError> {
        Url::parse(url).map_err(|source| RenderError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let client = self.connect().await?;

        if let Err(e) = self.navigate(&client, url).await {
            if let Err(close_err) = close_client(client, url, self.page_timeout).await {
                ::log::warn!("Failed to close session after error on {}: {}", url, close_err);
            }
            return Err(e);
        }

        Ok(Box::new(WebDriverSession {
            client,
            url: url.to_string(),
            page_timeout: self.page_timeout,
        }))
    }
}

struct WebDriverSession {
    client: Client,
    url: String,
    page_timeout: Duration,
}

#[async_trait]
impl RenderSession for WebDriverSession {
    fn url(&self) -> &str {
        &self.url
    }

    async fn source(&mut self) -> Result<String, RenderError> {
        match timeout(self.page_timeout, self.client.source()).await {
            Ok(Ok(source)) => Ok(source),
            Ok(Err(e)) => Err(RenderError::Source {
                url: self.url.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(RenderError::Timeout {
                url: self.url.clone(),
                secs: self.page_timeout.as_secs(),
            }),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), RenderError> {
        let WebDriverSession {
            client,
            url,
            page_timeout,
        } = *self;
        close_client(client, &url, page_timeout).await
    }
}

async fn close_client(client: Client, url: &str, limit: Duration) -> Result<(), RenderError> {
    match timeout(limit, client.close()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(RenderError::Close {
            url: url.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Err(RenderError::Timeout {
            url: url.to_string(),
            secs: limit.as_secs(),
        }),
    }
}

async fn new_session(webdriver_url: &str) -> Result<Client, NewSessionError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(chrome_capabilities());
    builder.connect(webdriver_url).await
}

/// Headless Chrome flags suitable for containers
fn chrome_capabilities() -> Map<String, Value> {
    let mut capabilities = Map::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        json!({ "args": ["--headless", "--no-sandbox", "--disable-dev-shm-usage"] }),
    );
    capabilities
}

fn navigation_error(error: CmdError, url: &str) -> RenderError {
    let reason = error.to_string();
    if reason.contains("Unable to find session") {
        ::log::warn!("Lost browser session while opening {}", url);
    }
    RenderError::Navigation {
        url: url.to_string(),
        reason,
    }
}
