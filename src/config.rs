use crate::error::ConfigError;
use crate::jobs::JobGroup;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Configuration for one catalog run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Label written to the Competitor column and prefixed to every name
    #[serde(default = "default_competitor")]
    pub competitor: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of pages rendered at the same time
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Upper bound for navigation, element wait and source retrieval of a page
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Where the CSV export is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// CSS selectors for the listing markup
    #[serde(default)]
    pub selectors: ProductSelectors,

    /// Page groups, dispatched one after another in this order
    pub groups: Vec<JobGroup>,
}

/// CSS selectors used by the extraction cascade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSelectors {
    /// Item container, one per product on a listing page
    pub item: String,
    /// Anchor carrying the product title and link
    pub name: String,
    pub part_number: String,
    pub price: String,
    pub inventory: String,
}

impl Default for ProductSelectors {
    fn default() -> Self {
        Self {
            item: "div.cms-listing-col".to_string(),
            name: "a.product-name".to_string(),
            part_number: ".product-ordernumber".to_string(),
            price: "span.product-price".to_string(),
            inventory: ".badge.bg-success span".to_string(),
        }
    }
}

/// Parsed form of [`ProductSelectors`]
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub item: Selector,
    pub name: Selector,
    pub part_number: Selector,
    pub price: Selector,
    pub inventory: Selector,
}

impl ProductSelectors {
    pub fn compile(&self) -> Result<CompiledSelectors, ConfigError> {
        Ok(CompiledSelectors {
            item: compile_selector("item", &self.item)?,
            name: compile_selector("name", &self.name)?,
            part_number: compile_selector("part_number", &self.part_number)?,
            price: compile_selector("price", &self.price)?,
            inventory: compile_selector("inventory", &self.inventory)?,
        })
    }
}

fn compile_selector(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::Selector {
        field,
        selector: selector.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Default competitor label
fn default_competitor() -> String {
    "American Horsepower".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    10
}

fn default_page_timeout_secs() -> u64 {
    45
}

fn default_output() -> PathBuf {
    PathBuf::from("american_horsepower_products.csv")
}

impl CatalogConfig {
    /// Create a configuration with default values for the given groups
    pub fn new(groups: Vec<JobGroup>) -> Self {
        Self {
            competitor: default_competitor(),
            webdriver_url: default_webdriver_url(),
            max_concurrency: default_max_concurrency(),
            page_timeout_secs: default_page_timeout_secs(),
            output: default_output(),
            selectors: ProductSelectors::default(),
            groups,
        }
    }

    /// Load and validate configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the competitor label, that every group selects at least one page
    /// and that all selectors parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.competitor.trim().is_empty() {
            return Err(ConfigError::EmptyCompetitor);
        }
        if self.groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }
        for group in &self.groups {
            if group.jobs().is_empty() {
                return Err(ConfigError::EmptyPages {
                    label: group.label.clone(),
                });
            }
        }
        self.selectors.compile()?;
        Ok(())
    }
}
