use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced by the page index in a paged URL template
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// One configured group of pages, dispatched as a unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobGroup {
    /// Name used in log lines
    pub label: String,

    /// URL template for paged groups, or the page URL itself for single pages
    pub url: String,

    /// Pages to fetch. `None` fetches `url` once, as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageSelection>,
}

/// Page indices of a paged group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageSelection {
    /// Inclusive range
    Range { first: u32, last: u32 },
    /// Explicit indices, fetched in the given order
    List(Vec<u32>),
}

impl PageSelection {
    pub fn indices(&self) -> Vec<u32> {
        match self {
            PageSelection::Range { first, last } => (*first..=*last).collect(),
            PageSelection::List(pages) => pages.clone(),
        }
    }
}

impl JobGroup {
    /// A group covering pages `first..=last` of a paged listing
    pub fn paged(label: &str, url_template: &str, first: u32, last: u32) -> Self {
        Self {
            label: label.to_string(),
            url: url_template.to_string(),
            pages: Some(PageSelection::Range { first, last }),
        }
    }

    /// A group consisting of one standalone page
    pub fn single(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            pages: None,
        }
    }

    /// Expands the group into page jobs, in submission order
    pub fn jobs(&self) -> Vec<PageJob> {
        match &self.pages {
            Some(pages) => pages
                .indices()
                .into_iter()
                .map(|page| PageJob::paged(&self.label, &self.url, page))
                .collect(),
            None => vec![PageJob::single(&self.label, &self.url)],
        }
    }
}

/// A single page to scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageJob {
    group: String,
    page: Option<u32>,
    url: String,
}

impl PageJob {
    /// Resolves `template` for `page`: the placeholder is substituted when
    /// present, otherwise the index is appended (`...?p=` style listings).
    pub fn paged(group: &str, template: &str, page: u32) -> Self {
        let url = if template.contains(PAGE_PLACEHOLDER) {
            template.replace(PAGE_PLACEHOLDER, &page.to_string())
        } else {
            format!("{}{}", template, page)
        };

        Self {
            group: group.to_string(),
            page: Some(page),
            url,
        }
    }

    pub fn single(group: &str, url: &str) -> Self {
        Self {
            group: group.to_string(),
            page: None,
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }
}

impl fmt::Display for PageJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(f, "{} page {} ({})", self.group, page, self.url),
            None => write!(f, "{} ({})", self.group, self.url),
        }
    }
}
