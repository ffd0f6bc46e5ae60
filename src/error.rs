use thiserror::Error;

/// Page-level failures raised by a renderer. The page worker turns every one
/// of these into an empty result for the page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to start a browser session at {webdriver_url}: {reason}")]
    Connect {
        webdriver_url: String,
        reason: String,
    },

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("could not read the rendered source of {url}: {reason}")]
    Source { url: String, reason: String },

    #[error("failed to close the session for {url}: {reason}")]
    Close { url: String, reason: String },

    #[error("timed out after {secs}s waiting on {url}")]
    Timeout { url: String, secs: u64 },

    #[error("invalid page url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Item-level failures. Only the name lookup can fail an item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no name anchor in item")]
    MissingName,

    #[error("name anchor has no title attribute")]
    MissingTitle,
}

/// Problems with the job configuration, reported before any page is fetched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field} selector {selector:?}: {reason}")]
    Selector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    #[error("competitor label must not be blank")]
    EmptyCompetitor,

    #[error("config declares no job groups")]
    NoGroups,

    #[error("group {label:?} selects no pages")]
    EmptyPages { label: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures of the git publishing step. These never affect the scrape result.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("could not run `git {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {command}` exited with {status}")]
    Failed { command: String, status: String },
}
