//! Boundary to the engine that turns a URL into rendered HTML.
//!
//! A [`PageRenderer`] hands out one [`RenderSession`] per page. The caller owns
//! the session and must [`close`](RenderSession::close) it whatever happens in
//! between; closing consumes the session so it cannot be reused afterwards.

pub mod fixture;
pub mod web;

pub use fixture::FixtureRenderer;
pub use web::WebDriverRenderer;

use crate::error::RenderError;
use async_trait::async_trait;

#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Starts a session and navigates it to `url`.
    ///
    /// When navigation fails the renderer releases the session itself before
    /// returning the error.
    async fn open(&self, url: &str) -> Result<Box<dyn RenderSession>, RenderError>;
}

#[async_trait]
pub trait RenderSession: Send {
    /// URL the session was opened on
    fn url(&self) -> &str;

    /// Current rendered HTML of the page
    async fn source(&mut self) -> Result<String, RenderError>;

    /// Ends the session
    async fn close(self: Box<Self>) -> Result<(), RenderError>;
}
