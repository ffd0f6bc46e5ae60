pub mod crawler;
pub mod dispatch;
pub mod page;

pub use crawler::PageScraper;
pub use dispatch::Dispatcher;
pub use page::PageWorker;
