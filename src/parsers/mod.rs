pub mod html;
pub mod product;

#[cfg(test)]
pub(crate) mod tests;

pub use html::{Document, element_text};
pub use product::ProductExtractor;
