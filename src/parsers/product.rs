use crate::config::CompiledSelectors;
use crate::error::ExtractError;
use crate::parsers::html::{Document, element_text};
use crate::results::{ListingFields, ProductRecord};
use scraper::{ElementRef, Selector};

/// Runs the field extraction cascade over listing items.
///
/// Only the name anchor is required. Every other field is looked up on its own
/// and a miss simply leaves that field empty; see [`ProductRecord::new`] for the
/// defaults applied to missing values.
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    competitor: String,
    selectors: CompiledSelectors,
}

impl ProductExtractor {
    pub fn new(competitor: &str, selectors: CompiledSelectors) -> Self {
        Self {
            competitor: competitor.to_string(),
            selectors,
        }
    }

    /// Item containers of the page, in document order
    pub fn items<'a>(&self, doc: &'a Document) -> Vec<ElementRef<'a>> {
        doc.query_all(&self.selectors.item)
    }

    /// Extracts one record from an item container
    pub fn extract(
        &self,
        doc: &Document,
        item: ElementRef<'_>,
    ) -> Result<ProductRecord, ExtractError> {
        let anchor = doc
            .query_one(item, &self.selectors.name)
            .ok_or(ExtractError::MissingName)?;
        let title = anchor
            .value()
            .attr("title")
            .ok_or(ExtractError::MissingTitle)?;

        let fields = ListingFields {
            url: product_url(doc, anchor),
            part_number: field_text(doc, item, &self.selectors.part_number),
            price: field_text(doc, item, &self.selectors.price),
            inventory: field_text(doc, item, &self.selectors.inventory),
        };

        Ok(ProductRecord::new(&self.competitor, title, fields))
    }
}

fn product_url(doc: &Document, anchor: ElementRef<'_>) -> Option<String> {
    anchor
        .value()
        .attr("href")
        .and_then(|href| doc.resolve(href))
}

fn field_text(doc: &Document, item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    doc.query_one(item, selector).map(element_text)
}
