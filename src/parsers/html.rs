use crate::utils::collapse_whitespace;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Snapshot of a rendered page, queried after the browser session is released
pub struct Document {
    url: Url,
    html: Html,
}

impl Document {
    /// Parses the rendered source of the page at `url`
    pub fn parse(url: Url, source: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(source),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn query_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// First element below `container` matching `selector`
    pub fn query_one<'a>(
        &self,
        container: ElementRef<'a>,
        selector: &Selector,
    ) -> Option<ElementRef<'a>> {
        container.select(selector).next()
    }

    /// Resolves an href against the page URL, as a browser reports it
    pub fn resolve(&self, href: &str) -> Option<String> {
        match self.url.join(href.trim()) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(e) => {
                ::log::debug!("Unresolvable href {:?} on {}: {}", href, self.url, e);
                None
            }
        }
    }
}

/// Elements that start a new line in rendered text
const LINE_BREAKING_ELEMENTS: [&str; 22] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "header", "li", "ol", "p", "section", "td", "th", "tr", "ul",
];

/// Visible text of an element, whitespace collapsed and trimmed.
///
/// Line breaks and block boundaries separate words like they do in the browser,
/// so `10,00<br>inkl. MwSt` reads as `10,00 inkl. MwSt`.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(element, &mut text);
    collapse_whitespace(&text)
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let breaks = LINE_BREAKING_ELEMENTS.contains(&child.value().name());
            if breaks {
                out.push(' ');
            }
            push_text(child, out);
            if breaks {
                out.push(' ');
            }
        }
    }
}
