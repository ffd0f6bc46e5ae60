mod product_extractor_tests;

/// Listing markup shaped like the catalog's product grid
pub(crate) mod fixtures {
    use crate::config::ProductSelectors;
    use crate::parsers::ProductExtractor;

    pub const COMPETITOR: &str = "Competitor";

    pub fn extractor() -> ProductExtractor {
        ProductExtractor::new(COMPETITOR, ProductSelectors::default().compile().unwrap())
    }

    /// An item with every field populated
    pub fn product(title: &str, href: &str, part_number: &str, price: &str, stock: &str) -> String {
        format!(
            r#"<div class="cms-listing-col col-sm-6 col-lg-4">
  <div class="card product-box">
    <div class="product-info">
      <a href="{href}" class="product-name" title="{title}">{title}</a>
      <div class="product-ordernumber">
        {part_number}
      </div>
      <div class="product-price-info">
        <span class="product-price">
          {price}
        </span>
      </div>
      <div class="badge bg-success"><span> {stock} </span></div>
    </div>
  </div>
</div>"#
        )
    }

    /// An item with only the name anchor
    pub fn bare_product(title: &str, href: &str) -> String {
        format!(
            r#"<div class="cms-listing-col">
  <div class="product-info">
    <a href="{href}" class="product-name" title="{title}">{title}</a>
  </div>
</div>"#
        )
    }

    /// An item without a name anchor
    pub fn nameless_product(price: &str) -> String {
        format!(
            r#"<div class="cms-listing-col">
  <div class="product-info">
    <span class="product-name">No link here</span>
    <span class="product-price">{price}</span>
  </div>
</div>"#
        )
    }

    pub fn listing_page(items: &[String]) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head><title>Catalog</title></head>
<body>
  <header><a class="navigation-link" href="/en/">Home</a></header>
  <div class="cms-listing-row js-listing-wrapper">
{}
  </div>
  <footer>Prices incl. VAT</footer>
</body>
</html>"#,
            items.join("\n")
        )
    }
}
