use super::fixtures::{
    COMPETITOR, bare_product, extractor, listing_page, nameless_product, product,
};
use crate::error::ExtractError;
use crate::parsers::Document;
use crate::results::UNAVAILABLE;
use url::Url;

fn document(items: &[String]) -> Document {
    let url = Url::parse("https://shop.example/en/catalog?order=name-asc&p=1").unwrap();
    Document::parse(url, &listing_page(items))
}

#[test]
fn test_full_item() {
    let doc = document(&[product(
        "Edelbrock Intake",
        "/en/edelbrock-intake/AH-2001",
        "AH-2001",
        "€ 349,90 *",
        "In stock",
    )]);
    let extractor = extractor();
    let items = extractor.items(&doc);
    assert_eq!(items.len(), 1);

    let record = extractor.extract(&doc, items[0]).unwrap();
    assert_eq!(record.competitor(), COMPETITOR);
    assert_eq!(record.name(), "Competitor - Edelbrock Intake");
    assert_eq!(
        record.url(),
        Some("https://shop.example/en/edelbrock-intake/AH-2001")
    );
    assert_eq!(record.part_number(), Some("AH-2001"));
    assert_eq!(record.price(), "€ 349,90 *");
    assert_eq!(record.inventory(), "In stock");
}

#[test]
fn test_absolute_href_is_kept() {
    let doc = document(&[bare_product("Widget", "https://cdn.example/widget")]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.url(), Some("https://cdn.example/widget"));
}

#[test]
fn test_title_quotes_are_stripped() {
    let doc = document(&[bare_product("Lift Kit 5&quot; Front", "/en/lift")]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.name(), "Competitor - Lift Kit 5 Front");
}

#[test]
fn test_long_url_without_price_or_inventory() {
    let href = format!("https://shop.example/{}", "x".repeat(300 - 21));
    assert_eq!(href.len(), 300);

    let doc = document(&[bare_product("Widget", &href)]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();

    assert_eq!(record.name(), "Competitor - Widget");
    assert_eq!(record.url(), None);
    assert_eq!(record.part_number(), None);
    assert_eq!(record.price(), UNAVAILABLE);
    assert_eq!(record.inventory(), UNAVAILABLE);
}

#[test]
fn test_missing_name_anchor_fails_item() {
    let doc = document(&[nameless_product("€ 10,00")]);
    let extractor = extractor();
    let err = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap_err();
    assert_eq!(err, ExtractError::MissingName);
}

#[test]
fn test_missing_title_fails_item() {
    let html = r#"<div class="cms-listing-col"><a class="product-name" href="/en/x">X</a></div>"#;
    let doc = document(&[html.to_string()]);
    let extractor = extractor();
    let err = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap_err();
    assert_eq!(err, ExtractError::MissingTitle);
}

#[test]
fn test_missing_href_only_drops_url() {
    let html = r#"<div class="cms-listing-col">
        <a class="product-name" title="Gasket">Gasket</a>
        <span class="product-price">€ 4,50</span>
    </div>"#;
    let doc = document(&[html.to_string()]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.url(), None);
    assert_eq!(record.price(), "€ 4,50");
}

#[test]
fn test_empty_inventory_badge_is_unavailable() {
    let doc = document(&[product("Widget", "/en/w", "AH-1", "€ 1,00", "  ")]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.inventory(), UNAVAILABLE);
    assert_eq!(record.part_number(), Some("AH-1"));
}

#[test]
fn test_out_of_stock_badge_is_not_inventory() {
    let html = r#"<div class="cms-listing-col">
        <a class="product-name" title="Widget" href="/en/w">Widget</a>
        <div class="badge bg-danger"><span>Sold out</span></div>
    </div>"#;
    let doc = document(&[html.to_string()]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.inventory(), UNAVAILABLE);
}

#[test]
fn test_nested_price_text_is_flattened() {
    let html = r#"<div class="cms-listing-col">
        <a class="product-name" title="Widget" href="/en/w">Widget</a>
        <span class="product-price">€ <b>1.299</b>,00
            *</span>
    </div>"#;
    let doc = document(&[html.to_string()]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.price(), "€ 1.299,00 *");
}

#[test]
fn test_items_keep_document_order() {
    let doc = document(&[
        bare_product("Alpha", "/en/a"),
        nameless_product("€ 2,00"),
        bare_product("Bravo", "/en/b"),
        bare_product("Charlie", "/en/c"),
    ]);
    let extractor = extractor();
    let names: Vec<String> = extractor
        .items(&doc)
        .into_iter()
        .filter_map(|item| extractor.extract(&doc, item).ok())
        .map(|record| record.name().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "Competitor - Alpha",
            "Competitor - Bravo",
            "Competitor - Charlie"
        ]
    );
}

#[test]
fn test_page_without_items() {
    let doc = document(&[]);
    assert!(extractor().items(&doc).is_empty());
}

#[test]
fn test_line_break_in_price_keeps_words_apart() {
    let doc = document(&[product(
        "Oil Filter",
        "/en/oil-filter",
        "AH-7",
        "€ 10,00<br>inkl. MwSt",
        "In stock",
    )]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.price(), "€ 10,00 inkl. MwSt");
}

#[test]
fn test_block_children_in_part_number_keep_words_apart() {
    let doc = document(&[product(
        "Spark Plug",
        "/en/spark-plug",
        "<div>Art.-Nr.</div><div>AH-1</div>",
        "€ 4,50",
        "In stock",
    )]);
    let extractor = extractor();
    let record = extractor.extract(&doc, extractor.items(&doc)[0]).unwrap();
    assert_eq!(record.part_number(), Some("Art.-Nr. AH-1"));
}
