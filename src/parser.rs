use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::models::ScrapedResult;

pub const TITLE_SELECTOR: &str = "h2.product-title";
pub const PRICE_SELECTOR: &str = "span.price";
pub const IMAGE_SELECTOR: &str = "img.product-image";

/// Runs the three product selectors over `html`.
///
/// Titles and prices are the element's text with surrounding whitespace
/// trimmed. Image entries are the raw `src` attribute, or `""` when the
/// attribute is missing.
pub fn extract_products(html: &str) -> ScrapedResult {
    let doc = Html::parse_document(html);

    let titles = select_all(&doc, TITLE_SELECTOR, element_text);
    let prices = select_all(&doc, PRICE_SELECTOR, element_text);
    let images = select_all(&doc, IMAGE_SELECTOR, |img| match img.value().attr("src") {
        Some(src) => src.to_string(),
        None => {
            debug!("{IMAGE_SELECTOR} without src attribute");
            String::new()
        }
    });

    ScrapedResult {
        titles,
        prices,
        images,
    }
}

fn select_all<F>(doc: &Html, selector: &'static str, extract: F) -> Vec<String>
where
    F: Fn(ElementRef<'_>) -> String,
{
    // The selectors are constants above; a parse failure is a typo in them.
    let parsed = Selector::parse(selector).expect("product selectors are valid CSS");
    let values: Vec<String> = doc.select(&parsed).map(extract).collect();
    debug!("{selector}: {} matches", values.len());
    values
}

fn element_text(e: ElementRef<'_>) -> String {
    e.text().collect::<String>().trim().to_string()
}
