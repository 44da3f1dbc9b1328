use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::record::ProductRecord;
use crate::source::DocumentSource;

pub mod detail;

static ENTRY_SELECTOR: OnceLock<Selector> = OnceLock::new();
static TITLE_SELECTOR: OnceLock<Selector> = OnceLock::new();
static PRICE_SELECTOR: OnceLock<Selector> = OnceLock::new();
static RATING_SELECTOR: OnceLock<Selector> = OnceLock::new();
static LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn entry_selector() -> &'static Selector {
    ENTRY_SELECTOR
        .get_or_init(|| Selector::parse("div.oct-teaser__contents-panel--main-content").unwrap())
}

fn title_selector() -> &'static Selector {
    TITLE_SELECTOR.get_or_init(|| Selector::parse("h3.oct-teaser__title").unwrap())
}

fn price_selector() -> &'static Selector {
    PRICE_SELECTOR.get_or_init(|| Selector::parse("p.oct-teaser__productPrice").unwrap())
}

fn rating_selector() -> &'static Selector {
    RATING_SELECTOR
        .get_or_init(|| Selector::parse("div.oct-reviews__optionalText a[aria-label]").unwrap())
}

fn link_selector() -> &'static Selector {
    LINK_SELECTOR.get_or_init(|| Selector::parse("a.oct-teaser__title-link[href]").unwrap())
}

/// Walks every listing entry in the document and builds one record per
/// entry, in document order. Detail pages are loaded through `source`,
/// resolving their links against `base`.
pub fn extract_products(
    document: &Html,
    source: &dyn DocumentSource,
    base: &str,
) -> Result<Vec<ProductRecord>> {
    info!("started extracting product details from listing");

    let mut products = Vec::new();
    for entry in document.select(entry_selector()) {
        products.push(extract_entry(&entry, source, base)?);
    }

    info!("completed extracting {} product(s) from listing", products.len());
    Ok(products)
}

fn extract_entry(
    entry: &ElementRef,
    source: &dyn DocumentSource,
    base: &str,
) -> Result<ProductRecord> {
    let title = entry
        .select(title_selector())
        .next()
        .map(element_text)
        .ok_or(Error::MissingTitle)?;

    let price_text = entry
        .select(price_selector())
        .next()
        .map(element_text)
        .unwrap_or_default();
    let (price, price_unit) = parse_price(&price_text)?;

    let rating = parse_rating(entry, &title);

    let href = entry
        .select(link_selector())
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| Error::MissingDetailLink(title.clone()))?;
    let decoded = percent_decode_str(href).decode_utf8_lossy();
    let detail_address = source.resolve(base, &decoded)?;

    let (short_description, page_size_kb) = detail::resolve_detail(source, &detail_address);

    Ok(ProductRecord {
        title,
        price,
        price_unit,
        rating,
        short_description,
        page_size_kb,
    })
}

/// Splits a raw price string like "£9.5" into the numeric magnitude and the
/// currency glyph. The magnitude is everything ASCII; the glyph is the first
/// non-ASCII character.
fn parse_price(raw: &str) -> Result<(f64, char)> {
    let magnitude: String = raw.chars().filter(char::is_ascii).collect();
    let price = magnitude
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::PriceParse(raw.to_string()))?;

    let unit = raw
        .chars()
        .find(|c| !c.is_ascii())
        .ok_or_else(|| Error::PriceParse(raw.to_string()))?;

    Ok((price, unit))
}

/// Leading decimal of the review label, e.g. 4.5 from "4.5 out of 5".
/// A missing or malformed label defaults to 0.0 and is never an error.
fn parse_rating(entry: &ElementRef, title: &str) -> f64 {
    let parsed = entry
        .select(rating_selector())
        .next()
        .and_then(|a| a.value().attr("aria-label"))
        .and_then(|label| {
            let prefix: String = label.chars().take(4).collect();
            prefix.trim().parse::<f64>().ok()
        });

    match parsed {
        Some(rating) => rating,
        None => {
            warn!("review data not available for product {}, defaulting to 0", title);
            0.0
        }
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
