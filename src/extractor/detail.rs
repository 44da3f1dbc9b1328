use std::sync::OnceLock;

use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::source::DocumentSource;

static DESCRIPTION_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn description_selector() -> &'static Selector {
    DESCRIPTION_SELECTOR
        .get_or_init(|| Selector::parse(r#"div.product_text p[itemprop="description"]"#).unwrap())
}

/// Loads a product's detail page and pulls its short description and
/// serialized size in whole kilobytes.
///
/// Failures here are record-scoped: any load or parse problem is logged and
/// replaced by the `("", 0)` default so one broken detail page never aborts
/// the rest of the run.
pub fn resolve_detail(source: &dyn DocumentSource, address: &str) -> (String, u64) {
    info!("started extracting short description and page size from {}", address);

    let document = match source.load(address) {
        Ok(document) => document,
        Err(e) => {
            warn!("fallback enabled for {}: {}", address, e);
            warn!("defaulting short description to empty string and size to 0");
            return (String::new(), 0);
        }
    };

    let short_description = match extract_description(&document) {
        Some(text) => text,
        None => {
            warn!("no description found on {}, defaulting to empty string", address);
            String::new()
        }
    };

    // Size of the reparsed tree's serialization, truncated to whole KB.
    // This approximates transferred weight rather than the raw byte count.
    let page_size_kb = source.serialize(&document).len() as u64 / 1024;

    info!("completed extracting short description and page size from {}", address);
    (short_description, page_size_kb)
}

fn extract_description(document: &Html) -> Option<String> {
    document
        .select(description_selector())
        .next()
        .map(|p| p.text().collect::<String>())
}
