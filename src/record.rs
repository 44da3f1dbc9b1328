use serde::{Deserialize, Serialize};

/// One product extracted from the listing page.
///
/// Field names and order are the output contract of the JSON file, so the
/// serde renames are load-bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: f64,
    /// Currency glyph taken from the raw price text, e.g. '£'.
    #[serde(rename = "Price_Unit")]
    pub price_unit: char,
    /// Review score in [0, 5]; 0.0 when the listing carries no reviews.
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Short_Desc")]
    pub short_description: String,
    /// Serialized size of the detail page in whole kilobytes, truncated.
    #[serde(rename = "Page_Size")]
    pub page_size_kb: u64,
}

/// The complete output of one run: every record in document order plus the
/// median of their prices. Built once, written once.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(rename = "Products")]
    pub products: Vec<ProductRecord>,
    #[serde(rename = "Median")]
    pub median_price: f64,
}
