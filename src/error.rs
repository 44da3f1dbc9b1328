//! Error types for the scraper.

use thiserror::Error;

/// Result type for scraper operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The backing resource for a document address is unreachable.
    #[error("document not found: {0}")]
    NotFound(String),

    /// A listing entry has no title element. Always fatal for the run.
    #[error("listing entry is missing its title")]
    MissingTitle,

    /// The raw price text contains no parseable numeric magnitude or no
    /// currency glyph.
    #[error("could not parse price from {0:?}")]
    PriceParse(String),

    /// A listing entry has no detail-page anchor.
    #[error("listing entry {0:?} has no detail link")]
    MissingDetailLink(String),

    /// The aggregation step received an empty price list.
    #[error("no prices available to compute a median")]
    InsufficientData,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
