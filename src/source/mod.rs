use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;
use tracing::{error, info};
use url::Url;

use crate::error::{Error, Result};

/// A place documents can be loaded from, addressed by string.
///
/// The extraction code only ever talks to this trait, so it works the same
/// whether the listing lives on disk or on a live site.
pub trait DocumentSource {
    /// Loads and parses the document at `address`. Fails with
    /// [`Error::NotFound`] when the backing resource is unreachable.
    fn load(&self, address: &str) -> Result<Html>;

    /// Resolves a (decoded) relative link against the listing's address.
    fn resolve(&self, base: &str, link: &str) -> Result<String>;

    /// Serialized UTF-8 bytes of the reparsed document tree. This is what
    /// page sizes are measured on, which can differ from the raw payload.
    fn serialize(&self, document: &Html) -> Vec<u8> {
        document.root_element().html().into_bytes()
    }
}

/// Loads documents from local HTML files.
pub struct FileSource;

impl DocumentSource for FileSource {
    fn load(&self, address: &str) -> Result<Html> {
        info!("started loading document from {}", address);

        let path = Path::new(address);
        if !path.exists() {
            error!("file not found: {}", address);
            return Err(Error::NotFound(address.to_string()));
        }

        // read_to_string enforces UTF-8
        let html = fs::read_to_string(path)?;
        info!("completed loading document from {}", address);
        Ok(Html::parse_document(&html))
    }

    fn resolve(&self, base: &str, link: &str) -> Result<String> {
        let parent = Path::new(base).parent().unwrap_or_else(|| Path::new(""));
        Ok(parent.join(link).to_string_lossy().into_owned())
    }
}

/// Loads documents from a live site over HTTP.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    fn load(&self, address: &str) -> Result<Html> {
        info!("started loading document from {}", address);

        let response = self
            .client
            .get(address)
            .send()
            .map_err(|e| Error::NotFound(format!("{address}: {e}")))?;

        if !response.status().is_success() {
            error!("request for {} failed: {}", address, response.status());
            return Err(Error::NotFound(format!("{address}: {}", response.status())));
        }

        let body = response.text()?;
        info!("completed loading document from {}", address);
        Ok(Html::parse_document(&body))
    }

    fn resolve(&self, base: &str, link: &str) -> Result<String> {
        let mut resolved = Url::parse(base)?.join(link)?;
        resolved.set_fragment(None);
        Ok(resolved.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_loads_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.html");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "<html><body><p>hello</p></body></html>").unwrap();

        let document = FileSource.load(path.to_str().unwrap()).unwrap();
        let selector = scraper::Selector::parse("p").unwrap();
        let text: String = document.select(&selector).next().unwrap().text().collect();
        assert_eq!(text, "hello");
    }

    #[test]
    fn file_source_missing_document_is_not_found() {
        let result = FileSource.load("does/not/exist.html");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn file_source_resolves_against_parent_directory() {
        let resolved = FileSource
            .resolve("/data/shop/listing.html", "products/item.html")
            .unwrap();
        assert_eq!(resolved, "/data/shop/products/item.html");
    }

    #[test]
    fn http_source_resolves_relative_links() {
        let source = HttpSource::new().unwrap();
        let resolved = source
            .resolve("https://shop.example/wellness/sleep", "./products/item#reviews")
            .unwrap();
        assert_eq!(resolved, "https://shop.example/wellness/products/item");
    }

    #[test]
    fn serialization_measures_the_reparsed_tree() {
        let document = Html::parse_document("<html><body>x</body></html>");
        let bytes = FileSource.serialize(&document);
        assert_eq!(bytes, document.root_element().html().into_bytes());
    }
}
