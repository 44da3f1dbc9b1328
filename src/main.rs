mod error;
mod extractor;
mod logging;
mod output;
mod record;
mod source;
mod stats;

use std::env;
use std::path::Path;
use std::process;

use tracing::{error, info};

use error::Result;
use record::ResultSet;
use source::{DocumentSource, FileSource, HttpSource};

const OUTPUT_DIR: &str = "output";
const OUTPUT_FILE: &str = "product_details.json";

fn main() {
    if let Err(e) = logging::init("product_scraper") {
        eprintln!("Failed to set up logging: {e}");
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map_or("file", |s| s.as_str());

    let outcome = match (command, args.get(2)) {
        ("file", Some(path)) => run(&FileSource, path),
        ("live", Some(url)) => HttpSource::new().and_then(|source| run(&source, url)),
        _ => {
            print_usage();
            return;
        }
    };

    match outcome {
        Ok(()) => info!("scrape process completed successfully"),
        Err(e) => {
            error!("scrape process failed: {}", e);
            process::exit(1);
        }
    }
}

/// The full pipeline: load the listing, extract every record, compute the
/// median price, write the JSON file.
fn run(source: &dyn DocumentSource, listing_address: &str) -> Result<()> {
    info!("scrape process started for {}", listing_address);

    let document = source.load(listing_address)?;
    let products = extractor::extract_products(&document, source, listing_address)?;

    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    let median_price = stats::median(&prices)?;

    let result = ResultSet { products, median_price };
    let path = output::write_result_set(&result, Path::new(OUTPUT_DIR), OUTPUT_FILE)?;
    info!(
        "wrote {} product(s) and median {} to {}",
        result.products.len(),
        result.median_price,
        path.display()
    );
    Ok(())
}

fn print_usage() {
    println!("--- Product Listing Scraper ---");
    println!("Usage: cargo run -- [COMMAND] [ADDRESS]");
    println!("\nCommands:");
    println!("  file <path>   Extract products from a local listing HTML file.");
    println!("  live <url>    Extract products from a live listing page.");
}
