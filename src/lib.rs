pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;

use log::info;

pub use config::{Args, RequestConfig};
pub use error::ScrapeError;
pub use models::ScrapedResult;

/// Fetches the target page, extracts products and writes them as JSON to the
/// configured output path. Nothing is written if an earlier step fails.
pub fn run(config: &RequestConfig) -> Result<ScrapedResult, ScrapeError> {
    let html = fetcher::fetch_html(config)?;
    let result = parser::extract_products(&html);
    info!(
        "Extracted {} titles, {} prices, {} images",
        result.titles.len(),
        result.prices.len(),
        result.images.len()
    );

    let json = archiver::to_json(&result)?;
    archiver::save_to_file(&json, config.output_path())?;
    Ok(result)
}
