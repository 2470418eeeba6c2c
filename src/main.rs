use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use product_page_scraper::{Args, RequestConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RequestConfig::try_from(Args::parse())?;
    product_page_scraper::run(&config)?;

    println!(
        "Scraping completed. Data saved to {}",
        config.output_path().display()
    );
    Ok(())
}
