use std::borrow::Cow;
use std::sync::Arc;

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Url, redirect};

use crate::config::RequestConfig;
use crate::error::ScrapeError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const MAX_REDIRECTS: usize = 10;

/// Issues the one GET for `config.target_url()` and returns the page body.
pub fn fetch_html(config: &RequestConfig) -> Result<String, ScrapeError> {
    let client = build_client(config)?;
    let url = config.target_url();

    info!("Visiting {url}");
    let resp = client.get(url.clone()).send()?.error_for_status()?;
    let status = resp.status();
    let body = resp.bytes()?;
    info!("Fetched {} bytes from {url} ({status})", body.len());

    Ok(decode_body(url, &body))
}

fn build_client(config: &RequestConfig) -> Result<Client, ScrapeError> {
    Ok(Client::builder()
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .default_headers(request_headers(config))
        .cookie_provider(Arc::new(cookie_jar(config)))
        .build()?)
}

/// Caller headers on top of the defaults. A repeated name keeps its last value.
fn request_headers(config: &RequestConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    for (name, value) in config.headers() {
        let name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(name) => name,
            Err(_) => {
                warn!("Skipping header with invalid name '{name}'");
                continue;
            }
        };
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(_) => warn!("Skipping header '{name}' with invalid value"),
        }
    }

    headers
}

fn cookie_jar(config: &RequestConfig) -> Jar {
    let jar = Jar::default();
    for (name, value) in config.cookies() {
        jar.add_cookie_str(&format!("{name}={value}"), config.target_url());
    }
    jar
}

/// Invalid UTF-8 is replaced rather than treated as a failed fetch.
fn decode_body(url: &Url, body: &[u8]) -> String {
    match String::from_utf8_lossy(body) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("Error scraping '{url}': response body is not valid UTF-8, invalid bytes replaced");
            text
        }
    }
}
