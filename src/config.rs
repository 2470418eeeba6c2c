use std::path::{Path, PathBuf};

use clap::Parser;
use log::warn;
use reqwest::Url;

use crate::error::ScrapeError;

pub const DEFAULT_OUTPUT: &str = "output.json";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "webscraper")]
#[command(about = "A flexible web scraper CLI tool", long_about = None)]
pub struct Args {
    /// URL to scrape
    #[arg(short, long)]
    pub url: String,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Custom header as "name:value" (can specify multiple)
    #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Custom cookie as "name=value" (can specify multiple)
    #[arg(short = 'C', long = "cookie", value_name = "NAME=VALUE")]
    pub cookies: Vec<String>,
}

/// Immutable settings for a single scrape, built once at startup.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    target_url: Url,
    output_path: PathBuf,
    headers: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
}

impl RequestConfig {
    /// Validates the target URL and parses the raw header and cookie
    /// arguments. Malformed headers and cookies are dropped, not rejected.
    pub fn new<H, C>(
        url: &str,
        output_path: impl Into<PathBuf>,
        headers: H,
        cookies: C,
    ) -> Result<Self, ScrapeError>
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let target_url = parse_target_url(url)?;

        let headers = headers
            .into_iter()
            .filter_map(|raw| {
                let parsed = parse_header(raw.as_ref());
                if parsed.is_none() {
                    warn!("Skipping malformed header '{}' (expected name:value)", raw.as_ref());
                }
                parsed
            })
            .collect();

        let cookies = cookies
            .into_iter()
            .filter_map(|raw| {
                let parsed = parse_cookie(raw.as_ref());
                if parsed.is_none() {
                    warn!(
                        "Skipping malformed cookie '{}' (expected name=value without ';', ',', quotes or spaces)",
                        raw.as_ref()
                    );
                }
                parsed
            })
            .collect();

        Ok(Self {
            target_url,
            output_path: output_path.into(),
            headers,
            cookies,
        })
    }

    pub fn target_url(&self) -> &Url {
        &self.target_url
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Well-formed headers in argument order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Well-formed cookies in argument order.
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }
}

impl TryFrom<Args> for RequestConfig {
    type Error = ScrapeError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        RequestConfig::new(&args.url, args.output, &args.headers, &args.cookies)
    }
}

fn parse_target_url(raw: &str) -> Result<Url, ScrapeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScrapeError::MissingRequiredFlag("url"));
    }

    let url = Url::parse(raw).map_err(|e| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScrapeError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Splits `"name:value"` on the first colon.
pub fn parse_header(raw: &str) -> Option<(String, String)> {
    split_pair(raw, ':')
}

/// Splits `"name=value"` on the first equals sign. The name must be an HTTP
/// token and the value must be cookie octets only, so `;`, `,`, `"`, `\`
/// and whitespace inside the value make the cookie malformed.
pub fn parse_cookie(raw: &str) -> Option<(String, String)> {
    let (name, value) = split_pair(raw, '=')?;
    if !name.bytes().all(is_token_byte) || !value.bytes().all(is_cookie_octet) {
        return None;
    }
    Some((name, value))
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

fn split_pair(raw: &str, separator: char) -> Option<(String, String)> {
    let (name, value) = raw.split_once(separator)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
