use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("missing required flag: --{0}")]
    MissingRequiredFlag(&'static str),
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("error visiting URL: {0}")]
    FetchFailed(#[from] reqwest::Error),
    #[error("error marshaling JSON: {0}")]
    MarshalFailed(#[from] serde_json::Error),
    #[error("error writing to file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
