use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't parse the selector: {0}")]
    InvalidSelector(String),
    #[error("The element you are trying to scrape for is missing: {0}")]
    MissingElement(&'static str),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Invalid header value: {0:?}")]
    InvalidHeader(String),
    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid delay range: {min}..={max} seconds")]
    InvalidDelay { min: f64, max: f64 },
}
