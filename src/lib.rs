//! HUNT: a sequential product listing scraper.
//! Fetches `{base}/products?page=N` one page at a time, extracts title, price and rating
//! from each product container and writes everything to a CSV file.

mod error;
mod macros;

pub mod cli;
pub mod config;
pub mod delay;
pub mod logging;
pub mod output;
pub mod parse;
pub mod process;
pub mod product;
pub mod request;

pub use error::{Error, Result};
pub use process::Harvester;
pub use product::Product;

pub const DEFAULT_PAGES: usize = 5;
pub const DEFAULT_OUTPUT: &str = "hunted_products.csv";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
