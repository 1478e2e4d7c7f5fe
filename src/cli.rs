use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::HarvestConfig;
use crate::logging::LevelFilter;
use crate::{Result, DEFAULT_OUTPUT, DEFAULT_PAGES, USER_AGENT};

#[derive(Parser, Debug)]
#[command(name = "hunt", version, about = "Hunt: Web scraper for product information")]
pub struct Cli {
    /// Base URL of the e-commerce site
    pub url: String,

    /// Number of pages to hunt
    #[arg(short, long, default_value_t = DEFAULT_PAGES)]
    pub pages: usize,

    /// Output CSV filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Shortest pause between pages, in seconds
    #[arg(long, default_value_t = 1.0)]
    pub min_delay: f64,

    /// Longest pause between pages, in seconds
    #[arg(long, default_value_t = 3.0)]
    pub max_delay: f64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    pub fn into_config(self) -> Result<HarvestConfig> {
        let config = HarvestConfig {
            base_url: self.url,
            pages: self.pages,
            output: self.output,
            user_agent: self.user_agent,
            timeout: Duration::from_secs(self.timeout),
            min_delay: self.min_delay,
            max_delay: self.max_delay,
        };
        config.validate()?;
        Ok(config)
    }
}
