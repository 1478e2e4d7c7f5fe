use std::path::PathBuf;
use std::time::Duration;

use crate::delay::Throttle;
use crate::{Result, DEFAULT_OUTPUT, DEFAULT_PAGES, USER_AGENT};

/// Everything one harvest run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestConfig {
    pub base_url: String,
    pub pages: usize,
    pub output: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    /// Lower bound of the pause between pages, in seconds.
    pub min_delay: f64,
    /// Upper bound of the pause between pages, in seconds.
    pub max_delay: f64,
}

impl HarvestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            pages: DEFAULT_PAGES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            min_delay: 1.0,
            max_delay: 3.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.throttle().map(drop)
    }

    pub fn throttle(&self) -> Result<Throttle> {
        Throttle::new(self.min_delay, self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let config = HarvestConfig::new("https://shop.test");
        assert_eq!(config.pages, 5);
        assert_eq!(config.output, PathBuf::from("hunted_products.csv"));
        assert_eq!((config.min_delay, config.max_delay), (1.0, 3.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_or_negative_delays() {
        let mut config = HarvestConfig::new("https://shop.test");
        config.min_delay = 4.0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDelay { min, max }) if min == 4.0 && max == 3.0
        ));

        config.min_delay = -1.0;
        assert!(config.validate().is_err());

        config.min_delay = 0.0;
        config.max_delay = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_delay_is_allowed() {
        let mut config = HarvestConfig::new("https://shop.test");
        config.min_delay = 0.0;
        config.max_delay = 0.0;
        assert!(config.validate().is_ok());
    }
}
