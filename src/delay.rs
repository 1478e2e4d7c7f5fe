use std::time::Duration;

use rand::Rng;

use crate::logging::LogSink;
use crate::{info_log, Error, Result};

/// Random pause between page requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    min_secs: f64,
    max_secs: f64,
}

impl Throttle {
    pub fn new(min_secs: f64, max_secs: f64) -> Result<Self> {
        // try_from_secs_f64 also rejects NaN, negatives and values past Duration::MAX
        let in_range = Duration::try_from_secs_f64(min_secs).is_ok()
            && Duration::try_from_secs_f64(max_secs).is_ok();
        if !in_range || min_secs > max_secs {
            return Err(Error::InvalidDelay {
                min: min_secs,
                max: max_secs,
            });
        }
        Ok(Self { min_secs, max_secs })
    }

    /// Draws a delay uniformly from `[min, max]` seconds.
    pub fn next_delay(&self) -> Duration {
        let mut rng = rand::thread_rng();
        Duration::from_secs_f64(rng.gen_range(self.min_secs..=self.max_secs))
    }

    pub async fn wait<L: LogSink>(&self, log: &L) {
        let delay = self.next_delay();
        info_log!(log, "Waiting for {:.2} seconds...", delay.as_secs_f64());
        tokio::time::sleep(delay).await;
    }
}
