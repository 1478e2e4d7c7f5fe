use chrono::Local;

use crate::config::HarvestConfig;
use crate::delay::Throttle;
use crate::logging::LogSink;
use crate::parse::{parse_products, ProductSelectors};
use crate::product::Product;
use crate::request::Fetch;
use crate::{error_log, info_log, info_time, Result};

/// Walks the listing pages of one site, one after another.
pub struct Harvester<F, L> {
    base_url: String,
    pages: usize,
    fetcher: F,
    selectors: ProductSelectors,
    throttle: Throttle,
    log: L,
}

impl<F: Fetch, L: LogSink> Harvester<F, L> {
    pub fn new(config: &HarvestConfig, fetcher: F, log: L) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            pages: config.pages,
            fetcher,
            selectors: ProductSelectors::new()?,
            throttle: config.throttle()?,
            log,
        })
    }

    pub fn page_url(&self, page: usize) -> String {
        format!("{}/products?page={page}", self.base_url)
    }

    /// Requests pages `1..=pages` in order and collects every product found.
    ///
    /// A page that can't be fetched is logged and skipped, together with its pause.
    /// Every fetched page is followed by a random pause, the last one included.
    pub async fn harvest(&self) -> Vec<Product> {
        let start_time = Local::now();
        let mut all_products = Vec::new();

        for page in 1..=self.pages {
            let url = self.page_url(page);
            info_log!(self.log, "Hunting on page {page}");

            let Some(html) = self.fetch_page(&url).await else {
                continue;
            };
            let products = parse_products(&html, &self.selectors, &self.log);
            info_log!(self.log, "Found {} products on page {page}", products.len());
            all_products.extend(products);

            self.throttle.wait(&self.log).await;
        }

        info_time!(
            self.log,
            start_time,
            "Finished hunting {} pages, {} products",
            self.pages,
            all_products.len()
        );
        all_products
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(html) => Some(html),
            Err(e) => {
                error_log!(self.log, "Error fetching {url}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::logging::{Level, MemoryLog};
    use crate::Error;

    use super::*;

    /// Serves pages from memory; unknown URLs fail like a 404.
    #[derive(Default)]
    struct ScriptedFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn with_page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages.get(url).cloned().ok_or_else(|| Error::HttpStatus {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
    }

    fn item(title: &str, price: &str, rating: &str) -> String {
        format!(
            r#"<div class="product-item">
                 <h2 class="product-title">{title}</h2>
                 <span class="product-price">{price}</span>
                 <div class="product-rating" data-rating="{rating}"></div>
               </div>"#
        )
    }

    fn config(pages: usize) -> HarvestConfig {
        let mut config = HarvestConfig::new("https://shop.test");
        config.pages = pages;
        config.min_delay = 0.0;
        config.max_delay = 0.0;
        config
    }

    #[test]
    fn page_url_appends_query() {
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config(1), ScriptedFetcher::default(), &log).unwrap();
        assert_eq!(harvester.page_url(3), "https://shop.test/products?page=3");

        let mut slashed = config(1);
        slashed.base_url = "https://shop.test/".into();
        let harvester = Harvester::new(&slashed, ScriptedFetcher::default(), &log).unwrap();
        assert_eq!(harvester.page_url(1), "https://shop.test/products?page=1");
    }

    #[tokio::test]
    async fn requests_every_page_in_order() {
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config(4), ScriptedFetcher::default(), &log).unwrap();

        let products = harvester.harvest().await;

        assert!(products.is_empty());
        assert_eq!(
            harvester.fetcher.requested(),
            (1..=4)
                .map(|p| format!("https://shop.test/products?page={p}"))
                .collect::<Vec<_>>()
        );
        assert_eq!(log.messages(Level::Error).len(), 4);
    }

    #[tokio::test]
    async fn zero_pages_fetch_nothing() {
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config(0), ScriptedFetcher::default(), &log).unwrap();

        assert!(harvester.harvest().await.is_empty());
        assert!(harvester.fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn failed_page_does_not_stop_the_run() {
        let fetcher = ScriptedFetcher::default()
            .with_page(
                "https://shop.test/products?page=1",
                &format!("{}{}", item("Kettle", "$20", "4"), item("Pan", "$35", "5")),
            )
            .with_page("https://shop.test/products?page=3", &item("Knife", "$12", "3.5"));
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config(3), fetcher, &log).unwrap();

        let products = harvester.harvest().await;

        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Kettle", "Pan", "Knife"]);
        let errors = log.messages(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("page=2"));
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_after_each_fetched_page() {
        let fetcher = ScriptedFetcher::default()
            .with_page("https://shop.test/products?page=1", &item("Kettle", "$20", "4"))
            .with_page("https://shop.test/products?page=2", &item("Pan", "$35", "5"));
        let mut config = config(3);
        config.min_delay = 2.0;
        config.max_delay = 2.0;
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config, fetcher, &log).unwrap();
        let start = tokio::time::Instant::now();

        harvester.harvest().await;

        // page 3 fails, so only pages 1 and 2 pause
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(4) && elapsed < Duration::from_secs(5));
        let waits = log
            .messages(Level::Info)
            .into_iter()
            .filter(|m| m.starts_with("Waiting"))
            .count();
        assert_eq!(waits, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn last_page_is_followed_by_a_pause() {
        let fetcher = ScriptedFetcher::default()
            .with_page("https://shop.test/products?page=1", &item("Kettle", "$20", "4"))
            .with_page("https://shop.test/products?page=2", &item("Pan", "$35", "5"));
        let mut config = config(2);
        config.min_delay = 2.0;
        config.max_delay = 2.0;
        let log = MemoryLog::new();
        let harvester = Harvester::new(&config, fetcher, &log).unwrap();
        let start = tokio::time::Instant::now();

        let products = harvester.harvest().await;

        assert_eq!(products.len(), 2);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(4) && elapsed < Duration::from_secs(5));
        let info = log.messages(Level::Info);
        let waits: Vec<_> = info
            .iter()
            .enumerate()
            .filter(|(_, m)| m.starts_with("Waiting"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(waits.len(), 2);
        let page_2 = info
            .iter()
            .position(|m| m == "Found 1 products on page 2")
            .unwrap();
        assert!(waits[1] > page_2);
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let mut config = config(1);
        config.min_delay = 5.0;
        let log = MemoryLog::new();
        assert!(Harvester::new(&config, ScriptedFetcher::default(), &log).is_err());
    }
}
