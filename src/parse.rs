use scraper::{ElementRef, Html, Selector};

use crate::logging::LogSink;
use crate::product::Product;
use crate::{warn_log, Error, Result};

const ITEM_SELECTOR: &str = "div.product-item";
const TITLE_SELECTOR: &str = "h2.product-title";
const PRICE_SELECTOR: &str = "span.product-price";
const RATING_SELECTOR: &str = "div.product-rating";
const RATING_ATTR: &str = "data-rating";

/// First match lookup on a document or element.
pub trait Find {
    fn find(&self, selector: &Selector) -> Option<ElementRef<'_>>;
}

impl Find for Html {
    fn find(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.select(selector).next()
    }
}

impl Find for ElementRef<'_> {
    fn find(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.select(selector).next()
    }
}

/// Selectors for a listing page, compiled once per run.
#[derive(Debug, Clone)]
pub struct ProductSelectors {
    item: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
}

impl ProductSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: create_selector(ITEM_SELECTOR)?,
            title: create_selector(TITLE_SELECTOR)?,
            price: create_selector(PRICE_SELECTOR)?,
            rating: create_selector(RATING_SELECTOR)?,
        })
    }
}

/// Parses a listing page and returns every complete product in document order.
/// Containers missing a field are logged and skipped.
pub fn parse_products<L: LogSink>(html: &str, selectors: &ProductSelectors, log: &L) -> Vec<Product> {
    let doc = Html::parse_document(html);

    doc.select(&selectors.item)
        .filter_map(|container| match extract_product(container, selectors) {
            Ok(product) => Some(product),
            Err(e) => {
                warn_log!(log, "Error extracting product info: {e}");
                None
            }
        })
        .collect()
}

/// Pulls title, price and rating out of a single product container.
/// Fails on the first element that can't be found.
pub fn extract_product(container: ElementRef<'_>, selectors: &ProductSelectors) -> Result<Product> {
    let title = container
        .find(&selectors.title)
        .map(trimmed_text)
        .ok_or(Error::MissingElement("title"))?;
    let price = container
        .find(&selectors.price)
        .map(trimmed_text)
        .ok_or(Error::MissingElement("price"))?;
    let rating = container
        .find(&selectors.rating)
        .ok_or(Error::MissingElement("rating"))?
        .value()
        .attr(RATING_ATTR)
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    Ok(Product {
        title,
        price,
        rating,
    })
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}
