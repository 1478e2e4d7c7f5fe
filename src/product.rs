use serde::{Deserialize, Serialize};

/// One product listing as it appeared on the page. Values are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: String,
    /// Taken verbatim from the `data-rating` attribute, `None` when the attribute is absent or empty.
    pub rating: Option<String>,
}

impl Product {
    pub fn new(title: impl Into<String>, price: impl Into<String>, rating: Option<&str>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating: rating.map(str::to_string),
        }
    }
}
