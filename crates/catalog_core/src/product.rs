/// A catalog entry as the page sees it. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Free text; the `newest` ordering sorts on it in place of a release date.
    pub processor: String,
    pub price_regular: f64,
    pub price_discount: Option<f64>,
    pub image: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        processor: impl Into<String>,
        price_regular: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            processor: processor.into(),
            price_regular,
            price_discount: None,
            image: None,
        }
    }
}
