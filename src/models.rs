pub const MISSING_TEXT: &str = "N/A";
pub const MISSING_PRICE: &str = "Free";

/// One event card as rendered on the listing page. Fields the card lacks
/// carry a sentinel instead of being dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub title: String,
    pub date: String,
    pub price: String,
    pub url: String,
}

impl EventRecord {
    pub fn from_parts(
        title: Option<String>,
        date: Option<String>,
        price: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| MISSING_TEXT.to_string()),
            date: date.unwrap_or_else(|| MISSING_TEXT.to_string()),
            price: price.unwrap_or_else(|| MISSING_PRICE.to_string()),
            url: url.unwrap_or_default(),
        }
    }
}
