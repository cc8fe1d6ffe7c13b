use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::base;
use crate::models::EventRecord;

static CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("li [data-testid='search-event']").expect("eventbrite card selector")
});
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3").expect("eventbrite title selector"));
static DATE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p:nth-of-type(1)").expect("eventbrite date selector"));
static PRICE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div[class*='priceWrapper'] p").expect("eventbrite price selector")
});
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.event-card-link").expect("eventbrite link selector"));

/// Extracts every event card from a rendered listing page, in document
/// order. `page_url` is used to absolutize card links.
pub fn parse_document(html: &str, page_url: &str) -> Vec<EventRecord> {
    let document = Html::parse_document(html);

    document
        .select(&CARD_SELECTOR)
        .map(|card| {
            EventRecord::from_parts(
                base::first_text(&card, &TITLE_SELECTOR),
                base::first_text(&card, &DATE_SELECTOR),
                base::first_text(&card, &PRICE_SELECTOR),
                base::absolute_url(page_url, base::first_attr(&card, &LINK_SELECTOR, "href")),
            )
        })
        .collect()
}
