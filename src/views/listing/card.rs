use crate::helpers::fee;
use crate::models;
use serde_derive::Serialize;
use std::convert::From;

/// One tile of the public catalog grid. Prices arrive preformatted so the
/// template never touches raw numbers.
#[derive(Debug, Serialize, Default)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub price: String,
    pub equity_percent: Option<String>,
    pub logo_url: String,
}

impl From<models::Listing> for Card {
    fn from(listing: models::Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            category: listing.category.label().to_string(),
            location: listing.location,
            price: fee::money(listing.price_usd),
            equity_percent: listing.equity_percent.map(|value| format!("{}", value)),
            logo_url: listing.logo_url.unwrap_or_default(),
        }
    }
}
