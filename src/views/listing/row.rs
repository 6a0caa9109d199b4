use crate::helpers::fee;
use crate::models;
use serde_derive::Serialize;
use std::convert::From;

/// One row of the admin table.
#[derive(Debug, Serialize, Default)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub equity_percent: String, // blank when absent
    pub status: String,
}

impl From<models::Listing> for Row {
    fn from(listing: models::Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            category: listing.category.label().to_string(),
            price: fee::money(listing.price_usd),
            equity_percent: listing
                .equity_percent
                .map(|value| format!("{}", value))
                .unwrap_or_default(),
            status: listing.status.label().to_string(),
        }
    }
}
