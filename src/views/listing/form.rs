use crate::helpers::fee;
use crate::models;
use serde_derive::Serialize;
use std::convert::From;

/// Pre-filled values for the admin edit form. Everything is a string because
/// it lands straight in input fields.
#[derive(Debug, Serialize, Default)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub price_usd: String,
    pub equity_percent: String, // blank when absent
    pub logo_url: String,
    pub pay_url: String,
    pub status: String,
}

impl From<models::Listing> for Form {
    fn from(listing: models::Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            category: listing.category.label().to_string(),
            location: listing.location.unwrap_or_default(),
            description: listing.description.unwrap_or_default(),
            price_usd: fee::money(listing.price_usd),
            equity_percent: listing
                .equity_percent
                .map(|value| format!("{}", value))
                .unwrap_or_default(),
            logo_url: listing.logo_url.unwrap_or_default(),
            pay_url: listing.pay_url,
            status: listing.status.label().to_string(),
        }
    }
}
