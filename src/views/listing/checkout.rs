use crate::helpers::fee;
use crate::models;
use serde_derive::Serialize;
use std::convert::From;

/// Checkout summary: base price, the 5% platform fee and the grand total,
/// plus the external link where the actual payment happens.
#[derive(Debug, Serialize, Default)]
pub struct Checkout {
    pub id: String,
    pub title: String,
    pub category: String,
    pub equity_percent: Option<String>,
    pub logo_url: String,
    pub pay_url: String,
    pub base_price: String,
    pub fee: String,
    pub total: String,
}

impl From<models::Listing> for Checkout {
    fn from(listing: models::Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            category: listing.category.label().to_string(),
            equity_percent: listing.equity_percent.map(|value| format!("{}", value)),
            logo_url: listing.logo_url.unwrap_or_default(),
            pay_url: if listing.pay_url.is_empty() {
                "#".to_string()
            } else {
                listing.pay_url
            },
            base_price: fee::money(listing.price_usd),
            fee: fee::money(fee::platform_fee(listing.price_usd)),
            total: fee::money(fee::checkout_total(listing.price_usd)),
        }
    }
}
