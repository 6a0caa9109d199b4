use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Admin create/update form. Every field arrives as text from the HTML form;
/// malformed numeric input falls back to a default instead of failing the
/// request, matching the leniency of the admin UI.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ListingForm {
    pub id: Option<String>, // present on update only
    pub title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price_usd: Option<String>,
    pub equity_percent: Option<String>,
    pub logo_url: Option<String>,
    pub pay_url: Option<String>,
    pub status: Option<String>,
}

impl ListingForm {
    pub fn into_new_listing(self) -> models::Listing {
        models::Listing {
            id: uuid::Uuid::new_v4().simple().to_string(),
            title: self.title.clone().unwrap_or_default(),
            category: self.category(),
            location: Self::optional(self.location.clone()),
            description: Self::optional(self.description.clone()),
            price_usd: self.price_usd(),
            equity_percent: self.equity_percent(),
            logo_url: Self::optional(self.logo_url.clone()),
            pay_url: self.pay_url.clone().unwrap_or_default(),
            status: self.status(),
            created_at: Utc::now(),
        }
    }

    /// Full-row replace of everything except `id` and `created_at`.
    pub fn apply(self, listing: &mut models::Listing) {
        listing.title = self.title.clone().unwrap_or_default();
        listing.category = self.category();
        listing.location = Self::optional(self.location.clone());
        listing.description = Self::optional(self.description.clone());
        listing.price_usd = self.price_usd();
        listing.equity_percent = self.equity_percent();
        listing.logo_url = Self::optional(self.logo_url.clone());
        listing.pay_url = self.pay_url.clone().unwrap_or_default();
        listing.status = self.status();
    }

    fn category(&self) -> models::Category {
        self.category
            .as_deref()
            .map(models::Category::from_label)
            .unwrap_or_default()
    }

    fn status(&self) -> models::Status {
        self.status
            .as_deref()
            .map(models::Status::from_label)
            .unwrap_or_default()
    }

    // Absent or malformed prices coerce to 0
    fn price_usd(&self) -> f64 {
        self.price_usd
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0.0)
    }

    // Blank or malformed equity coerces to absent
    fn equity_percent(&self) -> Option<f64> {
        self.equity_percent
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
    }

    // Empty strings from blank form inputs are stored as absent
    fn optional(value: Option<String>) -> Option<String> {
        value.filter(|value| !value.is_empty())
    }
}
