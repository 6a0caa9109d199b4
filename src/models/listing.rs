use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: String, // opaque, assigned at creation, never reused
    pub title: String,
    pub category: models::Category,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price_usd: f64, // base price, non-negative
    pub equity_percent: Option<f64>, // only for equity-bearing listings, 0..=100
    pub logo_url: Option<String>,
    pub pay_url: String, // external payment processor checkout page
    pub status: models::Status,
    pub created_at: DateTime<Utc>, // drives the newest-first ordering
}
