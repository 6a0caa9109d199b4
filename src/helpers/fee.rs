/// Fixed platform surcharge applied on top of every listing's base price.
pub const PLATFORM_FEE_RATE: f64 = 0.05;

/// Half-up rounding to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn platform_fee(price_usd: f64) -> f64 {
    round_cents(price_usd * PLATFORM_FEE_RATE)
}

pub fn checkout_total(price_usd: f64) -> f64 {
    round_cents(price_usd + platform_fee(price_usd))
}

/// Two-decimal display form used everywhere a price is rendered.
pub fn money(value: f64) -> String {
    format!("{:.2}", round_cents(value))
}
