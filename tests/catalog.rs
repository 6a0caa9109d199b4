mod common;

use common::{create_listing, spawn_app};

#[tokio::test]
async fn catalog_shows_empty_state() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No listings yet."));
}

#[tokio::test]
async fn catalog_lists_live_listings_with_formatted_price() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    create_listing(
        &app,
        &client,
        &[
            ("title", "AI Tool"),
            ("category", "Business Idea"),
            ("price_usd", "50"),
            ("pay_url", "https://pay.example/x"),
            ("status", "LIVE"),
        ],
    )
    .await;

    let body = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("AI Tool"));
    assert!(body.contains("Business Idea"));
    assert!(body.contains("$50.00"));
    assert!(body.contains("/checkout?id="));
}

#[tokio::test]
async fn catalog_hides_draft_and_closed_listings() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    create_listing(
        &app,
        &client,
        &[
            ("title", "Hidden Draft"),
            ("category", "Patent"),
            ("price_usd", "10"),
            ("pay_url", "https://pay.example/d"),
            ("status", "DRAFT"),
        ],
    )
    .await;
    create_listing(
        &app,
        &client,
        &[
            ("title", "Closed Deal"),
            ("category", "Patent"),
            ("price_usd", "10"),
            ("pay_url", "https://pay.example/c"),
            ("status", "CLOSED"),
        ],
    )
    .await;

    let body = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .expect("Failed to read body");

    assert!(!body.contains("Hidden Draft"));
    assert!(!body.contains("Closed Deal"));
    assert!(body.contains("No listings yet."));
}

#[tokio::test]
async fn catalog_shows_equity_and_location_when_present() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    create_listing(
        &app,
        &client,
        &[
            ("title", "Startup Stake"),
            ("category", "Equity/Shares"),
            ("location", "Remote/Global"),
            ("price_usd", "1000"),
            ("equity_percent", "12.5"),
            ("pay_url", "https://pay.example/e"),
            ("status", "LIVE"),
        ],
    )
    .await;

    let body = client
        .get(&format!("{}/", &app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Startup Stake"));
    // Tera escapes slashes in rendered values
    assert!(body.contains("Equity&#x2F;Shares"));
    assert!(body.contains("Remote&#x2F;Global"));
    assert!(body.contains("12.5% equity"));
}
