mod common;

use common::{create_listing, spawn_app};

#[tokio::test]
async fn checkout_unknown_id_is_not_found() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/checkout?id=does-not-exist", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn checkout_missing_id_is_not_found() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/checkout", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn checkout_rejects_non_live_listings() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    create_listing(
        &app,
        &client,
        &[
            ("title", "Paused Patent"),
            ("category", "Patent"),
            ("price_usd", "250"),
            ("pay_url", "https://pay.example/p"),
            ("status", "DRAFT"),
        ],
    )
    .await;

    let listing = smallbizx::db::listing::fetch_all(&app.db_pool)
        .await
        .expect("Failed to fetch listings")
        .pop()
        .expect("Listing was not created");

    let response = client
        .get(&format!("{}/checkout?id={}", &app.address, listing.id))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn checkout_shows_five_percent_fee_and_pay_link() {
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

    let listing = smallbizx::db::listing::fetch_all(&app.db_pool)
        .await
        .expect("Failed to fetch listings")
        .pop()
        .expect("Listing was not created");

    let body = client
        .get(&format!("{}/checkout?id={}", &app.address, listing.id))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("$50.00"));
    assert!(body.contains("$2.50"));
    assert!(body.contains("Pay $52.50"));
    // The pay link targets the stored URL; Tera escapes slashes in the href
    assert!(body.contains(r#"href="https:&#x2F;&#x2F;pay.example&#x2F;x""#));
}

#[tokio::test]
async fn checkout_fee_rounds_half_up_to_cents() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    create_listing(
        &app,
        &client,
        &[
            ("title", "Side Project"),
            ("category", "Side Hustle"),
            ("price_usd", "19.99"),
            ("pay_url", "https://pay.example/s"),
            ("status", "LIVE"),
        ],
    )
    .await;

    let listing = smallbizx::db::listing::fetch_all(&app.db_pool)
        .await
        .expect("Failed to fetch listings")
        .pop()
        .expect("Listing was not created");

    let body = client
        .get(&format!("{}/checkout?id={}", &app.address, listing.id))
        .send()
        .await
        .expect("Failed to execute request.")
        .text()
        .await
        .expect("Failed to read body");

    // 19.99 * 0.05 = 0.9995 -> 1.00 once rounded to whole cents
    assert!(body.contains("$19.99"));
    assert!(body.contains("$1.00"));
    assert!(body.contains("Pay $20.99"));
}
