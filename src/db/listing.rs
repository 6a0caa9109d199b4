use crate::models;
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn fetch(pool: &SqlitePool, id: &str) -> Result<Option<models::Listing>, String> {
    let query_span = tracing::info_span!("Fetching listing by id.");
    sqlx::query_as::<_, models::Listing>(r"SELECT * FROM listing WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute fetch query: {:?}", e);
            "".to_string()
        })
}

pub async fn fetch_live(pool: &SqlitePool) -> Result<Vec<models::Listing>, String> {
    let query_span = tracing::info_span!("Fetching live listings.");
    sqlx::query_as::<_, models::Listing>(
        r"SELECT * FROM listing WHERE status = 'LIVE' ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute fetch query: {:?}", e);
        "".to_string()
    })
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<models::Listing>, String> {
    let query_span = tracing::info_span!("Fetching all listings.");
    sqlx::query_as::<_, models::Listing>(r"SELECT * FROM listing ORDER BY created_at DESC")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute fetch query: {:?}", e);
            "".to_string()
        })
}

pub async fn insert(pool: &SqlitePool, listing: models::Listing) -> Result<models::Listing, String> {
    let query_span = tracing::info_span!("Saving new listing into the database");
    let result = sqlx::query(
        r#"
        INSERT INTO listing (id, title, category, location, description,
                             price_usd, equity_percent, logo_url, pay_url, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&listing.id)
    .bind(&listing.title)
    .bind(listing.category)
    .bind(&listing.location)
    .bind(&listing.description)
    .bind(listing.price_usd)
    .bind(listing.equity_percent)
    .bind(&listing.logo_url)
    .bind(&listing.pay_url)
    .bind(listing.status)
    .bind(listing.created_at)
    .execute(pool)
    .instrument(query_span)
    .await;

    result.map(|_| listing).map_err(|e| {
        tracing::error!("Failed to execute insert query: {:?}", e);
        "Failed to insert".to_string()
    })
}

/// Full replace of the mutable fields. A missing id matches no row, which
/// leaves the table untouched.
pub async fn update(pool: &SqlitePool, listing: models::Listing) -> Result<models::Listing, String> {
    let query_span = tracing::info_span!("Updating listing details in the database");
    let result = sqlx::query(
        r#"
        UPDATE listing
        SET title = ?, category = ?, location = ?, description = ?,
            price_usd = ?, equity_percent = ?, logo_url = ?, pay_url = ?, status = ?
        WHERE id = ?
        "#,
    )
    .bind(&listing.title)
    .bind(listing.category)
    .bind(&listing.location)
    .bind(&listing.description)
    .bind(listing.price_usd)
    .bind(listing.equity_percent)
    .bind(&listing.logo_url)
    .bind(&listing.pay_url)
    .bind(listing.status)
    .bind(&listing.id)
    .execute(pool)
    .instrument(query_span)
    .await;

    result.map(|_| listing).map_err(|e| {
        tracing::error!("Failed to execute update query: {:?}", e);
        "Failed to update".to_string()
    })
}

/// Idempotent: deleting an id that is already gone is a no-op.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<(), String> {
    let query_span = tracing::info_span!("Deleting listing from the database");
    sqlx::query(r"DELETE FROM listing WHERE id = ?")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::error!("Failed to execute delete query: {:?}", e);
            "Failed to delete".to_string()
        })
}
