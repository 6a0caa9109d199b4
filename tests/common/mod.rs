use smallbizx::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub admin_key: String,
    // Dropping the directory would pull the database file out from under the
    // running server, so the app owns it for the duration of the test.
    _db_dir: tempfile::TempDir,
}

pub async fn spawn_app() -> TestApp {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.admin_key = "test-admin-key".to_string();

    spawn_app_with_configuration(configuration).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let db_dir = tempfile::tempdir().expect("Failed to create temp dir for test database");
    configuration.database.database_path = db_dir
        .path()
        .join(format!("{}.db", uuid::Uuid::new_v4()))
        .display()
        .to_string();

    let db_pool = configure_database(&configuration.database).await;

    let server = smallbizx::startup::run(listener, db_pool.clone(), configuration.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool,
        admin_key: configuration.admin_key,
        _db_dir: db_dir,
    }
}

pub async fn configure_database(config: &DatabaseSettings) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to open test database");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to migrate database");

    db_pool
}

/// Submit the admin create form and follow the redirect back to the list.
#[allow(dead_code)]
pub async fn create_listing(app: &TestApp, client: &reqwest::Client, fields: &[(&str, &str)]) {
    let response = client
        .post(&format!(
            "{}/admin/create?key={}",
            app.address, app.admin_key
        ))
        .form(fields)
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(
        response.status().is_success(),
        "create listing failed with status {}",
        response.status()
    );
}
