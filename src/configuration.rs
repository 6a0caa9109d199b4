use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_host: String,
    pub app_port: u16,
    pub app_name: String,
    // An empty admin key never matches, which disables the admin surface.
    pub admin_key: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub database_path: String,
}

impl DatabaseSettings {
    // Connection string: sqlite://<path>
    pub fn connection_string(&self) -> String {
        format!("sqlite://{}", self.database_path)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize our configuration reader
    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // Environment variables win over file values
    if let Ok(port) = std::env::var("PORT") {
        config.app_port = port
            .parse()
            .map_err(|_| config::ConfigError::Message(format!("invalid PORT value: {}", port)))?;
    }
    if let Ok(name) = std::env::var("APP_NAME") {
        config.app_name = name;
    }
    if let Ok(key) = std::env::var("ADMIN_KEY") {
        config.admin_key = key;
    }
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        config.database.database_path = path;
    }

    Ok(config)
}
