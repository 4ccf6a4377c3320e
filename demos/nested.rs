//! Example demonstrating nested structs and optional fields

use envbind::{Bind, MapEnv};

#[derive(Debug, Default, Bind)]
struct Database {
    // DB_HOST
    pub db_host: String,
    // DB_PORT
    pub db_port: u16,
}

#[derive(Debug, Default, Bind)]
struct Cache {
    pub cache_url: String,
}

#[derive(Debug, Default, Bind)]
struct Config {
    pub app_name: String,

    // Nested structs read the same keys as their parent
    pub database: Database,

    // Some only if one of its variables is set
    pub cache: Option<Cache>,

    // None if not set
    pub api_key: Option<String>,
    pub port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let env = MapEnv::from([
        ("APP_NAME", "my-application"),
        ("DB_HOST", "db.internal"),
        ("DB_PORT", "5432"),
        ("PORT", "8080"),
        // API_KEY and CACHE_URL not set
    ]);

    let config = Config::from_source(&env)?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  Database: {}:{}", config.database.db_host, config.database.db_port);
    println!("  Cache: {:?}", config.cache); // None
    println!("  API Key: {:?}", config.api_key); // None
    println!("  Port: {:?}", config.port); // Some(8080)

    Ok(())
}
