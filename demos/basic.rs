//! Basic usage example

use envbind::Bind;
use std::time::Duration;

#[derive(Debug, Default, Bind)]
struct Config {
    // Loaded from DATABASE_URL
    pub database_url: String,

    // Loaded from SERVER_ADDR, keeps its default when unset
    pub server_addr: String,

    // Numeric type
    pub max_connections: u32,

    // Boolean type: 1, t, true, TRUE, ...
    pub debug_mode: bool,

    // Duration: "1m30s", "250ms", ...
    pub ping_interval: Duration,

    // Comma-separated list
    pub allowed_hosts: Vec<String>,

    // Custom variable name
    #[env(name = "USE_SSL")]
    pub ssl: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "25");
    std::env::set_var("DEBUG_MODE", "true");
    std::env::set_var("PING_INTERVAL", "1m30s");
    std::env::set_var("ALLOWED_HOSTS", "api.example.com,www.example.com");
    std::env::set_var("USE_SSL", "1");
    std::env::remove_var("SERVER_ADDR");

    let mut config = Config {
        server_addr: "127.0.0.1:8080".to_string(),
        max_connections: 10,
        ..Config::default()
    };
    envbind::bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr); // default kept
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Ping Interval: {:?}", config.ping_interval);
    println!("  Allowed Hosts: {:?}", config.allowed_hosts);
    println!("  SSL: {}", config.ssl);

    Ok(())
}
