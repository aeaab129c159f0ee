// src/config.rs

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for the daily rolling log file.
    pub log_dir: String,
    /// Polling interval of the admin dashboard, in seconds.
    pub admin_refresh_secs: u64,
    /// Optional JSON file replacing the built-in quiz catalog.
    pub quiz_catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = parse_var("PORT", 8000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let admin_refresh_secs = parse_var("ADMIN_REFRESH_SECS", 30);
        if admin_refresh_secs == 0 {
            panic!("ADMIN_REFRESH_SECS must be greater than zero");
        }

        let quiz_catalog_path = env::var("QUIZ_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Self {
            host,
            port,
            rust_log,
            log_dir,
            admin_refresh_secs,
            quiz_catalog_path,
        }
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw).unwrap_or_else(|e| panic!("{}", e)),
        Err(_) => default,
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| format!("Invalid value for {}: {:?} ({})", key, raw, e))
}
