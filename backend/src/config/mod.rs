//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the database URL, server port, and the address and credentials of the
//! Pi-hole appliance.

use anyhow::{Context, Result, ensure};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub server_port: u16,
    /// Base URL of the Pi-hole admin API, scheme included.
    pub pihole_address: String,
    pub pihole_password: String,
    /// Duration of the blocking pause requested from Pi-hole.
    pub pihole_disable_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let pihole_address =
            normalize_address(&env::var("PIHOLE_ADDRESS").unwrap_or_else(|_| "pi.hole".to_string()));

        let pihole_password = env::var("PIHOLE_PASSWORD").context("PIHOLE_PASSWORD not set")?;

        let pihole_disable_seconds = env::var("PIHOLE_DISABLE_SECONDS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .context("PIHOLE_DISABLE_SECONDS must be a valid number")?;
        ensure!(
            (300..=360).contains(&pihole_disable_seconds),
            "PIHOLE_DISABLE_SECONDS must be between 300 and 360"
        );

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            server_port,
            pihole_address,
            pihole_password,
            pihole_disable_seconds,
        })
    }
}

/// Prepends `https://` when the configured address carries no scheme and
/// strips any trailing slash, so callers can join API paths directly.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
