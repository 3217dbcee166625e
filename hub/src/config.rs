//! Environment-driven configuration for the agent hub

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origins allowed to make cross-origin requests
    pub allowed_origins: Vec<String>,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub url: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_allowed_origins() -> String {
    constants::DEFAULT_ALLOWED_ORIGINS.to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "revenue_aggregator".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("HOST", default_host),
            port: parse_env_or("PORT", default_port)?,
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", default_allowed_origins)),
            database: DatabaseConfig {
                host: env_or("DB_HOST", default_db_host),
                port: parse_env_or("DB_PORT", default_db_port)?,
                user: env_or("DB_USER", default_db_user),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
                name: env_or("DB_NAME", default_db_name),
                url: env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()),
                min_connections: constants::database::MIN_CONNECTIONS,
                max_connections: constants::database::MAX_CONNECTIONS,
            },
        })
    }
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None if self.password.is_empty() => format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.name
            ),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }

    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => url.rsplit('@').next().unwrap_or(url).to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.name),
        }
    }
}

/// Comma-separated list, trimmed, empties dropped.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn env_or(key: &str, default: fn() -> String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(default)
}

fn parse_env_or<T>(key: &str, default: fn() -> T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid value for {}: '{}' ({})", key, raw, e)),
        _ => Ok(default()),
    }
}
