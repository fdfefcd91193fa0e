use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Deployment mode. Controls how much error detail leaves the process.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Reads the first variable in `keys` that is set.
///
/// Falls back to `default`; with no default the variable is required.
/// In production every variable is required.
pub fn get_env(keys: &[&str], default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    if let Some(val) = keys.iter().find_map(|key| std::env::var(key).ok()) {
        return Ok(val);
    }

    let name = keys.first().copied().unwrap_or_default();
    if is_prod {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            name
        )))
    } else if let Some(def) = default {
        Ok(def.to_string())
    } else {
        Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            name
        )))
    }
}
