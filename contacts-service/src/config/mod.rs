use secrecy::Secret;
use service_core::config::{self as core_config, get_env, Environment};
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct ContactsConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    /// Base URL advertised in the API documentation.
    pub public_url: String,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// `None` starts the service without a database; every contact
    /// operation then fails with a 500.
    pub uri: Option<Secret<String>>,
    pub database: String,
}

impl ContactsConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let mut common = core_config::Config::load()?;
        if let Ok(port) = env::var("PORT") {
            common.port = port.parse().map_err(|e: std::num::ParseIntError| {
                AppError::ConfigError(anyhow::anyhow!("Invalid PORT '{}': {}", port, e))
            })?;
        }

        let environment: Environment =
            get_env(&["ENVIRONMENT", "NODE_ENV"], Some("development"), false)?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;
        let is_prod = environment == Environment::Production;

        let uri = match get_env(&["MONGODB_URI"], None, is_prod) {
            Ok(uri) => Some(Secret::new(uri)),
            Err(e) if is_prod => return Err(e),
            Err(_) => None,
        };

        let default_url = format!("http://localhost:{}", common.port);

        Ok(ContactsConfig {
            environment,
            service_name: get_env(&["SERVICE_NAME"], Some("contacts-service"), false)?,
            log_level: get_env(&["LOG_LEVEL"], Some("info"), false)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            public_url: get_env(&["PUBLIC_URL", "RENDER_EXTERNAL_URL"], Some(&default_url), false)?,
            mongodb: MongoConfig {
                uri,
                database: get_env(
                    &["MONGODB_DATABASE", "DATABASE_NAME"],
                    Some("contactsDB"),
                    false,
                )?,
            },
            common,
        })
    }
}
