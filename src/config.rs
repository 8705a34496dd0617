use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    // Populated from the .env file
    pub database_path: Option<String>,
    pub allowed_origins: String,
    pub log_level: String,
    pub admin_accept_ip: Option<String>,
    pub trusted_proxy_ips: Option<String>,
}

impl Config {
    pub fn from_env(env_path: &Path) -> Result<Self, config::ConfigError> {
        dotenvy::from_path(env_path)
            .map_err(|e| config::ConfigError::Message(format!(
                "FATAL: Failed to load .env file from '{}'. Error: {}", env_path.display(), e
            )))?;

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `config/default.toml` plus whatever `lookup`
    /// returns for each environment variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH").filter(|p| !p.trim().is_empty());

        if let Some(path) = &database_path {
            if Path::new(path).is_relative() {
                return Err(config::ConfigError::Message(format!(
                    "FATAL: The 'DATABASE_PATH' in your .env file is a relative path ('{}'). It MUST be an absolute path.",
                    path
                )));
            }
        }

        let allowed_origins = lookup("ALLOWED_ORIGINS").unwrap_or_default();
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let admin_accept_ip = lookup("ADMIN_ACCEPT_IP").filter(|v| !v.trim().is_empty());
        let trusted_proxy_ips = lookup("TRUSTED_PROXY_IPS").filter(|v| !v.trim().is_empty());

        config::Config::builder()
            .add_source(config::File::new("config/default.toml", config::FileFormat::Toml))
            .set_override_option("database_path", database_path)?
            .set_override("allowed_origins", allowed_origins)?
            .set_override("log_level", log_level)?
            .set_override_option("admin_accept_ip", admin_accept_ip)?
            .set_override_option("trusted_proxy_ips", trusted_proxy_ips)?
            .build()?
            .try_deserialize()
    }

    pub fn db_path(&self) -> Option<PathBuf> {
        self.database_path.as_ref().map(PathBuf::from)
    }
}
