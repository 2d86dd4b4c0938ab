use std::env;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

#[derive(Deserialize)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct DbConfig {
    pub db_path: String,
}

#[derive(Deserialize)]
pub struct OwmConfig {
    pub api_key: String,
    pub cities: Vec<String>,
}

#[derive(Deserialize)]
pub struct LogConfig {
    pub log_path: String,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServerConfig,
    pub db: DbConfig,
    pub owm: OwmConfig,
    pub log: LogConfig,
}

/// Loads the configuration from the toml file given as first command
/// line argument (default config.toml) and sets up logging
pub fn config() -> Result<Config, ConfigError> {
    let path = env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = parse_config(&fs::read_to_string(path)?)?;

    setup_logger(&config.log.log_path)?;

    Ok(config)
}

fn parse_config(raw: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(raw)?)
}
