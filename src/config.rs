use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;

use crate::hinemos::ClientSettings;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub verify_ssl: bool,
    pub timeout: Duration,
    pub bind_addr: String,
    pub bind_port: u16,
    pub api_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required and must not be empty")]
    Missing(&'static str),
    #[error("HINEMOS_BASE_URL must start with http:// or https://")]
    InvalidBaseUrl,
    #[error("HINEMOS_VERIFY_SSL must be one of true, false, 1, 0, yes, no")]
    InvalidVerifySsl,
    #[error("HINEMOS_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,
    #[error("MCP_HTTP_PORT must be a valid u16")]
    InvalidPort,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required("HINEMOS_BASE_URL")?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl);
        }
        let username = required("HINEMOS_USERNAME")?;
        let password = required("HINEMOS_PASSWORD")?;

        let verify_ssl = optional("HINEMOS_VERIFY_SSL")
            .map(|value| parse_bool(&value).ok_or(ConfigError::InvalidVerifySsl))
            .transpose()?
            .unwrap_or(true);
        let timeout_secs = optional("HINEMOS_TIMEOUT_SECS")
            .map(|value| {
                value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidTimeout)
            })
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let bind_addr = optional("MCP_HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let bind_port = optional("MCP_HTTP_PORT")
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(8000);
        let api_token = optional("MCP_API_TOKEN");

        let config = Self {
            base_url,
            username,
            password,
            verify_ssl,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            bind_port,
            api_token,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            verify_ssl: self.verify_ssl,
            timeout: self.timeout,
        }
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
