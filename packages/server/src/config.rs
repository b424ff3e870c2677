// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Validates listener address, API key and CORS origin at startup

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

use whisper_config::{
    DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_PORT, WHISPER_API_KEY, WHISPER_CORS_ORIGIN,
    WHISPER_HOST, WHISPER_PORT,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(#[from] AddrParseError),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// When `None`, authentication is disabled
    pub api_key: Option<String>,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(WHISPER_HOST)
            .unwrap_or_else(|_| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()?;

        let port = match env::var(WHISPER_PORT) {
            Ok(port_str) => port_str.trim().parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };
        validate_port(port)?;

        let api_key = env::var(WHISPER_API_KEY)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let cors_origin =
            env::var(WHISPER_CORS_ORIGIN).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Config {
            host,
            port,
            api_key,
            cors_origin,
        })
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(
        mut self,
        host: Option<IpAddr>,
        port: Option<u16>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            validate_port(port)?;
            self.port = port;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn validate_port(port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(())
}

// Manual impl so the API key never reaches logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}
