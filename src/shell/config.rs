// Runtime settings for the fake.
//
// The fake listens on 0.0.0.0:3000 unless the environment says otherwise.
// A `.env` file in the working directory is honoured when present.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const HOST_VAR: &str = "HONEYCOMB_FAKE_HOST";
pub const PORT_VAR: &str = "HONEYCOMB_FAKE_PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            settings.host = value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?;
        }

        if let Some(value) = lookup(PORT_VAR) {
            settings.port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?;
        }

        Ok(settings)
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
