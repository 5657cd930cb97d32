//! Server configuration from environment variables
//!
//! Every variable is optional. Missing values use the defaults below and
//! unparsable values log a warning and fall back to the same defaults.

use crate::emission_model::EmissionModel;
use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Optional JSON override for the emission factors
    pub model_path: Option<PathBuf>,
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            model_path: None,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let model_path = lookup("FOOTPRINT_MODEL_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let config = Self {
            port: try_load(&lookup, "PORT", defaults.port),
            bind_addr: try_load(&lookup, "BIND_ADDR", defaults.bind_addr),
            model_path,
            max_batch_size: try_load(&lookup, "MAX_BATCH_SIZE", defaults.max_batch_size),
        };

        info!("Configuration:");
        info!("  BIND_ADDR: {}", config.bind_addr);
        info!("  PORT: {}", config.port);
        info!("  MAX_BATCH_SIZE: {}", config.max_batch_size);
        match &config.model_path {
            Some(path) => info!("  FOOTPRINT_MODEL_PATH: {}", path.display()),
            None => info!("  FOOTPRINT_MODEL_PATH not set, using standard emission factors"),
        }

        config
    }

    /// The override model if one is configured, otherwise the standard one
    pub fn emission_model(&self) -> anyhow::Result<EmissionModel> {
        match &self.model_path {
            Some(path) => EmissionModel::load(path),
            None => Ok(EmissionModel::STANDARD),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
        default
    })
}
