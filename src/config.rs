use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{anyhow, Result};
use tracing::info;

use crate::uploads::DEFAULT_UPLOAD_URL;

pub const UPLOAD_URL_VAR: &str = "PAIR_MARKET_UPLOAD_URL";
pub const UPLOAD_TIMEOUT_VAR: &str = "PAIR_MARKET_UPLOAD_TIMEOUT_SECS";
pub const CATALOG_VAR: &str = "PAIR_MARKET_CATALOG";

#[derive(Debug, Clone)]
pub struct Config {
    pub upload_url: String,
    pub upload_timeout: Duration,
    /// JSON catalog to load instead of the built-in listings
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Read settings from the environment, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            upload_url: try_load(&lookup, UPLOAD_URL_VAR, DEFAULT_UPLOAD_URL)?,
            upload_timeout: Duration::from_secs(try_load(&lookup, UPLOAD_TIMEOUT_VAR, "30")?),
            catalog_path: lookup(CATALOG_VAR)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim()
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}
