//! Server configuration, read from the environment at startup

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "atlas.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub database_path: String,
    pub data_dir: PathBuf,
    /// Frontend build to serve, if any
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = var("DATA_DIR").map(PathBuf::from).unwrap_or_else(|| {
            info!("DATA_DIR not set, using default: {}", DEFAULT_DATA_DIR);
            PathBuf::from(DEFAULT_DATA_DIR)
        });

        let database_path = var("DATABASE_PATH")
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE).to_string_lossy().to_string());

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| {
            info!("BIND_ADDRESS not set, using default: {}", DEFAULT_BIND_ADDRESS);
            DEFAULT_BIND_ADDRESS.to_string()
        });
        let bind_address = bind_address
            .parse()
            .with_context(|| format!("Invalid BIND_ADDRESS: {}", bind_address))?;

        let static_dir = var("STATIC_DIR").map(PathBuf::from);
        if static_dir.is_none() {
            warn!("STATIC_DIR not set, serving the API only");
        }

        Ok(Config {
            bind_address,
            database_path,
            data_dir,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(config.database_path.ends_with("atlas.db"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_database_path_follows_data_dir() {
        let config = Config::from_lookup(lookup(&[("DATA_DIR", "/srv/atlas")])).unwrap();

        assert_eq!(
            PathBuf::from(&config.database_path),
            PathBuf::from("/srv/atlas/atlas.db")
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATABASE_PATH", "/tmp/other.db"),
            ("STATIC_DIR", "/srv/www"),
            ("DATA_DIR", ""),
        ]))
        .unwrap();

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_path, "/tmp/other.db");
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/www")));
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_bad_bind_address() {
        let result = Config::from_lookup(lookup(&[("BIND_ADDRESS", "not-an-address")]));
        assert!(result.is_err());
    }
}
