//! Runtime configuration, read from the environment.

use crate::store::StoreConfig;
use std::env;
use std::path::PathBuf;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: StoreConfig::Memory,
        }
    }
}

impl Config {
    /// `HOST`, `PORT` and `TOURNAMENT_DATA_DIR`. Setting the data dir selects the CSV store.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("HOST").unwrap_or_else(default_host);
        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let store = match var("TOURNAMENT_DATA_DIR") {
            Some(dir) if !dir.trim().is_empty() => StoreConfig::Csv {
                data_dir: PathBuf::from(dir),
            },
            _ => StoreConfig::Memory,
        };
        Self { host, port, store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_vars(|_| None), Config::default());
    }

    #[test]
    fn data_dir_selects_csv_store() {
        let vars: HashMap<&str, &str> =
            [("PORT", "9000"), ("TOURNAMENT_DATA_DIR", "/tmp/swiss")].into();
        let cfg = Config::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.port, 9000);
        assert_eq!(
            cfg.store,
            StoreConfig::Csv {
                data_dir: PathBuf::from("/tmp/swiss")
            }
        );
    }

    #[test]
    fn bad_port_falls_back() {
        let cfg = Config::from_vars(|k| (k == "PORT").then(|| "nope".to_string()));
        assert_eq!(cfg.port, 8080);
    }
}
