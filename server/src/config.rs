use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;

const STATIC_DIR_VAR: &str = "SITE_STATIC_DIR";
const BASE_URL_VAR: &str = "SITE_BASE_URL";
const REDIRECT_WWW_VAR: &str = "SITE_REDIRECT_WWW";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Server settings that are not part of the cargo-leptos configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding the compiled site assets.
    pub static_dir: PathBuf,
    /// Public origin used for absolute URLs, without a trailing slash.
    pub base_url: String,
    /// Whether `www.` hosts are permanently redirected to the bare domain.
    pub redirect_www: bool,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, ConfigError> {
        Self::from_lookup(site_addr, |var| env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup(
        site_addr: SocketAddr,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let lookup = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let static_dir = lookup(STATIC_DIR_VAR).map_or_else(|| PathBuf::from("target/site"), PathBuf::from);

        let base_url = match lookup(BASE_URL_VAR) {
            Some(value) => parse_base_url(BASE_URL_VAR, &value)?,
            None => format!("http://{site_addr}"),
        };

        let redirect_www = match lookup(REDIRECT_WWW_VAR) {
            Some(value) => parse_bool(REDIRECT_WWW_VAR, &value)?,
            None => true,
        };

        Ok(Self {
            static_dir,
            base_url,
            redirect_www,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_owned(),
        }),
    }
}

fn parse_base_url(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    let has_host = ["https://", "http://"]
        .iter()
        .find_map(|scheme| value.strip_prefix(scheme))
        .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'));
    if has_host {
        Ok(value.trim_end_matches('/').to_owned())
    } else {
        Err(ConfigError::InvalidUrl {
            var,
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn addr() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 3007))
    }

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(addr(), |var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("target/site"));
        assert_eq!(config.base_url, "http://127.0.0.1:3007");
        assert!(config.redirect_www);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            (STATIC_DIR_VAR, "/srv/site"),
            (BASE_URL_VAR, "https://drinterested.org/"),
            (REDIRECT_WWW_VAR, "off"),
        ])
        .unwrap();
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.base_url, "https://drinterested.org");
        assert!(!config.redirect_www);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = config(&[(REDIRECT_WWW_VAR, "  "), (BASE_URL_VAR, "")]).unwrap();
        assert!(config.redirect_www);
        assert_eq!(config.base_url, "http://127.0.0.1:3007");
    }

    #[test]
    fn test_invalid_bool() {
        assert_matches!(
            config(&[(REDIRECT_WWW_VAR, "maybe")]),
            Err(ConfigError::InvalidBool { var: REDIRECT_WWW_VAR, .. })
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert_matches!(
            config(&[(BASE_URL_VAR, "drinterested.org")]),
            Err(ConfigError::InvalidUrl { .. })
        );
        assert_matches!(
            config(&[(BASE_URL_VAR, "https://")]),
            Err(ConfigError::InvalidUrl { .. })
        );
    }
}
