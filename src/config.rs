// src/config.rs
use std::env;

use thiserror::Error;

use crate::services::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid { key: "DEBUG", value: raw })?,
            None => false,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            debug,
            gemini: GeminiConfig {
                api_key: lookup("GOOGLE_API_KEY"),
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "chat_relay=debug,tower_http=debug"
        } else {
            "chat_relay=info,tower_http=info"
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(!config.debug);
        assert_eq!(config.gemini.model, "gemini-1.5-flash-latest");
        assert!(config.gemini.api_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("GOOGLE_API_KEY", "abc"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEBUG", "True"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.debug);
        assert_eq!(config.default_log_filter(), "chat_relay=debug,tower_http=debug");
        assert_eq!(config.gemini.api_key.as_deref(), Some("abc"));
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
    }

    #[test]
    fn rejects_bad_port_and_flag() {
        assert!(matches!(load(&[("PORT", "http")]), Err(ConfigError::Invalid { key: "PORT", .. })));
        assert!(matches!(load(&[("DEBUG", "maybe")]), Err(ConfigError::Invalid { key: "DEBUG", .. })));
    }
}
