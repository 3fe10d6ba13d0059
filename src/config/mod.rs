// src/config/mod.rs
// Process configuration, built once at startup and passed in explicitly.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // ── Gemini Configuration
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Static Assets
    pub static_dir: PathBuf,
}

/// Read an environment variable, falling back to `default` when missing or
/// unparseable. Values may carry trailing `#` comments from .env files.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from the environment. The Gemini API key is the
    /// only required value; its absence is fatal before the server starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            gemini_api_key,
            gemini_model: env_var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL.to_string()),
            gemini_timeout_secs: env_var_or("GEMINI_TIMEOUT_SECS", 60),
            host: env_var_or("JOURNEY_HOST", "0.0.0.0".to_string()),
            port: env_var_or("JOURNEY_PORT", 8080),
            static_dir: PathBuf::from(env_var_or("JOURNEY_STATIC_DIR", "./static".to_string())),
        })
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the bundled journey dataset.
    pub fn journey_data_path(&self) -> PathBuf {
        self.static_dir.join("journeyData.json")
    }

    /// Path of the single HTML page.
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Single test so the GEMINI_API_KEY mutations never race across threads.
    #[test]
    fn api_key_required_and_defaults_apply() {
        let original = env::var("GEMINI_API_KEY").ok();

        env::remove_var("GEMINI_API_KEY");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));

        env::set_var("GEMINI_API_KEY", "test-key");
        let config = Config::from_env().expect("key is set");
        assert_eq!(config.gemini_api_key, "test-key");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.journey_data_path().ends_with("journeyData.json"));

        match original {
            Some(val) => env::set_var("GEMINI_API_KEY", val),
            None => env::remove_var("GEMINI_API_KEY"),
        }
    }

    #[test]
    fn env_var_or_strips_comments() {
        env::set_var("JOURNEY_TEST_PORT", "9090 # local override");
        let port: u16 = env_var_or("JOURNEY_TEST_PORT", 8080);
        assert_eq!(port, 9090);
        env::remove_var("JOURNEY_TEST_PORT");
    }
}
