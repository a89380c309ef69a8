//! Server configuration

use std::str::FromStr;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub ai_timeout_secs: u64,
    pub chat_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            api_key: None,
            cors_origins: vec!["*".to_string()],
            rate_limit_rps: 100,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            ai_timeout_secs: 15,
            chat_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            api_key: non_empty_var("API_KEY"),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.cors_origins),
            rate_limit_rps: parse_var("RATE_LIMIT_RPS", defaults.rate_limit_rps).max(1),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            ai_timeout_secs: parse_var("AI_TIMEOUT_SECS", defaults.ai_timeout_secs),
            chat_seed: non_empty_var("CHAT_SEED").and_then(|v| v.parse().ok()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read a numeric variable, keeping the default when it is missing or invalid
fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(variable = name, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        assert_eq!(
            parse_origins("https://a.example, ,https://b.example "),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.rate_limit_rps, 100);
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.cors_origins, vec!["*"]);
    }
}
