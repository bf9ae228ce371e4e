//! Application configuration loaded from environment variables.
//!
//! Credentials come from the process environment (or a `.env` file); the
//! resulting struct is built once at startup and immutable thereafter.

use std::env;
use std::path::PathBuf;

/// Default OAuth loopback port. Must match the redirect URI registered
/// with Strava exactly.
const DEFAULT_REDIRECT_PORT: u16 = 8000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Path of the credential store file
    pub token_file: PathBuf,
    /// Loopback port for the OAuth redirect URI
    pub redirect_port: u16,
    /// Port for the web receipt server
    pub port: u16,
    /// Monitor polling interval in seconds
    pub poll_interval_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            token_file: PathBuf::from(".strava_tokens.json"),
            redirect_port: DEFAULT_REDIRECT_PORT,
            port: 8080,
            poll_interval_secs: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: env::var("STRAVA_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_ID"))?,
            strava_client_secret: env::var("STRAVA_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STRAVA_CLIENT_SECRET"))?,
            token_file: env::var("TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".strava_tokens.json")),
            redirect_port: env::var("REDIRECT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REDIRECT_PORT),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        })
    }

    /// Redirect URI for the loopback callback listener.
    pub fn redirect_uri(&self) -> String {
        format!("http://localhost:{}", self.redirect_port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("STRAVA_CLIENT_ID", "test_id");
        env::set_var("STRAVA_CLIENT_SECRET", "test_secret");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.strava_client_id, "test_id");
        assert_eq!(config.strava_client_secret, "test_secret");
        assert_eq!(config.redirect_port, 8000);
        assert_eq!(config.redirect_uri(), "http://localhost:8000");
        assert_eq!(config.poll_interval_secs, 300);
    }
}
