//! Configuration management for the Rust hours bot.
//!
//! This module handles loading and validating environment variables and application settings.

use crate::battlemetrics::DEFAULT_API_URL;
use crate::error::{RustHoursError, Result};
use crate::playtime::PlaytimeSource;
use std::env;

/// Default port of the health check listener.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Guild to register commands in; commands are registered globally when unset
    pub guild_id: Option<u64>,
    /// Base URL of the Battlemetrics API
    pub battlemetrics_api_url: String,
    /// Optional static Battlemetrics API token
    pub battlemetrics_token: Option<String>,
    /// Whether playtime comes from server meta totals or raw sessions
    pub playtime_source: PlaytimeSource,
    /// Port of the health check listener
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read required environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rusthours::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// println!("Playtime source: {}", config.playtime_source);
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| RustHoursError::Config(
                "Missing DISCORD_TOKEN environment variable. Set it in your environment or create a .env file (never commit this file).".to_string()
            ))?;

        let guild_id = Self::parse_guild_id(env::var("GUILD_ID").ok().as_deref())?;

        let battlemetrics_api_url = env::var("BATTLEMETRICS_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::validate_api_url(&battlemetrics_api_url)?;

        // An empty token is the same as no token
        let battlemetrics_token = env::var("BATTLEMETRICS_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let playtime_source = match env::var("PLAYTIME_SOURCE") {
            Ok(value) => value.parse()?,
            Err(_) => PlaytimeSource::default(),
        };

        let port = Self::parse_port(env::var("PORT").ok().as_deref())?;

        Ok(Self {
            discord_token,
            guild_id,
            battlemetrics_api_url,
            battlemetrics_token,
            playtime_source,
            port,
        })
    }

    /// Parse the optional guild ID used for per-guild command registration.
    fn parse_guild_id(value: Option<&str>) -> Result<Option<u64>> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => match raw.parse::<u64>() {
                Ok(id) if id > 0 => Ok(Some(id)),
                _ => Err(RustHoursError::Config(
                    format!("Invalid GUILD_ID: '{}'. Expected a Discord snowflake ID.", raw)
                )),
            },
        }
    }

    /// Parse the health check port, falling back to the default when unset.
    fn parse_port(value: Option<&str>) -> Result<u16> {
        match value.map(str::trim) {
            None | Some("") => Ok(DEFAULT_PORT),
            Some(raw) => raw.parse::<u16>()
                .map_err(|_| RustHoursError::Config(
                    format!("Invalid PORT: '{}'", raw)
                )),
        }
    }

    /// Validate the API base URL format using proper URL parsing.
    fn validate_api_url(url_str: &str) -> Result<()> {
        use url::Url;

        let parsed_url = Url::parse(url_str)
            .map_err(|e| RustHoursError::Config(
                format!("Invalid BATTLEMETRICS_API_URL '{}': {}", url_str, e)
            ))?;

        // Ensure it's HTTP or HTTPS
        let scheme = parsed_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(RustHoursError::Config(
                format!("BATTLEMETRICS_API_URL must use http:// or https:// scheme, got: '{}'", scheme)
            ));
        }

        // Ensure it has a host
        if parsed_url.host_str().is_none() {
            return Err(RustHoursError::Config(
                format!("BATTLEMETRICS_API_URL must contain a valid host: '{}'", url_str)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_url() {
        assert!(Config::validate_api_url("https://api.battlemetrics.com").is_ok());
        assert!(Config::validate_api_url("http://127.0.0.1:8081").is_ok());

        assert!(Config::validate_api_url("api.battlemetrics.com").is_err());
        assert!(Config::validate_api_url("ftp://api.battlemetrics.com").is_err());
        assert!(Config::validate_api_url("").is_err());
    }

    #[test]
    fn test_parse_guild_id() {
        assert_eq!(Config::parse_guild_id(None).unwrap(), None);
        assert_eq!(Config::parse_guild_id(Some("")).unwrap(), None);
        assert_eq!(
            Config::parse_guild_id(Some("1385663380379009186")).unwrap(),
            Some(1385663380379009186)
        );

        assert!(Config::parse_guild_id(Some("guild")).is_err());
        assert!(Config::parse_guild_id(Some("0")).is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(Config::parse_port(None).unwrap(), DEFAULT_PORT);
        assert_eq!(Config::parse_port(Some(" 3000 ")).unwrap(), 3000);

        assert!(Config::parse_port(Some("99999")).is_err());
        assert!(Config::parse_port(Some("http")).is_err());
    }
}
