//! Records exchanged with the stats provider and the summary built from them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::RustHoursError;
use crate::utils::validation::validate_player_id;

/// A validated Battlemetrics player ID (ASCII digits only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Validate and wrap a raw player ID.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        validate_player_id(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerId {
    type Err = RustHoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity fields of a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub last_seen: Option<DateTime<Utc>>,
}

/// Pre-aggregated playtime of a player on one server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerMeta {
    pub server_id: String,
    pub server_name: String,
    pub seconds_played: f64,
}

/// One session as returned by the provider, timestamps unparsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSession {
    pub start: Option<String>,
    pub stop: Option<String>,
    pub server_id: Option<String>,
}

/// A server referenced by a page of sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerInfo {
    pub server_id: String,
    pub name: String,
}

/// The single page of recent sessions fetched for a player.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionPage {
    pub sessions: Vec<RawSession>,
    pub servers: Vec<ServerInfo>,
}

/// Hours played on a single server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerHours {
    pub server_id: String,
    pub name: String,
    pub hours: f64,
}

/// Playtime breakdown for one player.
///
/// All hour figures are rounded to two decimals. Region and training totals
/// are sums of the rounded per-server figures, so they may drift from the
/// exact value by a few hundredths.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    pub player_id: PlayerId,
    pub total_hours: f64,
    pub us_hours: f64,
    pub eu_hours: f64,
    pub training_hours: f64,
    /// At most five servers, most played first.
    pub top_servers: Vec<ServerHours>,
    pub last_seen: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse() {
        let id = PlayerId::parse("123456789").unwrap();
        assert_eq!(id.as_str(), "123456789");
        assert_eq!(id.to_string(), "123456789");

        assert!(PlayerId::parse("abc").is_err());
        assert!(PlayerId::parse("12a").is_err());
        assert!(PlayerId::parse("").is_err());
        assert!("42".parse::<PlayerId>().is_ok());
    }
}
