//! Playtime aggregation.
//!
//! Turns a player ID into a [`PlayerSummary`] by reading playtime records
//! from a [`StatsProvider`] and reducing them into hour totals.

pub mod classify;
pub mod model;
pub mod reduce;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{RustHoursError, Result};
pub use model::{
    PlayerId, PlayerProfile, PlayerSummary, RawSession, ServerHours, ServerInfo, ServerMeta,
    SessionPage,
};

/// Read-only source of player and playtime records.
///
/// Implementations must map "no such player" to [`RustHoursError::NotFound`]
/// and every other failure to [`RustHoursError::Provider`].
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch a player's identity.
    async fn player(&self, player_id: &PlayerId) -> Result<PlayerProfile>;

    /// Fetch a player's identity together with per-server playtime totals.
    async fn player_with_server_meta(
        &self,
        player_id: &PlayerId,
    ) -> Result<(PlayerProfile, Vec<ServerMeta>)>;

    /// Fetch the most recent page of sessions and the servers they reference.
    async fn recent_sessions(&self, player_id: &PlayerId) -> Result<SessionPage>;
}

/// Where playtime figures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaytimeSource {
    /// Provider-computed totals per server, one request.
    #[default]
    ServerMeta,
    /// Summed session durations from the latest page of sessions, two requests.
    Sessions,
}

impl FromStr for PlaytimeSource {
    type Err = RustHoursError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meta" | "server-meta" | "server_meta" => Ok(Self::ServerMeta),
            "sessions" => Ok(Self::Sessions),
            other => Err(RustHoursError::Config(format!(
                "Unknown playtime source '{}'. Expected 'meta' or 'sessions'.",
                other
            ))),
        }
    }
}

impl fmt::Display for PlaytimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerMeta => f.write_str("meta"),
            Self::Sessions => f.write_str("sessions"),
        }
    }
}

/// Builds player summaries from a stats provider.
#[derive(Clone)]
pub struct PlaytimeAggregator {
    provider: Arc<dyn StatsProvider>,
    source: PlaytimeSource,
}

impl PlaytimeAggregator {
    pub fn new(provider: Arc<dyn StatsProvider>, source: PlaytimeSource) -> Self {
        Self { provider, source }
    }

    /// Aggregate the playtime of a player.
    ///
    /// The ID is validated before any request is made.
    ///
    /// # Errors
    ///
    /// - [`RustHoursError::InvalidInput`] if `player_id` is not numeric
    /// - [`RustHoursError::NotFound`] if the provider has no such player
    /// - [`RustHoursError::Provider`] on any failed or malformed read
    pub async fn aggregate(&self, player_id: &str) -> Result<PlayerSummary> {
        let player_id = PlayerId::parse(player_id)?;
        info!(%player_id, source = %self.source, "Aggregating playtime");

        let summary = match self.source {
            PlaytimeSource::ServerMeta => {
                let (profile, records) = self.provider.player_with_server_meta(&player_id).await?;
                debug!("Found {} servers with playtime data", records.len());
                reduce::summarize_server_meta(player_id, profile, &records)
            }
            PlaytimeSource::Sessions => {
                let profile = self.provider.player(&player_id).await?;
                let page = self.provider.recent_sessions(&player_id).await?;
                debug!(
                    "Found {} sessions across {} servers",
                    page.sessions.len(),
                    page.servers.len()
                );
                reduce::summarize_sessions(player_id, profile, &page)
            }
        };

        info!(
            player = %summary.name,
            total_hours = summary.total_hours,
            "Playtime aggregated"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory provider that counts the requests made against it.
    #[derive(Default)]
    struct FakeProvider {
        missing: bool,
        failing: bool,
        meta: Vec<ServerMeta>,
        page: SessionPage,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn check(&self, player_id: &PlayerId) -> Result<PlayerProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(RustHoursError::Provider("HTTP 503".to_string()));
            }
            if self.missing {
                return Err(RustHoursError::NotFound(format!("player {}", player_id)));
            }
            Ok(PlayerProfile { name: "Garry".to_string(), last_seen: None })
        }
    }

    #[async_trait]
    impl StatsProvider for FakeProvider {
        async fn player(&self, player_id: &PlayerId) -> Result<PlayerProfile> {
            self.check(player_id)
        }

        async fn player_with_server_meta(
            &self,
            player_id: &PlayerId,
        ) -> Result<(PlayerProfile, Vec<ServerMeta>)> {
            Ok((self.check(player_id)?, self.meta.clone()))
        }

        async fn recent_sessions(&self, player_id: &PlayerId) -> Result<SessionPage> {
            self.check(player_id)?;
            Ok(self.page.clone())
        }
    }

    fn aggregator(provider: FakeProvider, source: PlaytimeSource) -> (PlaytimeAggregator, Arc<FakeProvider>) {
        let provider = Arc::new(provider);
        (PlaytimeAggregator::new(provider.clone(), source), provider)
    }

    #[tokio::test]
    async fn test_invalid_ids_never_reach_provider() {
        let (agg, provider) = aggregator(FakeProvider::default(), PlaytimeSource::Sessions);

        for raw in ["abc", "12a", ""] {
            let result = agg.aggregate(raw).await;
            assert!(matches!(result, Err(RustHoursError::InvalidInput(_))), "{:?}", raw);
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

        assert!(agg.aggregate("123456789").await.is_ok());
    }

    #[tokio::test]
    async fn test_server_meta_mode_uses_one_request() {
        let fake = FakeProvider {
            meta: vec![ServerMeta {
                server_id: "S1".to_string(),
                server_name: "US Long".to_string(),
                seconds_played: 7200.0,
            }],
            ..Default::default()
        };
        let (agg, provider) = aggregator(fake, PlaytimeSource::ServerMeta);

        let summary = agg.aggregate("42").await.unwrap();
        assert_eq!(summary.total_hours, 2.0);
        assert_eq!(summary.us_hours, 2.0);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sessions_mode_uses_two_requests() {
        let fake = FakeProvider {
            page: SessionPage {
                sessions: vec![RawSession {
                    start: Some("2024-01-01T00:00:00Z".to_string()),
                    stop: Some("2024-01-01T02:00:00Z".to_string()),
                    server_id: Some("S1".to_string()),
                }],
                servers: vec![ServerInfo { server_id: "S1".to_string(), name: "NA Main".to_string() }],
            },
            ..Default::default()
        };
        let (agg, provider) = aggregator(fake, PlaytimeSource::Sessions);

        let summary = agg.aggregate("42").await.unwrap();
        assert_eq!(summary.name, "Garry");
        assert_eq!(summary.total_hours, 2.0);
        assert_eq!(summary.top_servers[0].name, "NA Main");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_not_found_stops_after_lookup() {
        let fake = FakeProvider { missing: true, ..Default::default() };
        let (agg, provider) = aggregator(fake, PlaytimeSource::Sessions);

        let result = agg.aggregate("42").await;
        assert!(matches!(result, Err(RustHoursError::NotFound(_))));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let fake = FakeProvider { failing: true, ..Default::default() };
        let (agg, _) = aggregator(fake, PlaytimeSource::ServerMeta);

        let result = agg.aggregate("42").await;
        assert!(matches!(result, Err(RustHoursError::Provider(_))));
    }

    #[test]
    fn test_playtime_source_from_str() {
        assert_eq!("meta".parse::<PlaytimeSource>().unwrap(), PlaytimeSource::ServerMeta);
        assert_eq!("Sessions".parse::<PlaytimeSource>().unwrap(), PlaytimeSource::Sessions);
        assert_eq!(" server-meta ".parse::<PlaytimeSource>().unwrap(), PlaytimeSource::ServerMeta);
        assert!("raw".parse::<PlaytimeSource>().is_err());
        assert_eq!(PlaytimeSource::Sessions.to_string(), "sessions");
    }
}
