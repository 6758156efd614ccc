//! Battlemetrics API integration.
//!
//! This module provides a [`StatsProvider`] backed by the public Battlemetrics
//! JSON:API, used to look up players and the time they spent on servers.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RustHoursError, Result};
use crate::playtime::reduce::parse_timestamp;
use crate::playtime::{
    PlayerId, PlayerProfile, RawSession, ServerInfo, ServerMeta, SessionPage, StatsProvider,
};

/// Default Battlemetrics API base URL.
pub const DEFAULT_API_URL: &str = "https://api.battlemetrics.com";

/// Time allowed for each request before it is treated as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of sessions requested; only this single page is ever read.
pub const SESSION_PAGE_SIZE: u32 = 100;

#[derive(Deserialize, Debug)]
struct Document<T> {
    data: T,
    #[serde(default)]
    included: Vec<IncludedResource>,
}

#[derive(Deserialize, Debug)]
struct PlayerResource {
    attributes: PlayerAttributes,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PlayerAttributes {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    last_seen: Option<String>,
}

#[derive(Deserialize, Debug)]
struct IncludedResource {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    attributes: Option<IncludedAttributes>,
    #[serde(default)]
    meta: Option<IncludedMeta>,
}

#[derive(Deserialize, Debug)]
struct IncludedAttributes {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct IncludedMeta {
    #[serde(default)]
    time_played: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct SessionResource {
    #[serde(default)]
    attributes: Option<SessionAttributes>,
    #[serde(default)]
    relationships: Option<SessionRelationships>,
}

#[derive(Deserialize, Debug)]
struct SessionAttributes {
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    stop: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SessionRelationships {
    #[serde(default)]
    server: Option<Relationship>,
}

#[derive(Deserialize, Debug)]
struct Relationship {
    #[serde(default)]
    data: Option<ResourceRef>,
}

#[derive(Deserialize, Debug)]
struct ResourceRef {
    id: String,
}

impl IncludedResource {
    fn is_server(&self) -> bool {
        self.kind == "server"
    }

    fn name(&self) -> String {
        self.attributes
            .as_ref()
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| "Unknown server".to_string())
    }
}

impl From<PlayerAttributes> for PlayerProfile {
    fn from(attributes: PlayerAttributes) -> Self {
        Self {
            name: attributes.name.unwrap_or_else(|| "Unknown".to_string()),
            last_seen: attributes.last_seen.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<SessionResource> for RawSession {
    fn from(resource: SessionResource) -> Self {
        let (start, stop) = match resource.attributes {
            Some(a) => (a.start, a.stop),
            None => (None, None),
        };
        let server_id = resource
            .relationships
            .and_then(|r| r.server)
            .and_then(|s| s.data)
            .map(|d| d.id);

        Self { start, stop, server_id }
    }
}

/// Client for the Battlemetrics API.
#[derive(Debug, Clone)]
pub struct BattlemetricsClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl BattlemetricsClient {
    /// Create a client for the given API base URL.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rusthours::battlemetrics::{BattlemetricsClient, DEFAULT_API_URL};
    /// use rusthours::playtime::{PlayerId, StatsProvider};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = BattlemetricsClient::new(reqwest::Client::new(), DEFAULT_API_URL);
    /// let profile = client.player(&PlayerId::parse("123456789")?).await?;
    /// println!("{}", profile.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Send a static bearer token with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// GET a JSON document, mapping 404 to `NotFound` and any other failure to `Provider`.
    async fn get_document<T: DeserializeOwned>(
        &self,
        player_id: &PlayerId,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(&url).query(query).timeout(self.timeout);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else if status.as_u16() == 404 {
            Err(RustHoursError::NotFound(format!("Player {} does not exist", player_id)))
        } else {
            warn!("Battlemetrics returned {} for {}", status, url);
            Err(RustHoursError::Provider(format!("API returned error: {}", status)))
        }
    }
}

#[async_trait]
impl StatsProvider for BattlemetricsClient {
    async fn player(&self, player_id: &PlayerId) -> Result<PlayerProfile> {
        let path = format!("/players/{}", player_id);
        let document: Document<PlayerResource> = self.get_document(player_id, &path, &[]).await?;
        Ok(document.data.attributes.into())
    }

    async fn player_with_server_meta(
        &self,
        player_id: &PlayerId,
    ) -> Result<(PlayerProfile, Vec<ServerMeta>)> {
        let path = format!("/players/{}", player_id);
        let document: Document<PlayerResource> = self
            .get_document(player_id, &path, &[("include", "server")])
            .await?;

        let servers = document
            .included
            .iter()
            .filter(|r| r.is_server())
            .filter_map(|r| {
                let seconds = r.meta.as_ref()?.time_played?;
                Some(ServerMeta {
                    server_id: r.id.clone(),
                    server_name: r.name(),
                    seconds_played: seconds,
                })
            })
            .collect();

        Ok((document.data.attributes.into(), servers))
    }

    async fn recent_sessions(&self, player_id: &PlayerId) -> Result<SessionPage> {
        let path = format!("/players/{}/relationships/sessions", player_id);
        let page_size = SESSION_PAGE_SIZE.to_string();
        let document: Document<Vec<SessionResource>> = self
            .get_document(
                player_id,
                &path,
                &[("include", "server"), ("page[size]", page_size.as_str())],
            )
            .await?;

        let servers = document
            .included
            .iter()
            .filter(|r| r.is_server())
            .map(|r| ServerInfo {
                server_id: r.id.clone(),
                name: r.name(),
            })
            .collect();

        Ok(SessionPage {
            sessions: document.data.into_iter().map(RawSession::from).collect(),
            servers,
        })
    }
}
