//! Reduction of raw provider records into a [`PlayerSummary`].
//!
//! Both data sources feed the same `PlaytimeTally`, which keeps servers in
//! the order they were first seen so equal-hour ties stay stable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::classify::{classify, Region};
use super::model::{PlayerId, PlayerProfile, PlayerSummary, RawSession, ServerHours, ServerMeta, SessionPage};

/// Maximum number of servers listed in a summary.
pub const TOP_SERVER_LIMIT: usize = 5;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Round to two decimals, half away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert seconds to hours rounded to two decimals.
pub fn seconds_to_hours(seconds: f64) -> f64 {
    round_hundredths(seconds / SECONDS_PER_HOUR)
}

#[derive(Debug)]
struct ServerTally {
    server_id: String,
    name: String,
    seconds: f64,
}

/// Running per-server and grand totals, in seconds.
#[derive(Debug, Default)]
struct PlaytimeTally {
    total_seconds: f64,
    servers: Vec<ServerTally>,
    index: HashMap<String, usize>,
}

impl PlaytimeTally {
    /// Count time towards the grand total only.
    fn add_unlinked(&mut self, seconds: f64) {
        self.total_seconds += seconds;
    }

    /// Count time towards a server and the grand total.
    fn add(&mut self, server_id: &str, name: &str, seconds: f64) {
        self.total_seconds += seconds;
        match self.index.get(server_id) {
            Some(&i) => self.servers[i].seconds += seconds,
            None => {
                self.index.insert(server_id.to_string(), self.servers.len());
                self.servers.push(ServerTally {
                    server_id: server_id.to_string(),
                    name: name.to_string(),
                    seconds,
                });
            }
        }
    }

    fn into_summary(self, player_id: PlayerId, profile: PlayerProfile) -> PlayerSummary {
        let mut us_hours = 0.0;
        let mut eu_hours = 0.0;
        let mut training_hours = 0.0;

        let mut servers: Vec<ServerHours> = Vec::with_capacity(self.servers.len());
        for server in self.servers {
            let hours = seconds_to_hours(server.seconds);
            let class = classify(&server.name);
            match class.region {
                Some(Region::Us) => us_hours += hours,
                Some(Region::Eu) => eu_hours += hours,
                None => {}
            }
            if class.training {
                training_hours += hours;
            }
            if hours > 0.0 {
                servers.push(ServerHours {
                    server_id: server.server_id,
                    name: server.name,
                    hours,
                });
            }
        }

        // sort_by is stable: ties keep first-seen order
        servers.sort_by(|a, b| b.hours.total_cmp(&a.hours));
        servers.truncate(TOP_SERVER_LIMIT);

        PlayerSummary {
            name: profile.name,
            player_id,
            total_hours: seconds_to_hours(self.total_seconds),
            us_hours: round_hundredths(us_hours),
            eu_hours: round_hundredths(eu_hours),
            training_hours: round_hundredths(training_hours),
            top_servers: servers,
            last_seen: profile.last_seen,
        }
    }
}

/// Build a summary from provider-computed per-server totals.
pub fn summarize_server_meta(
    player_id: PlayerId,
    profile: PlayerProfile,
    records: &[ServerMeta],
) -> PlayerSummary {
    let mut tally = PlaytimeTally::default();
    for record in records {
        if record.seconds_played.is_nan() || record.seconds_played <= 0.0 {
            debug!(server_id = %record.server_id, "Skipping server without playtime");
            continue;
        }
        tally.add(&record.server_id, &record.server_name, record.seconds_played);
    }
    tally.into_summary(player_id, profile)
}

/// Build a summary from a page of raw sessions.
///
/// Sessions without both timestamps, with unparseable timestamps, or with a
/// non-positive duration are ignored. Sessions that are not linked to a
/// server still count towards the total.
pub fn summarize_sessions(
    player_id: PlayerId,
    profile: PlayerProfile,
    page: &SessionPage,
) -> PlayerSummary {
    let names: HashMap<&str, &str> = page
        .servers
        .iter()
        .map(|s| (s.server_id.as_str(), s.name.as_str()))
        .collect();

    let mut tally = PlaytimeTally::default();
    for session in &page.sessions {
        let Some(seconds) = session_seconds(session) else {
            continue;
        };
        if seconds <= 0.0 {
            continue;
        }

        match session.server_id.as_deref() {
            Some(server_id) => {
                let name = names.get(server_id).copied().unwrap_or("Unknown server");
                tally.add(server_id, name, seconds);
            }
            None => tally.add_unlinked(seconds),
        }
    }
    tally.into_summary(player_id, profile)
}

/// Duration of a complete session in seconds, `None` if it can't be measured.
fn session_seconds(session: &RawSession) -> Option<f64> {
    let start = parse_timestamp(session.start.as_deref()?)?;
    let stop = parse_timestamp(session.stop.as_deref()?)?;
    let millis = (stop - start).num_milliseconds();
    Some(millis as f64 / 1000.0)
}

/// Parse an RFC 3339 timestamp, logging and discarding malformed values.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            debug!("Ignoring malformed timestamp '{}': {}", raw, e);
            None
        }
    }
}
