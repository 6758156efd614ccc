//! Text formatting for command replies.

use chrono::{DateTime, Utc};

use crate::playtime::{PlayerId, ServerHours};

/// Public profile page of a Battlemetrics player.
pub fn profile_url(player_id: &PlayerId) -> String {
    format!("https://www.battlemetrics.com/players/{}", player_id)
}

/// Format an hour figure the way the bot shows it, e.g. `12.5h` or `3h`.
pub fn format_hours(hours: f64) -> String {
    format!("{}h", hours)
}

/// Numbered list of the most played servers, one per line.
///
/// # Examples
///
/// ```
/// use rusthours::playtime::ServerHours;
/// use rusthours::utils::format::top_servers_text;
///
/// let servers = vec![ServerHours { server_id: "1".into(), name: "NA Main".into(), hours: 2.5 }];
/// assert_eq!(top_servers_text(&servers), "1. **NA Main** - 2.5h");
/// assert_eq!(top_servers_text(&[]), "No server data available");
/// ```
pub fn top_servers_text(servers: &[ServerHours]) -> String {
    if servers.is_empty() {
        return "No server data available".to_string();
    }

    servers
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. **{}** - {}", i + 1, s.name, format_hours(s.hours)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Last seen time as a Discord relative timestamp, or `Unknown`.
pub fn last_seen_text(last_seen: Option<DateTime<Utc>>) -> String {
    match last_seen {
        Some(ts) => format!("<t:{}:R>", ts.timestamp()),
        None => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(name: &str, hours: f64) -> ServerHours {
        ServerHours { server_id: name.to_lowercase(), name: name.to_string(), hours }
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2h");
        assert_eq!(format_hours(12.5), "12.5h");
        assert_eq!(format_hours(0.07), "0.07h");
    }

    #[test]
    fn test_top_servers_text() {
        let servers = vec![server("Rustoria US", 120.25), server("EU Aim", 3.0)];
        assert_eq!(
            top_servers_text(&servers),
            "1. **Rustoria US** - 120.25h\n2. **EU Aim** - 3h"
        );
    }

    #[test]
    fn test_profile_url() {
        let id = PlayerId::parse("987654321").unwrap();
        assert_eq!(profile_url(&id), "https://www.battlemetrics.com/players/987654321");
    }

    #[test]
    fn test_last_seen_text() {
        let ts = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(last_seen_text(Some(ts)), "<t:1704067200:R>");
        assert_eq!(last_seen_text(None), "Unknown");
    }
}
