//! Keyword classification of server names into region and category buckets.

use once_cell::sync::Lazy;
use regex::Regex;

static US_PATTERN: Lazy<Regex> = Lazy::new(|| keyword_regex(&[
    "US", "USA", "America", "NA", "West", "East", "Central",
]));

static EU_PATTERN: Lazy<Regex> = Lazy::new(|| keyword_regex(&[
    "EU", "Europe", "UK", "Germany", "France", "Netherlands", "London", "Amsterdam",
]));

static TRAINING_PATTERN: Lazy<Regex> = Lazy::new(|| keyword_regex(&[
    "aim", "training", "train", "combat", "arena", "dm", "deathmatch", "practice", "warmup",
]));

fn keyword_regex(keywords: &[&str]) -> Regex {
    // ASCII word boundaries: a keyword next to a non-ASCII letter still matches
    let pattern = format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", keywords.join("|"));
    // Keywords are fixed literals, the pattern always compiles.
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid keyword pattern {}: {}", pattern, e))
}

/// Region a server is hosted in, as far as its name tells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
}

/// Buckets a server name falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerClass {
    /// US is checked first; a name matching both lists counts as US.
    pub region: Option<Region>,
    /// Aim training / practice server, independent of region.
    pub training: bool,
}

/// Classify a server by its display name.
///
/// # Examples
///
/// ```
/// use rusthours::playtime::classify::{classify, Region};
///
/// let class = classify("EU Training Arena");
/// assert_eq!(class.region, Some(Region::Eu));
/// assert!(class.training);
/// ```
pub fn classify(server_name: &str) -> ServerClass {
    let region = if US_PATTERN.is_match(server_name) {
        Some(Region::Us)
    } else if EU_PATTERN.is_match(server_name) {
        Some(Region::Eu)
    } else {
        None
    };

    ServerClass {
        region,
        training: TRAINING_PATTERN.is_match(server_name),
    }
}
