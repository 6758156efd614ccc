//! Discord bot commands.
//!
//! This module contains all available bot commands organized by functionality.

pub mod ping;
pub mod hours;
pub mod guide;

pub use ping::ping;
pub use hours::hours;
pub use guide::guide;

/// Embed color of regular replies (Rust orange).
pub const RUST_ORANGE: u32 = 0xce422b;
/// Embed color of error replies.
pub const ERROR_RED: u32 = 0xff0000;
/// Rust game icon hosted by Battlemetrics.
pub const RUST_ICON_URL: &str = "https://cdn.battlemetrics.com/b/standardicons/rust.png";
