//! Rust hours library.
//!
//! This library provides the core functionality for the Rust hours Discord bot,
//! including Battlemetrics lookups, playtime aggregation, and reply formatting.

pub mod error;
pub mod config;
pub mod battlemetrics;
pub mod playtime;
pub mod guide;
pub mod health;
pub mod utils;

pub use error::{RustHoursError, Result};
pub use config::Config;
