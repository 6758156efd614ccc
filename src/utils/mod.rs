//! Shared helpers for input validation and reply formatting.

pub mod format;
pub mod validation;
