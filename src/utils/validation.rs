//! Validation utilities for user input.
//!
//! This module provides reusable validation functions for command arguments.

use crate::error::{RustHoursError, Result};

/// Validate a Battlemetrics player ID.
///
/// Player IDs must:
/// - Be non-empty
/// - Contain only ASCII digits
///
/// # Arguments
///
/// * `player_id` - The player ID to validate, as typed by the user
///
/// # Returns
///
/// Returns `Ok(())` if the ID is valid, otherwise returns an error describing the issue.
///
/// # Examples
///
/// ```
/// use rusthours::utils::validation::validate_player_id;
///
/// assert!(validate_player_id("123456789").is_ok());
/// assert!(validate_player_id("").is_err());
/// assert!(validate_player_id("12a").is_err());
/// ```
pub fn validate_player_id(player_id: &str) -> Result<()> {
    if player_id.is_empty() {
        return Err(RustHoursError::InvalidInput(
            "Player ID cannot be empty".to_string()
        ));
    }

    if !player_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(RustHoursError::InvalidInput(
            format!("Player ID must be numeric, got '{}'", player_id)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_id() {
        // Valid IDs
        assert!(validate_player_id("123456789").is_ok());
        assert!(validate_player_id("0").is_ok());

        // Invalid IDs
        assert!(validate_player_id("").is_err());
        assert!(validate_player_id("abc").is_err());
        assert!(validate_player_id("12a").is_err());
        assert!(validate_player_id(" 123").is_err()); // leading space
        assert!(validate_player_id("-5").is_err());
        assert!(validate_player_id("１２３").is_err()); // full-width digits
    }

    #[test]
    fn test_validate_player_id_error_kind() {
        match validate_player_id("abc") {
            Err(RustHoursError::InvalidInput(msg)) => assert!(msg.contains("abc")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
