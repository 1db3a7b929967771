//! User input utilities for the interactive menu
//!
//! This module provides functions for reading and parsing values typed at
//! interactive prompts. Parse failures are reported as recoverable
//! `InvalidInput` errors so the menu loop can reprompt instead of exiting.

use crate::constants::is_known_fuel_type;
use crate::{Error, Result};
use std::io::{self, Write};

/// Print a prompt and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(input.trim().to_string())
}

/// Prompt for a record identifier
pub fn prompt_id(prompt: &str) -> Result<u32> {
    let input = prompt_line(prompt)?;
    input.parse().map_err(|_| {
        Error::invalid_input(format!(
            "'{}' is not a valid identifier (expected a non-negative number)",
            input
        ))
    })
}

/// Prompt for a signed vehicle-count change
pub fn prompt_delta(prompt: &str) -> Result<i64> {
    let input = prompt_line(prompt)?;
    input.parse().map_err(|_| {
        Error::invalid_input(format!(
            "'{}' is not a valid count change (expected a signed number)",
            input
        ))
    })
}

/// Prompt for a fuel-type code
///
/// Codes form an open set, so any non-empty token is accepted.
pub fn prompt_fuel_type(prompt: &str) -> Result<String> {
    let input = prompt_line(prompt)?;
    if input.is_empty() {
        return Err(Error::invalid_input(
            "Fuel-type code cannot be empty".to_string(),
        ));
    }
    if input.split_whitespace().count() != 1 {
        return Err(Error::invalid_input(format!(
            "'{}' is not a valid fuel-type code (expected a single token)",
            input
        )));
    }
    if !is_known_fuel_type(&input) {
        // Codes form an open set, so unusual codes are accepted but noted.
        println!("note: '{}' is not a commonly used fuel-type code", input);
    }
    Ok(input)
}
