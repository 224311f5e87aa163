use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{LinearError, LinearResult};

lazy_static! {
    // Common Linear issue ID patterns, e.g. ENG-123
    static ref ISSUE_PATTERN: Regex = Regex::new(r"(?i)\b([a-z][a-z0-9]*-\d+)\b").expect("valid issue regex");
}

/// Accepts `ENG-123`, `eng-123`, a Linear issue URL or a raw issue UUID.
pub fn parse_issue_id(input: &str) -> LinearResult<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LinearError::InvalidInput("Issue identifier is required".to_string()));
    }

    if input.contains("/issue/") {
        let after = input.split("/issue/").nth(1).unwrap_or("");
        if let Some(cap) = ISSUE_PATTERN.captures(after) {
            return Ok(cap[1].to_uppercase());
        }
        return Err(LinearError::InvalidInput(format!("No issue identifier found in '{}'", input)));
    }

    if ISSUE_PATTERN.find(input).map(|m| m.as_str().len()) == Some(input.len()) {
        return Ok(input.to_uppercase());
    }

    Ok(input.to_string())
}
