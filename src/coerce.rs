//! Form input handling
//!
//! Turns raw text fields into typed values. Empty or unreadable text falls
//! back to a default instead of failing, so a half-filled form still
//! produces an estimate.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, warn};

use crate::error::InputError;
use crate::models::EstimationInput;

// Pattern: optional currency prefix, digits with thousands separators, optional unit suffix
static NUMBER_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:nt\$|ntd|\$)?\s*(-?[\d,]*\.?\d+)\s*[a-z³/%]*$"));

/// Extract the numeric part of a field such as "NT$ 3,200" or "1,500 kWh"
fn parse_number(text: &str) -> Result<Option<f64>, InputError> {
    let number_re = NUMBER_RE.as_ref().map_err(|err| InputError::Pattern(err.clone()))?;
    let Some(cap) = number_re.captures(text) else {
        return Ok(None);
    };
    Ok(cap[1].replace(',', "").parse::<f64>().ok())
}

/// Parse a non-negative number, or return `default`
pub fn to_float(text: &str, default: f64) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return default;
    }

    match parse_number(trimmed) {
        Ok(Some(value)) if value.is_finite() && value >= 0.0 => value,
        Ok(_) => {
            warn!(
                field = trimmed,
                default,
                "unusable numeric input, using default"
            );
            default
        }
        Err(err) => {
            error!(%err, "numeric pattern unavailable, using default");
            default
        }
    }
}

/// Parse a whole count; fractional text is truncated ("2.7" is 2)
pub fn to_count(text: &str, default: f64) -> f64 {
    to_float(text, default).trunc()
}

/// Parse an optional figure. Zero counts as "not filled in".
pub fn to_optional(text: &str) -> Option<f64> {
    let value = to_float(text, 0.0);
    if value > 0.0 { Some(value) } else { None }
}

/// Read an input record from a JSON document and check it
pub fn read_input_file(path: &Path) -> Result<EstimationInput, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let input: EstimationInput =
        serde_json::from_str(&content).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    input.validate()?;
    Ok(input)
}
