use super::rejected;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const PLATE_LEN: usize = 7;

// 3 letters, 1 digit, transitional slot (digit or A-J), 2 digits
static PLATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-J0-9][0-9]{2}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFormat {
    /// `ABC1234`
    Legacy,
    /// `ABC1D23`, the unified Mercosul layout
    Mercosul,
}

/// Strips spaces and hyphens, uppercases and checks the plate layout.
pub fn validate_plate(plate: &str) -> Option<String> {
    if plate.is_empty() {
        return rejected("plate", plate, "empty input");
    }

    let normalized = plate.replace([' ', '-'], "").to_uppercase();

    if normalized.chars().count() != PLATE_LEN {
        return rejected("plate", plate, "wrong length");
    }
    if !PLATE_REGEX.is_match(&normalized) {
        return rejected("plate", plate, "layout mismatch");
    }

    Some(normalized)
}

pub fn is_valid_plate(plate: &str) -> bool {
    validate_plate(plate).is_some()
}

/// Tells which layout a valid plate uses, by its transitional slot.
pub fn plate_format(plate: &str) -> Option<PlateFormat> {
    let normalized = validate_plate(plate)?;
    let slot = normalized.as_bytes()[4];

    if slot.is_ascii_digit() {
        Some(PlateFormat::Legacy)
    } else {
        Some(PlateFormat::Mercosul)
    }
}

/// Converts a valid plate to the Mercosul layout.
///
/// The transitional digit maps to a letter (0 -> A ... 9 -> J). Plates
/// already in the Mercosul layout come back normalized.
pub fn to_mercosul(plate: &str) -> Option<String> {
    let normalized = validate_plate(plate)?;
    let mut bytes = normalized.into_bytes();

    if bytes[4].is_ascii_digit() {
        bytes[4] = b'A' + (bytes[4] - b'0');
    }

    String::from_utf8(bytes).ok()
}
