//! Renavam (national vehicle registration number) validation.
//!
//! A Renavam has 11 digits, the last one being a check digit computed from
//! the first ten with [`RENAVAM_WEIGHTS`] modulo [`RENAVAM_MODULUS`].

use super::rejected;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const RENAVAM_LEN: usize = 11;
pub const RENAVAM_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
pub const RENAVAM_MODULUS: u32 = 11;

static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Shape of the value returned by [`validate_renavam`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenavamFormat {
    /// Input trimmed, leading zeros removed.
    #[default]
    Trimmed,
    /// Trimmed form left-padded with zeros to 11 characters.
    ZeroPadded,
}

/// Check digit for an 11-digit Renavam; only the first 10 digits are read.
///
/// `digits` holds numeric values (0-9), most significant first.
pub fn renavam_check_digit(digits: &[u8; RENAVAM_LEN]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(RENAVAM_WEIGHTS.iter())
        .map(|(&digit, &weight)| u32::from(digit) * weight)
        .sum();

    match (sum * 10) % RENAVAM_MODULUS {
        10 => 0,
        check => check as u8,
    }
}

/// Validates a Renavam and returns it in the requested [`RenavamFormat`].
///
/// The raw input may not exceed 11 characters, punctuation included; the
/// length is checked before non-digits are stripped. Sequences made of a
/// single repeated digit are rejected even when the checksum matches.
pub fn validate_renavam(renavam: &str, format: RenavamFormat) -> Option<String> {
    if renavam.is_empty() {
        return rejected("renavam", renavam, "empty input");
    }
    if renavam.chars().count() > RENAVAM_LEN {
        return rejected("renavam", renavam, "too long");
    }

    let only_digits = NON_DIGIT_REGEX.replace_all(renavam, "");
    let Some(&first) = only_digits.as_bytes().first() else {
        return rejected("renavam", renavam, "no digits");
    };
    if only_digits.bytes().all(|b| b == first) {
        return rejected("renavam", renavam, "repeated digit sequence");
    }

    let padded = format!("{:0>width$}", only_digits, width = RENAVAM_LEN);
    let mut digits = [0u8; RENAVAM_LEN];
    for (slot, b) in digits.iter_mut().zip(padded.bytes()) {
        *slot = b - b'0';
    }

    if renavam_check_digit(&digits) != digits[RENAVAM_LEN - 1] {
        return rejected("renavam", renavam, "check digit mismatch");
    }

    let trimmed = renavam.trim().trim_start_matches('0');
    let output = match format {
        RenavamFormat::Trimmed => trimmed.to_string(),
        RenavamFormat::ZeroPadded => format!("{:0>width$}", trimmed, width = RENAVAM_LEN),
    };

    Some(output)
}

pub fn is_valid_renavam(renavam: &str) -> bool {
    validate_renavam(renavam, RenavamFormat::Trimmed).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(s: &str) -> [u8; RENAVAM_LEN] {
        let mut digits = [0u8; RENAVAM_LEN];
        for (slot, b) in digits.iter_mut().zip(s.bytes()) {
            *slot = b - b'0';
        }
        digits
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(renavam_check_digit(&digits_of("87654321014")), 4);
        assert_eq!(renavam_check_digit(&digits_of("00639884962")), 2);
        assert_eq!(renavam_check_digit(&digits_of("12345678900")), 0);
    }

    #[test]
    fn test_validate_renavam_trimmed() {
        assert_eq!(
            validate_renavam("00639884962", RenavamFormat::Trimmed),
            Some("639884962".to_string())
        );
        assert_eq!(
            validate_renavam("87654321014", RenavamFormat::Trimmed),
            Some("87654321014".to_string())
        );
        assert_eq!(
            validate_renavam("639884962", RenavamFormat::Trimmed),
            Some("639884962".to_string())
        );
    }

    #[test]
    fn test_validate_renavam_zero_padded() {
        assert_eq!(
            validate_renavam("639884962", RenavamFormat::ZeroPadded),
            Some("00639884962".to_string())
        );
    }

    #[test]
    fn test_validate_renavam_keeps_punctuation_in_output() {
        assert_eq!(
            validate_renavam("6398849-62", RenavamFormat::Trimmed),
            Some("6398849-62".to_string())
        );
    }

    #[test]
    fn test_validate_renavam_rejects() {
        assert_eq!(validate_renavam("", RenavamFormat::Trimmed), None);
        assert_eq!(validate_renavam("abc", RenavamFormat::Trimmed), None);
        // too long before stripping punctuation
        assert_eq!(validate_renavam("0063988496-2", RenavamFormat::Trimmed), None);
        assert_eq!(validate_renavam("87654321015", RenavamFormat::Trimmed), None);
        assert!(!is_valid_renavam("123456789012"));
    }

    #[test]
    fn test_validate_renavam_rejects_repeated_digits() {
        for d in 0..=9 {
            let repeated = d.to_string().repeat(RENAVAM_LEN);
            assert!(!is_valid_renavam(&repeated), "{} should be rejected", repeated);
        }
        assert!(!is_valid_renavam("0"));
    }
}
