use crate::domain::year_month::YearMonth;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target kinds a [`YearMonth`] can be asked to convert into.
///
/// Only `YearMonth`, `DateTime` and `Ticks` succeed. A calendar month is not
/// a number, a flag or a character, so the remaining kinds always fail with
/// `SmartecError::InvalidConversion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    YearMonth,
    DateTime,
    Ticks,
    Boolean,
    Char,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 15] = [
        ConversionKind::YearMonth,
        ConversionKind::DateTime,
        ConversionKind::Ticks,
        ConversionKind::Boolean,
        ConversionKind::Char,
        ConversionKind::Int8,
        ConversionKind::UInt8,
        ConversionKind::Int16,
        ConversionKind::UInt16,
        ConversionKind::Int32,
        ConversionKind::UInt32,
        ConversionKind::UInt64,
        ConversionKind::Float32,
        ConversionKind::Float64,
        ConversionKind::Decimal,
    ];

    pub fn is_supported(self) -> bool {
        matches!(
            self,
            ConversionKind::YearMonth | ConversionKind::DateTime | ConversionKind::Ticks
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConversionKind::YearMonth => "YearMonth",
            ConversionKind::DateTime => "NaiveDateTime",
            ConversionKind::Ticks => "ticks",
            ConversionKind::Boolean => "bool",
            ConversionKind::Char => "char",
            ConversionKind::Int8 => "i8",
            ConversionKind::UInt8 => "u8",
            ConversionKind::Int16 => "i16",
            ConversionKind::UInt16 => "u16",
            ConversionKind::Int32 => "i32",
            ConversionKind::UInt32 => "u32",
            ConversionKind::UInt64 => "u64",
            ConversionKind::Float32 => "f32",
            ConversionKind::Float64 => "f64",
            ConversionKind::Decimal => "decimal",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful [`YearMonth::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converted {
    YearMonth(YearMonth),
    DateTime(NaiveDateTime),
    Ticks(i64),
}

impl Converted {
    pub fn kind(&self) -> ConversionKind {
        match self {
            Converted::YearMonth(_) => ConversionKind::YearMonth,
            Converted::DateTime(_) => ConversionKind::DateTime,
            Converted::Ticks(_) => ConversionKind::Ticks,
        }
    }
}
