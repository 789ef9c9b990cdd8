//! Calendar month value type.
//!
//! [`YearMonth`] is a date pinned to the first day of its month. Construction
//! always takes the year first (`YearMonth::new(2024, 3)`), and the textual
//! form read by [`FromStr`] is `YYYY-MM`.

use crate::domain::conversion::{ConversionKind, Converted};
use crate::utils::error::{Result, SmartecError};
use chrono::{Datelike, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // always day 1
    date: NaiveDate,
}

impl YearMonth {
    pub const DAY: u32 = 1;

    /// Builds a month from a year and a month number (1-12).
    ///
    /// Fails with [`SmartecError::OutOfRange`] when the pair is not a valid
    /// date at day 1, e.g. month 13 or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        match NaiveDate::from_ymd_opt(year, month, Self::DAY) {
            Some(date) => Ok(Self { date }),
            None => {
                tracing::debug!(year, month, "Rejected out-of-range year-month");
                Err(SmartecError::OutOfRange { year, month })
            }
        }
    }

    /// Earliest representable month.
    pub fn min_value() -> Self {
        Self::from(NaiveDate::MIN)
    }

    /// Latest representable month.
    pub fn max_value() -> Self {
        Self::from(NaiveDate::MAX)
    }

    /// Current month from the local system clock.
    pub fn now() -> Self {
        Self::from(Local::now().naive_local())
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        Self::DAY
    }

    pub fn first_day(&self) -> NaiveDate {
        self.date
    }

    /// Midnight of the first day of the month.
    pub fn to_date_time(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    /// Microseconds since the Unix epoch of [`Self::to_date_time`].
    ///
    /// Increases with chronological order and fits in an `i64` over chrono's
    /// whole date range. Meant for numeric export only; equality and ordering
    /// never go through ticks.
    pub fn to_ticks(&self) -> i64 {
        self.to_date_time().and_utc().timestamp_micros()
    }

    pub fn convert(&self, kind: ConversionKind) -> Result<Converted> {
        match kind {
            ConversionKind::YearMonth => Ok(Converted::YearMonth(*self)),
            ConversionKind::DateTime => Ok(Converted::DateTime(self.to_date_time())),
            ConversionKind::Ticks => Ok(Converted::Ticks(self.to_ticks())),
            target => {
                tracing::debug!(kind = %target, "Refused year-month conversion");
                Err(SmartecError::InvalidConversion { target })
            }
        }
    }

    /// Renders the month with a strftime pattern.
    ///
    /// Unlike `NaiveDateTime::format(..).to_string()`, an invalid pattern is
    /// reported as [`SmartecError::InvalidFormat`] instead of panicking.
    pub fn format(&self, pattern: &str) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self.to_date_time().format(pattern)).map_err(|_| {
            SmartecError::InvalidFormat {
                format: pattern.to_string(),
            }
        })?;
        Ok(out)
    }

    /// Locale-aware variant of [`Self::format`], e.g. `Locale::pt_BR`.
    pub fn format_localized(&self, pattern: &str, locale: Locale) -> Result<String> {
        let mut out = String::new();
        write!(
            out,
            "{}",
            self.to_date_time()
                .and_utc()
                .format_localized(pattern, locale)
        )
        .map_err(|_| SmartecError::InvalidFormat {
            format: pattern.to_string(),
        })?;
        Ok(out)
    }

    /// Writes the formatted month into `dest` as UTF-8.
    ///
    /// Uses the `Display` rendering when `pattern` is `None`. Returns the
    /// number of bytes written, or `None` when `dest` is too small or the
    /// pattern is invalid. On `None` the contents of `dest` are unspecified.
    pub fn write_to(&self, dest: &mut [u8], pattern: Option<&str>) -> Option<usize> {
        let mut writer = SliceWriter { buf: dest, pos: 0 };
        let written = match pattern {
            Some(pattern) => write!(writer, "{}", self.to_date_time().format(pattern)),
            None => write!(writer, "{}", self),
        };
        written.ok().map(|_| writer.pos)
    }

    fn parse_year_month(value: &str) -> Result<Self> {
        let parse_error = || SmartecError::Parse {
            value: value.to_string(),
        };

        let (year, month) = value.rsplit_once('-').ok_or_else(parse_error)?;
        if month.is_empty() || month.len() > 2 {
            return Err(parse_error());
        }
        let year: i32 = year.parse().map_err(|_| parse_error())?;
        let month: u32 = month.parse().map_err(|_| parse_error())?;

        Self::new(year, month)
    }
}

impl Default for YearMonth {
    fn default() -> Self {
        Self::min_value()
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        // day 1 exists in every month
        Self {
            date: date.with_day(Self::DAY).unwrap_or(date),
        }
    }
}

impl From<NaiveDateTime> for YearMonth {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::from(date_time.date())
    }
}

impl From<YearMonth> for NaiveDate {
    fn from(value: YearMonth) -> Self {
        value.first_day()
    }
}

impl From<YearMonth> for NaiveDateTime {
    fn from(value: YearMonth) -> Self {
        value.to_date_time()
    }
}

// Comparisons against a raw date-time truncate it to its month first.
impl PartialEq<NaiveDateTime> for YearMonth {
    fn eq(&self, other: &NaiveDateTime) -> bool {
        *self == YearMonth::from(*other)
    }
}

impl PartialOrd<NaiveDateTime> for YearMonth {
    fn partial_cmp(&self, other: &NaiveDateTime) -> Option<Ordering> {
        Some(self.cmp(&YearMonth::from(*other)))
    }
}

impl PartialEq<YearMonth> for NaiveDateTime {
    fn eq(&self, other: &YearMonth) -> bool {
        YearMonth::from(*self) == *other
    }
}

impl PartialOrd<YearMonth> for NaiveDateTime {
    fn partial_cmp(&self, other: &YearMonth) -> Option<Ordering> {
        Some(YearMonth::from(*self).cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_date_time(), f)
    }
}

impl FromStr for YearMonth {
    type Err = SmartecError;

    /// Accepts `YYYY-MM`, `YYYY-MM-DD` and the `Display` form
    /// `YYYY-MM-DD HH:MM:SS`; the day and time are dropped.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();

        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
            return Ok(Self::from(date_time));
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(Self::from(date));
        }

        Self::parse_year_month(value)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:04}-{:02}", self.year(), self.month()))
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos.checked_add(s.len()).ok_or(fmt::Error)?;
        let target = self.buf.get_mut(self.pos..end).ok_or(fmt::Error)?;
        target.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_time(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_keeps_year_and_month() {
        let ym = YearMonth::new(1900, 1).unwrap();
        assert_eq!(ym.year(), 1900);
        assert_eq!(ym.month(), 1);
        assert_eq!(ym.day(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(SmartecError::OutOfRange { year: 2024, month: 13 })
        ));
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(i32::MAX, 1).is_err());
    }

    #[test]
    fn test_from_date_time_truncates() {
        let ym = YearMonth::from(date_time(2024, 3, 17, 15));
        assert_eq!(ym, YearMonth::new(2024, 3).unwrap());
        assert_eq!(ym.to_date_time(), date_time(2024, 3, 1, 0));
    }

    #[test]
    fn test_default_is_min() {
        assert_eq!(YearMonth::default(), YearMonth::min_value());
        assert_eq!(YearMonth::min_value().year(), NaiveDate::MIN.year());
        assert_eq!(YearMonth::max_value().month(), NaiveDate::MAX.month());
    }

    #[test]
    fn test_ticks_follow_order() {
        let a = YearMonth::new(1969, 12).unwrap();
        let b = YearMonth::new(1970, 1).unwrap();
        assert!(a.to_ticks() < b.to_ticks());
        assert_eq!(b.to_ticks(), 0);
        assert!(YearMonth::min_value().to_ticks() < YearMonth::max_value().to_ticks());
    }

    #[test]
    fn test_convert_dispatch() {
        let ym = YearMonth::new(2000, 6).unwrap();
        assert_eq!(
            ym.convert(ConversionKind::DateTime).unwrap(),
            Converted::DateTime(ym.to_date_time())
        );
        assert_eq!(
            ym.convert(ConversionKind::Ticks).unwrap(),
            Converted::Ticks(ym.to_ticks())
        );
        assert!(matches!(
            ym.convert(ConversionKind::Char),
            Err(SmartecError::InvalidConversion {
                target: ConversionKind::Char
            })
        ));
    }

    #[test]
    fn test_compare_with_date_time_truncates() {
        let ym = YearMonth::new(2000, 1).unwrap();
        assert!(ym == date_time(2000, 1, 20, 12));
        assert!(ym <= date_time(2000, 1, 1, 0));
        assert!(ym < date_time(2000, 2, 1, 0));
        assert!(date_time(1999, 12, 31, 23) < ym);
    }

    #[test]
    fn test_display_matches_date_time() {
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(ym.to_string(), "2024-03-01 00:00:00");
        assert_eq!(ym.to_string(), ym.to_date_time().to_string());
    }

    #[test]
    fn test_format_patterns() {
        let ym = YearMonth::new(2024, 3).unwrap();
        assert_eq!(ym.format("%m/%Y").unwrap(), "03/2024");
        assert!(ym.format("%Q").is_err());
        assert_eq!(
            ym.format_localized("%B %Y", Locale::pt_BR).unwrap(),
            "março 2024"
        );
    }

    #[test]
    fn test_write_to_bounded_buffer() {
        let ym = YearMonth::new(2024, 3).unwrap();

        let mut buf = [0u8; 32];
        let n = ym.write_to(&mut buf, Some("%Y-%m")).unwrap();
        assert_eq!(&buf[..n], b"2024-03");

        let n = ym.write_to(&mut buf, None).unwrap();
        assert_eq!(&buf[..n], b"2024-03-01 00:00:00");

        let mut small = [0u8; 4];
        assert_eq!(ym.write_to(&mut small, Some("%Y-%m")), None);
    }

    #[test]
    fn test_parse_forms() {
        let expected = YearMonth::new(2024, 3).unwrap();
        assert_eq!("2024-03".parse::<YearMonth>().unwrap(), expected);
        assert_eq!("2024-3".parse::<YearMonth>().unwrap(), expected);
        assert_eq!("2024-03-17".parse::<YearMonth>().unwrap(), expected);
        assert_eq!(
            "2024-03-01 00:00:00".parse::<YearMonth>().unwrap(),
            expected
        );
        assert!(matches!(
            "2024-13".parse::<YearMonth>(),
            Err(SmartecError::OutOfRange { .. })
        ));
        assert!(matches!(
            "03/2024".parse::<YearMonth>(),
            Err(SmartecError::Parse { .. })
        ));
        assert!("2024-003".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_serde_as_year_month_string() {
        let ym = YearMonth::new(987, 11).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"0987-11\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }
}
