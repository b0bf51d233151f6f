//! Strict `YYYY-MM-DD` date parsing for request payloads.
//!
//! The serde helper modules here are meant for `#[serde(deserialize_with)]`
//! on DTO fields. Serialization needs no helper: `NaiveDate` already renders
//! as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// The only accepted wire format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date string that is not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, thiserror::Error)]
#[error("invalid date '{0}': expected YYYY-MM-DD")]
pub struct InvalidDate(pub String);

/// Parse a date, rejecting anything that is not exactly `YYYY-MM-DD`.
///
/// chrono alone accepts unpadded fields such as `2020-1-5`, so the shape is
/// checked before handing off to the calendar parser.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| InvalidDate(raw.to_string()))
}

fn parse_optional(raw: Option<String>) -> Result<Option<NaiveDate>, InvalidDate> {
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

/// Required date field.
pub mod required {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Optional date field on a create payload. `null` and `""` both mean "no date".
pub mod optional {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        parse_optional(raw).map_err(serde::de::Error::custom)
    }
}

/// Required date on a partial update. Use with `#[serde(default)]`:
/// absent stays `None`, a present value must be a valid date (never `null`).
pub mod patch_required {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        super::required::deserialize(deserializer).map(Some)
    }
}

/// Nullable date on a partial update. Use with `#[serde(default)]`:
/// absent is `None`, `null`/`""` is `Some(None)`, a date is `Some(Some(date))`.
pub mod patch_nullable {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<NaiveDate>>, D::Error> {
        super::optional::deserialize(deserializer).map(Some)
    }
}
