//! Helpers for partial-update payloads.
//!
//! Update DTOs model each column according to its nullability:
//!
//! - required column: `Option<T>` deserialized with [`required`], so an
//!   absent key leaves the column alone and `null` is rejected;
//! - nullable column: `Option<Option<T>>` (absent / `null` / value), split
//!   into bind parameters with [`split`].

use serde::{Deserialize, Deserializer};

/// Deserialize a present key as `Some(value)`, refusing `null`.
///
/// Pair with `#[serde(default)]` so a missing key yields `None`.
pub mod required {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }
}

/// Split a nullable patch field into `(provided, value)` for
/// `CASE WHEN $provided THEN $value ELSE column END`.
pub fn split<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    match field {
        Some(value) => (true, value.as_ref()),
        None => (false, None),
    }
}
