//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};

/// UTC timestamp used for `joined_date`, `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 timestamp, falling back to a naive ISO-8601 one read as UTC.
///
/// Collection files written by older deployments carry offset-less values
/// such as `2024-05-01T09:30:00.123456`.
#[must_use]
pub fn parse_lenient(value: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Render a timestamp the way record fields are serialized (RFC 3339, `Z` suffix).
#[must_use]
pub fn format(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde helpers for lenient timestamp fields.
pub mod lenient {
    use super::{Deserialize, Deserializer, Timestamp, parse_lenient};

    /// Deserialize a required timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the value is not a string in a supported format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_lenient(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
    }

    /// Deserialize a nullable timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the value is neither `null` nor a supported timestamp string.
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                parse_lenient(&raw)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
            })
            .transpose()
    }
}
