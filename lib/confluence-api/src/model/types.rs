//! Scalar types with Confluence-specific JSON encodings.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// RFC 3339 date-time, keeping the server's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub DateTime<FixedOffset>);

impl Deref for Date {
    type Target = DateTime<FixedOffset>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(Self)
            .map_err(|err| de::Error::custom(format_args!("cannot decode date {raw:?}: {err}")))
    }
}

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| de::Error::custom(format_args!("timestamp {millis} out of range")))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(i64),
}

/// Container identifier. Spaces send a number, pages a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContainerId(pub String);

impl ContainerId {
    /// The id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContainerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Text(text) => Self(text),
            StringOrNumber::Number(number) => Self(number.to_string()),
        })
    }
}

/// Position of a page among its siblings; `-1` when unordered (`"none"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtensionPosition(pub i64);

impl ExtensionPosition {
    /// Unordered page.
    pub const NONE: Self = Self(-1);
}

impl<'de> Deserialize<'de> for ExtensionPosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Number(position) => Ok(Self(position)),
            StringOrNumber::Text(text) if text == "none" => Ok(Self::NONE),
            StringOrNumber::Text(text) => text.parse().map(Self).map_err(|_| {
                de::Error::custom(format_args!("cannot decode extension position {text:?}"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn date() {
        let date: Date = serde_json::from_str(r#""2013-03-12T10:36:12.602+04:00""#).expect("date");

        check!(date.year() == 2013);
        check!(date.month() == 3);
        check!(date.day() == 12);
        check!(date.hour() == 10);
        check!(date.offset().local_minus_utc() == 4 * 3600);

        let_assert!(Err(err) = serde_json::from_str::<Date>(r#""2013-03-12""#));
        check!(err.to_string().contains("cannot decode date"));
    }

    #[test]
    fn timestamp() {
        let ts: Timestamp = serde_json::from_str("1523059214803").expect("timestamp");

        check!(ts.year() == 2018);
        check!(ts.month() == 4);
        check!(ts.day() == 7);
        check!(ts.timestamp_subsec_millis() == 803);
    }

    #[test]
    fn container_id() {
        let id: ContainerId = serde_json::from_str("98306").expect("number");
        check!(id.as_str() == "98306");

        let id: ContainerId = serde_json::from_str(r#""1179655""#).expect("string");
        check!(id.to_string() == "1179655");
    }

    #[test]
    fn extension_position() {
        let none: ExtensionPosition = serde_json::from_str(r#""none""#).expect("none");
        check!(none == ExtensionPosition(-1));

        let position: ExtensionPosition = serde_json::from_str("3").expect("number");
        check!(position == ExtensionPosition(3));

        check!(serde_json::from_str::<ExtensionPosition>(r#""first""#).is_err());
    }
}
