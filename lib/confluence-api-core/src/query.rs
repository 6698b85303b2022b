//! Query string encoding.
//!
//! Parameter structs implement [`ToQueryPairs`], normally through
//! `#[derive(Query)]`. The derive calls the typed `push_*` methods of
//! [`QueryPairs`], which apply the omission rules shared by every Confluence
//! endpoint: empty strings, zero numbers, `false`, empty lists and absent
//! dates are left out unless the field asks otherwise.
//!
//! Values are percent-encoded when they are pushed. A joined list encodes
//! each value on its own and keeps its `,` separators literal, so a comma
//! inside a value is sent as `%2C`.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, Utc};
use url::form_urlencoded::byte_serialize;

/// Trait for types that can be converted to query parameter pairs.
///
/// This is automatically implemented by the `#[derive(Query)]` macro.
///
/// # Example
///
/// ```ignore
/// use confluence_api::Query;
///
/// #[derive(Query)]
/// #[query(rename_all = "camelCase")]
/// struct SpaceParameters {
///     #[query(unwrap)]
///     space_key: Vec<String>,
///     expand: Vec<String>,
///     favourite: bool,
///     start: u32,
///     limit: u32,
/// }
/// ```
pub trait ToQueryPairs {
    /// Convert this value to encoded query pairs, in field order.
    fn to_query_pairs(&self) -> QueryPairs;

    /// Render the query string, without the leading `?`.
    fn to_query_string(&self) -> String {
        self.to_query_pairs().to_query_string()
    }
}

impl<T: ToQueryPairs + ?Sized> ToQueryPairs for &T {
    fn to_query_pairs(&self) -> QueryPairs {
        (**self).to_query_pairs()
    }
}

/// How a `bool` field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoolFormat {
    /// `true` is written as `key=true`, `false` is omitted.
    #[default]
    Plain,
    /// Always written, `false` included.
    Respect,
    /// Inverted flag: `true` is written as `key=false`, `false` is omitted.
    Reverse,
}

/// How a date or date-time field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// Calendar date, `YYYY-MM-DD`.
    #[default]
    Date,
    /// Date and time in UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    DateTime,
}

impl DateFormat {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%Y-%m-%d",
            Self::DateTime => "%Y-%m-%dT%H:%M:%SZ",
        }
    }
}

/// How a list field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListFormat {
    /// One pair, values joined with `,`.
    #[default]
    Joined,
    /// One pair per value.
    Unwrapped,
}

/// Integer types accepted by [`QueryPairs::push_number`].
pub trait QueryNumber: Copy + Display {
    /// Returns `true` for the zero value, which is omitted by default.
    fn is_zero(self) -> bool;
}

macro_rules! impl_query_number {
    ($($ty:ty),*) => {
        $(
            impl QueryNumber for $ty {
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_query_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Ordered list of percent-encoded `(key, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the encoded pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First encoded value for an unencoded key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = encode(key);
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Consume into the encoded pairs.
    #[must_use]
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Render as `k1=v1&k2=v2`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// Append a pair, encoding both sides.
    pub fn push(&mut self, key: &str, value: &str) {
        self.pairs.push((encode(key), encode(value)));
    }

    fn push_encoded(&mut self, key: &str, encoded: String) {
        self.pairs.push((encode(key), encoded));
    }

    /// Append a string; empty is omitted unless `respect` is set.
    pub fn push_str(&mut self, key: &str, value: &str, respect: bool) {
        if respect || !value.is_empty() {
            self.push(key, value);
        }
    }

    /// Append an integer; zero is omitted unless `respect` is set.
    pub fn push_number<N: QueryNumber>(&mut self, key: &str, value: N, respect: bool) {
        if respect || !value.is_zero() {
            self.push_encoded(key, value.to_string());
        }
    }

    /// Append a boolean according to `format`.
    pub fn push_bool(&mut self, key: &str, value: bool, format: BoolFormat) {
        let written = match (format, value) {
            (BoolFormat::Plain, true) | (BoolFormat::Respect, true) => Some("true"),
            (BoolFormat::Respect, false) | (BoolFormat::Reverse, true) => Some("false"),
            (BoolFormat::Plain | BoolFormat::Reverse, false) => None,
        };
        if let Some(written) = written {
            self.push_encoded(key, written.to_owned());
        }
    }

    /// Append an instant, converted to UTC; `None` is omitted.
    pub fn push_datetime(&mut self, key: &str, value: Option<&DateTime<Utc>>, format: DateFormat) {
        if let Some(value) = value {
            self.push_encoded(key, value.format(format.pattern()).to_string());
        }
    }

    /// Append a calendar date; `None` is omitted.
    pub fn push_date(&mut self, key: &str, value: Option<&NaiveDate>) {
        if let Some(value) = value {
            self.push_encoded(key, value.format(DateFormat::Date.pattern()).to_string());
        }
    }

    /// Append a list of strings according to `format`; an empty list is omitted.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &str, values: &[S], format: ListFormat) {
        if values.is_empty() {
            return;
        }
        match format {
            ListFormat::Joined => {
                let joined = values
                    .iter()
                    .map(|value| encode(value.as_ref()))
                    .collect::<Vec<_>>()
                    .join(",");
                self.push_encoded(key, joined);
            }
            ListFormat::Unwrapped => {
                for value in values {
                    self.push(key, value.as_ref());
                }
            }
        }
    }

    /// Append any displayable value; `None` is omitted.
    pub fn push_display<T: Display>(&mut self, key: &str, value: Option<&T>) {
        if let Some(value) = value {
            self.push(key, &value.to_string());
        }
    }
}

impl IntoIterator for QueryPairs {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Percent-encode a query component the way HTML forms do
/// (space becomes `+`, reserved characters become `%XX`).
#[must_use]
pub fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn strings() {
        let mut pairs = QueryPairs::new();
        pairs.push_str("title", "", false);
        pairs.push_str("status", "", true);
        pairs.push_str("cql", "type=page and space=TS", false);

        assert_eq!(
            pairs.to_query_string(),
            "status=&cql=type%3Dpage+and+space%3DTS"
        );
    }

    #[test]
    fn numbers() {
        let mut pairs = QueryPairs::new();
        pairs.push_number("start", 0_u32, false);
        pairs.push_number("limit", 25_u32, false);
        pairs.push_number("depth", 0_i64, true);
        pairs.push_number("offset", -3_isize, false);

        assert_eq!(pairs.to_query_string(), "limit=25&depth=0&offset=-3");
    }

    #[test]
    fn booleans() {
        let cases = [
            (true, BoolFormat::Plain, Some("true")),
            (false, BoolFormat::Plain, None),
            (true, BoolFormat::Respect, Some("true")),
            (false, BoolFormat::Respect, Some("false")),
            (true, BoolFormat::Reverse, Some("false")),
            (false, BoolFormat::Reverse, None),
        ];

        for (value, format, expected) in cases {
            let mut pairs = QueryPairs::new();
            pairs.push_bool("flag", value, format);
            assert_eq!(pairs.get("flag"), expected, "{value} with {format:?}");
        }
    }

    #[test]
    fn dates() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 2, 12, 30, 45).single();
        let day = NaiveDate::from_ymd_opt(2018, 2, 15);

        let mut pairs = QueryPairs::new();
        pairs.push_datetime("a", instant.as_ref(), DateFormat::Date);
        pairs.push_datetime("b", instant.as_ref(), DateFormat::DateTime);
        pairs.push_datetime("c", None, DateFormat::DateTime);
        pairs.push_date("d", day.as_ref());
        pairs.push_date("e", None);

        assert_eq!(
            pairs.to_query_string(),
            "a=2020-01-02&b=2020-01-02T12:30:45Z&d=2018-02-15"
        );
    }

    #[test]
    fn lists() {
        let values = vec!["space".to_string(), "version".to_string()];

        let mut pairs = QueryPairs::new();
        pairs.push_list("expand", &values, ListFormat::Joined);
        pairs.push_list("spaceKey", &["TS", "DOC"], ListFormat::Unwrapped);
        pairs.push_list::<String>("label", &[], ListFormat::Joined);
        pairs.push_list::<String>("include", &[], ListFormat::Unwrapped);

        assert_eq!(
            pairs.to_query_string(),
            "expand=space,version&spaceKey=TS&spaceKey=DOC"
        );
    }

    #[test]
    fn joined_list_keeps_commas_inside_values() {
        let mut split = QueryPairs::new();
        split.push_list("expand", &["a", "b"], ListFormat::Joined);

        let mut single = QueryPairs::new();
        single.push_list("expand", &["a,b"], ListFormat::Joined);

        let mut spaced = QueryPairs::new();
        spaced.push_list("label", &["two words", "x&y"], ListFormat::Joined);

        assert_eq!(split.to_query_string(), "expand=a,b");
        assert_eq!(single.to_query_string(), "expand=a%2Cb");
        assert_ne!(split, single);
        assert_eq!(spaced.to_query_string(), "label=two+words,x%26y");
    }

    #[test]
    fn display_values() {
        let mut pairs = QueryPairs::new();
        pairs.push_display("version", Some(&3_u32));
        pairs.push_display::<String>("status", None);
        pairs.push_display("userTimeZoneId", Some(&"Etc/UTC"));

        assert_eq!(pairs.to_query_string(), "version=3&userTimeZoneId=Etc%2FUTC");
    }

    #[test]
    fn encode_matches_form_encoding() {
        assert_eq!(encode("test1,test2"), "test1%2Ctest2");
        assert_eq!(encode("a b/c"), "a+b%2Fc");
        assert_eq!(encode("plain-text_1.0"), "plain-text_1.0");
    }

    #[test]
    fn empty_pairs_render_empty_string() {
        assert_eq!(QueryPairs::new().to_query_string(), "");
        assert!(QueryPairs::new().is_empty());
    }
}
