//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// MIME type of every body Confluence accepts and returns.
pub const APPLICATION_JSON: &str = "application/json";

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use confluence_api_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Label { prefix: String, name: String }
///
/// let label = Label { prefix: "global".to_string(), name: "howto".to_string() };
/// let bytes = to_json(&label).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"prefix":"global","name":"howto"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that a failure deep inside a Confluence
/// document reports where it happened (e.g. `results[3].space.key`).
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use confluence_api_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Space { key: String }
///
/// let space: Space = from_json(br#"{"key":"TS"}"#).expect("deserialize");
/// assert_eq!(space, Space { key: "TS".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Version {
            number: u32,
            message: String,
        }

        let version = Version {
            number: 3,
            message: "typo".to_string(),
        };

        let bytes = to_json(&version).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"number":3,"message":"typo"}"#);
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Group {
            #[serde(rename = "type")]
            kind: String,
            name: String,
        }

        let group: Group =
            from_json(br#"{"type":"group","name":"confluence-users"}"#).expect("deserialize");
        assert_eq!(
            group,
            Group {
                kind: "group".to_string(),
                name: "confluence-users".to_string(),
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Group {
            #[allow(dead_code)]
            name: String,
        }

        let result: Result<Group> = from_json(b"<html>Bad Gateway</html>");
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_error_has_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Space {
            #[allow(dead_code)]
            key: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Content {
            #[allow(dead_code)]
            space: Space,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Collection {
            #[allow(dead_code)]
            results: Vec<Content>,
        }

        let bytes = br#"{"results":[{"space":{"key":"TS"}},{"space":{"key":42}}]}"#;
        let err = from_json::<Collection>(bytes).expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("results[1].space.key"),
            "Expected path in error: {msg}"
        );
    }
}
