//! Status code tables.
//!
//! Each Confluence endpoint documents what its error statuses mean. A
//! [`StatusTable`] captures that mapping; the pipeline consults it for every
//! non-200 answer.

use bytes::Bytes;

use crate::{ApiError, Error, Response, Result};

/// Mapping from documented status codes to domain errors for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTable(&'static [(u16, ApiError)]);

impl StatusTable {
    /// Any authenticated call: 403 means no permission to use Confluence.
    pub const PERMISSION: Self = Self::new(&[(403, ApiError::PermissionDenied)]);

    /// Single piece of content addressed by id.
    pub const CONTENT: Self = Self::new(&[
        (403, ApiError::PermissionDenied),
        (404, ApiError::NoSuchContent),
    ]);

    /// Single space addressed by key.
    pub const SPACE: Self = Self::new(&[
        (403, ApiError::PermissionDenied),
        (404, ApiError::NoSuchSpace),
    ]);

    /// Content listed through a space.
    pub const SPACE_CONTENT: Self = Self::new(&[
        (403, ApiError::PermissionDenied),
        (404, ApiError::NoSuchContent),
    ]);

    /// CQL search.
    pub const SEARCH: Self = Self::new(&[
        (400, ApiError::MalformedQuery),
        (403, ApiError::PermissionDenied),
    ]);

    /// User lookups.
    pub const USER: Self = Self::new(&[
        (403, ApiError::UserPermissionDenied),
        (404, ApiError::NoSuchUser),
    ]);

    /// Create a table from `(status, error)` entries.
    #[must_use]
    pub const fn new(entries: &'static [(u16, ApiError)]) -> Self {
        Self(entries)
    }

    /// Error for a non-200 status; undocumented codes map to
    /// [`ApiError::UnexpectedStatus`].
    #[must_use]
    pub fn lookup(&self, status: u16) -> ApiError {
        self.0
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(ApiError::UnexpectedStatus(status), |(_, kind)| *kind)
    }

    /// Turn a non-200 response into an [`Error::Api`].
    fn reject(&self, response: Response<Bytes>) -> Error {
        let status = response.status();
        let body = response.into_body();
        let body = (!body.is_empty()).then_some(body);
        Error::api(status, self.lookup(status), body)
    }

    /// Decode a 200 response as JSON, or map its status to an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-200 statuses and
    /// [`Error::JsonDeserialization`] for undecodable bodies.
    pub fn decode<T: serde::de::DeserializeOwned>(&self, response: Response<Bytes>) -> Result<T> {
        if response.is_ok() {
            response.json()
        } else {
            Err(self.reject(response))
        }
    }

    /// Accept a 200 response and ignore its body, or map its status to an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for non-200 statuses.
    pub fn check(&self, response: Response<Bytes>) -> Result<()> {
        if response.is_ok() {
            Ok(())
        } else {
            Err(self.reject(response))
        }
    }
}
