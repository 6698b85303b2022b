//! Parameter validation.
//!
//! Every call checks its parameters before any network I/O. A failed check
//! surfaces as [`crate::Error::Validation`].

use crate::{QueryPairs, ToQueryPairs, ValidationError};

/// Pre-flight check for request parameters.
///
/// The default accepts everything; parameter structs with mandatory fields
/// override it.
pub trait Validate {
    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

/// Everything a request needs from its parameters: an encoder and a check.
pub trait Parameters: ToQueryPairs + Validate {}

impl<T: ToQueryPairs + Validate + ?Sized> Parameters for T {}

/// Parameters of an endpoint that takes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyParameters;

impl ToQueryPairs for EmptyParameters {
    fn to_query_pairs(&self) -> QueryPairs {
        QueryPairs::new()
    }
}

impl Validate for EmptyParameters {}

/// Fail with [`ValidationError::Missing`] when `value` is empty.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] naming `field`.
pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}
