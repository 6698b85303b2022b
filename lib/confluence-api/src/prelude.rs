//! Prelude module for convenient imports.
//!
//! Re-exports the client, the error types and every parameter and model type
//! for glob importing:
//!
//! ```ignore
//! use confluence_api::prelude::*;
//! ```

pub use crate::model::*;
pub use crate::params::*;
pub use crate::{
    ApiError, Confluence, ConfluenceBuilder, Credential, Error, HttpClient, HyperClient, Query,
    Result, ToQueryPairs, Validate, ValidationError,
};
