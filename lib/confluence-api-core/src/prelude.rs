//! Prelude module for convenient imports.
//!
//! ```ignore
//! use confluence_api_core::prelude::*;
//! ```

pub use crate::{
    ApiError, Credential, EmptyParameters, Error, HttpClient, Method, Parameters, Request, Response,
    Result, StatusTable, ToQueryPairs, Validate, ValidationError,
};
