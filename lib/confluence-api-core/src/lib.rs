//! Core types and traits for the confluence-api REST client.
//!
//! This crate provides the foundational types used by confluence-api:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Transport trait for HTTP execution
//! - [`Credential`] - Basic or token authentication
//! - [`ToQueryPairs`] and [`QueryPairs`] - Query string encoding
//! - [`Validate`] and [`Parameters`] - Pre-flight parameter checks
//! - [`StatusTable`] - Per-endpoint status code mapping

mod auth;
mod body;
mod client;
mod error;
mod method;
pub mod prelude;
mod query;
mod request;
mod response;
mod status;
mod validate;

pub use auth::{Credential, TOKEN_LENGTH};
pub use body::{APPLICATION_JSON, from_json, to_json};
pub use client::HttpClient;
pub use error::{ApiError, ConfigError, Error, Result, ValidationError};
pub use method::Method;
pub use query::{
    BoolFormat, DateFormat, ListFormat, QueryNumber, QueryPairs, ToQueryPairs, encode,
};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use status::StatusTable;
pub use validate::{EmptyParameters, Parameters, Validate, require};
