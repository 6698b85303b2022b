//! Async client for the Confluence Server/Data Center REST API.
//!
//! [`Confluence`] turns typed parameter structs into requests, sends them
//! with the configured credential, maps documented status codes to
//! [`ApiError`]s and decodes JSON answers into the [`model`] types.
//!
//! # Example
//!
//! ```ignore
//! use confluence_api::prelude::*;
//!
//! let confluence = Confluence::builder()
//!     .base_url("https://wiki.example.com")
//!     .basic_auth("john", "secret")
//!     .app("wiki-report", "1.2.0")
//!     .build()?;
//!
//! let pages = confluence
//!     .content(&ContentParameters {
//!         space_key: "TS".to_string(),
//!         content_type: Content::TYPE_PAGE.to_string(),
//!         limit: 50,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for page in &pages.results {
//!     println!("{} {:?}", page.title, confluence.tiny_link(&page.id));
//! }
//! ```
//!
//! Parameter structs for custom endpoints derive [`Query`]:
//!
//! ```ignore
//! use confluence_api::{Query, Validate};
//!
//! #[derive(Debug, Default, Query)]
//! #[query(rename_all = "camelCase")]
//! struct BlueprintParameters {
//!     space_key: String,
//!     #[query(unwrap)]
//!     expand: Vec<String>,
//! }
//!
//! impl Validate for BlueprintParameters {}
//! ```

extern crate self as confluence_api;

mod api;
mod client;
mod config;
mod connector;
mod endpoints;
pub mod middleware;
pub mod model;
pub mod params;
pub mod prelude;

pub use api::{Confluence, ConfluenceBuilder, NO_BODY, user_agent};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use params::is_valid_calendar_id;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use confluence_api_core::{
    APPLICATION_JSON, ApiError, BoolFormat, ConfigError, Credential, DateFormat, EmptyParameters,
    Error, HttpClient, ListFormat, Method, Parameters, QueryNumber, QueryPairs, Request,
    RequestBuilder, Response, Result, StatusTable, TOKEN_LENGTH, ToQueryPairs, Validate,
    ValidationError, encode, from_json, require, to_json,
};

// Re-export crates used by public signatures
pub use chrono;
pub use url;

// Re-export macros
pub use confluence_api_macro::Query;
