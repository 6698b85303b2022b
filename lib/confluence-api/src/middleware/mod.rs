//! Tower middleware layers for [`crate::HyperClient`].
//!
//! Layers wrap the raw transport and see every [`crate::Request`] after the
//! Confluence client has fully assembled it, credentials included.
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! Any other `tower::Layer` over [`crate::BoxedService`] can be added with
//! `HyperClient::builder().layer(..)`.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::Layer;
