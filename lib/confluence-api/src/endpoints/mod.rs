//! Endpoint bindings.
//!
//! Every method is one call through [`Confluence::execute`](crate::Confluence::execute)
//! with the endpoint's path, parameters and [`StatusTable`](crate::StatusTable),
//! so all of them fail the same way: [`Error::Validation`](crate::Error::Validation)
//! before anything is sent, transport errors, [`Error::Api`](crate::Error::Api)
//! for non-200 answers and [`Error::JsonDeserialization`](crate::Error::JsonDeserialization)
//! for unexpected documents.
//!
//! Ids, keys and names given as arguments are percent-encoded as path
//! segments.

#![allow(clippy::missing_errors_doc)]

mod audit;
mod calendar;
mod content;
mod group;
mod search;
mod space;
mod user;

const API: &str = "/rest/api";
const CALENDAR: &str = "/rest/calendar-services/1.0/calendar";
