//! Typed client for the Torn API v2.
//!
//! [`TornClient::fetch`] sends one authenticated GET to a known
//! [`Endpoint`] and returns the JSON payload, turning Torn's in-body error
//! envelope into a [`TornApiError`].

pub mod client;
pub mod commands;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod schema;
pub mod transport;

pub use client::TornClient;
pub use endpoint::Endpoint;
pub use error::TornApiError;
pub use params::Params;
pub use transport::{HttpStatusError, HttpTransport, RequestOptions, Transport};
