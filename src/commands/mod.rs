//! CLI command implementations.
//!
//! Each command writes its output to a caller-supplied writer so the
//! binary can pass stdout and tests can pass a buffer.

mod endpoints;
mod get;
mod schema;

pub use endpoints::endpoints;
pub use get::get;
pub use schema::schema;
