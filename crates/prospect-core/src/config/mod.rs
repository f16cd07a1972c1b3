//! Startup configuration: provider credentials and endpoint locations.
//!
//! Both are read once when the process starts and then shared read-only
//! between all tool invocations.

mod credentials;
mod endpoints;

pub use credentials::{Credentials, Secret};
pub use endpoints::ProviderEndpoints;
