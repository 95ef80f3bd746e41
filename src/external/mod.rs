//! HTTP clients for external collaborators.
//!
//! The relay consumes two collaborators over HTTP: the datastore that holds
//! presence/unread state, and the push provider that performs the actual
//! device delivery. Both share one pooled reqwest client.

pub mod client;
pub mod datastore;
pub mod provider;

pub use datastore::DatastoreClient;
pub use provider::{ProviderClient, ProviderResponse};
