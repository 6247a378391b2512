//! API module — transport client and wire types for the storage service.

pub mod client;
pub mod types;

// Re-export the most commonly used items.
pub use client::ApiClient;
pub use types::{NewSecretRequest, NewUserRequest, StoredSecret};
