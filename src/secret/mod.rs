//! Secret module — typed secret content and its presentation.
//!
//! This module provides:
//! - `SecretKind` and `SecretContent` types (`content`)
//! - the wire codec between typed content and the opaque payload
//!   string the storage service transports (`codec`)
//! - grouping and redaction of stored secrets for display (`display`)

pub mod codec;
pub mod content;
pub mod display;

// Re-export the most commonly used items.
pub use codec::{decode, encode};
pub use content::{SecretContent, SecretKind};
pub use display::{fields_for_display, group_by_kind, DecodedSecret, SecretGroup, MASK};
