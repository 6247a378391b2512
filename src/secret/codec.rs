//! Wire codec — typed secret content to and from the opaque payload.
//!
//! The storage service stores `content` as an uninterpreted string, so
//! the tagged-union discipline is enforced here at the edge: `encode`
//! before submission, `decode` after retrieval. Decoding is fallible
//! per item — callers iterating a listing skip failed entries rather
//! than aborting the whole batch.

use serde_json::Value;

use crate::errors::{Result, TresorError};
use crate::secret::content::SecretContent;

/// Serialize secret content into the payload string the storage service
/// expects. Deterministic: the discriminator comes first, attributes
/// follow in insertion order, so `decode(encode(c)) == c`.
pub fn encode(content: &SecretContent) -> String {
    // Serializing a serde_json::Value cannot fail.
    content.to_value().to_string()
}

/// Parse a stored payload back into typed content.
///
/// Fails with `ContentParse` when the payload is not valid JSON, is not
/// an object, lacks the `"kind"` discriminator, or names an unknown
/// kind. Never panics.
pub fn decode(payload: &str) -> Result<SecretContent> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| TresorError::ContentParse(e.to_string()))?;

    SecretContent::from_value(value).ok_or_else(|| {
        TresorError::ContentParse("payload has no recognized kind discriminator".to_string())
    })
}
