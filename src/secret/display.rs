//! Grouping and redaction — organize stored secrets for display.
//!
//! Pure functions of their input: no network, no mutable state. One
//! undecodable record must never hide the rest of the user's secrets,
//! so grouping skips bad entries per item instead of failing the batch.

use serde_json::Value;

use crate::api::types::StoredSecret;
use crate::secret::codec;
use crate::secret::content::SecretContent;

/// Fixed mask rendered in place of sensitive field values.
pub const MASK: &str = "******";

/// Field names whose values are never rendered verbatim.
/// Matching is case-sensitive and exact.
const REDACTED_FIELDS: [&str; 3] = ["password", "secretKey", "cvv"];

/// A stored secret whose content has been decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSecret {
    pub id: Option<i64>,
    pub title: String,
    pub content: SecretContent,
}

/// All decoded secrets of one kind, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretGroup {
    /// The kind tag, used as the group heading.
    pub kind: String,
    pub secrets: Vec<DecodedSecret>,
}

/// Group a flat listing by kind tag.
///
/// Groups appear in first-seen input order; secrets keep input order
/// within their group. Entries whose content does not decode are
/// silently omitted. Total: never fails, for any input.
pub fn group_by_kind(stored: &[StoredSecret]) -> Vec<SecretGroup> {
    let mut groups: Vec<SecretGroup> = Vec::new();

    for secret in stored {
        let Ok(content) = codec::decode(&secret.content) else {
            continue;
        };

        let kind = content.kind.as_str();
        let decoded = DecodedSecret {
            id: secret.id,
            title: secret.title.clone(),
            content,
        };

        match groups.iter_mut().find(|g| g.kind == kind) {
            Some(group) => group.secrets.push(decoded),
            None => groups.push(SecretGroup {
                kind: kind.to_string(),
                secrets: vec![decoded],
            }),
        }
    }

    groups
}

/// The (field name, rendered value) pairs of one secret, in stored
/// order, with the discriminator excluded — it already serves as the
/// group heading and is never re-displayed.
///
/// Sensitive fields render as the fixed mask regardless of their actual
/// value. Everything else renders scalars as-is and structures
/// pretty-printed. Total for any decodable content.
pub fn fields_for_display(content: &SecretContent) -> Vec<(String, String)> {
    content
        .fields
        .iter()
        .map(|(name, value)| {
            let rendered = if REDACTED_FIELDS.contains(&name.as_str()) {
                MASK.to_string()
            } else {
                render_value(value)
            };
            (name.clone(), rendered)
        })
        .collect()
}

/// Render a single attribute value: scalars in their literal form,
/// objects and arrays as pretty-printed JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
