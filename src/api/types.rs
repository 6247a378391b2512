//! Wire types exchanged with the storage service.
//!
//! Field names follow the service's camelCase JSON. The `content` field
//! is an opaque string end to end — the transport layer never looks
//! inside it; encoding and decoding belong to the secret codec.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A secret as stored server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSecret {
    /// Assigned by the storage service; absent until persisted.
    #[serde(default)]
    pub id: Option<i64>,

    /// Owning user reference.
    #[serde(default)]
    pub user_id: i64,

    /// Short human label.
    #[serde(default)]
    pub title: String,

    /// Opaque serialized secret content.
    pub content: String,
}

/// Body of a create-secret request.
///
/// The service validates `title`, `email`, and `encryptPassword` on this
/// route in addition to the owner reference and payload, so the client
/// sends the full set.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSecretRequest {
    pub user_id: i64,
    pub title: String,
    pub email: String,
    pub encrypt_password: String,
    pub content: String,
}

/// Body of a register-user request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Read the user-facing message out of a service error body.
///
/// The service answers failures with `{"message": …}` where the value
/// is either a plain string or an array of field-validation strings.
/// Returns `None` when no message can be extracted.
pub fn rejection_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_secret_deserializes_from_service_json() {
        let secret: StoredSecret = serde_json::from_value(json!({
            "id": 42,
            "userId": 7,
            "title": "x.com",
            "content": "{\"kind\":\"note\"}",
        }))
        .unwrap();

        assert_eq!(secret.id, Some(42));
        assert_eq!(secret.user_id, 7);
        assert_eq!(secret.title, "x.com");
    }

    #[test]
    fn stored_secret_tolerates_sparse_entries() {
        // Listing entries sometimes carry only id and content.
        let secret: StoredSecret =
            serde_json::from_value(json!({"id": 1, "content": "{not json"})).unwrap();
        assert_eq!(secret.id, Some(1));
        assert_eq!(secret.title, "");
    }

    #[test]
    fn new_secret_request_uses_camel_case() {
        let request = NewSecretRequest {
            user_id: 7,
            title: "t".to_string(),
            email: "a@b.c".to_string(),
            encrypt_password: "mp".to_string(),
            content: "{}".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("encryptPassword").is_some());
    }

    #[test]
    fn rejection_message_reads_plain_strings() {
        let body = json!({"message": "duplicate title"});
        assert_eq!(rejection_message(&body).as_deref(), Some("duplicate title"));
    }

    #[test]
    fn rejection_message_joins_validation_arrays() {
        let body = json!({"message": ["title: Title is required.", "email: email is required."]});
        assert_eq!(
            rejection_message(&body).as_deref(),
            Some("title: Title is required.; email: email is required.")
        );
    }

    #[test]
    fn rejection_message_rejects_other_shapes() {
        assert!(rejection_message(&json!({"message": 500})).is_none());
        assert!(rejection_message(&json!({"error": "nope"})).is_none());
        assert!(rejection_message(&json!({"message": []})).is_none());
    }
}
