//! Typed secret content — the decoded payload inside a stored secret.
//!
//! Content travels to and from the storage service as an opaque JSON
//! string whose object form always carries a `"kind"` discriminator.
//! The kind set is closed; the attributes are an ordered open bag so
//! stored records with extra or missing fields still decode and render.

use serde_json::{Map, Value};

/// The closed set of secret kinds the client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    Credential,
    Note,
    Card,
}

impl SecretKind {
    /// The wire discriminator for this kind. Stable for the lifetime of
    /// a record; renaming a tag is a breaking schema change.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKind::Credential => "credential",
            SecretKind::Note => "note",
            SecretKind::Card => "card",
        }
    }

    /// Parse a wire discriminator. Unknown tags are rejected.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "credential" => Some(SecretKind::Credential),
            "note" => Some(SecretKind::Note),
            "card" => Some(SecretKind::Card),
            _ => None,
        }
    }
}

/// Decoded secret content: a kind tag plus the attribute bag.
///
/// The bag preserves stored field order and holds whatever attributes
/// the record carries — canonical ones from the constructors below, or
/// anything else a stored payload happens to contain. Attributes are
/// never type-checked structurally; they exist for display.
/// The `"kind"` key itself is never stored in the bag.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretContent {
    pub kind: SecretKind,
    pub fields: Map<String, Value>,
}

impl SecretContent {
    /// A credential secret: login, password, and the site it belongs to.
    pub fn credential(user_name: &str, password: &str, url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("userName".to_string(), Value::String(user_name.to_string()));
        fields.insert("password".to_string(), Value::String(password.to_string()));
        fields.insert("url".to_string(), Value::String(url.to_string()));
        Self {
            kind: SecretKind::Credential,
            fields,
        }
    }

    /// A free-text note secret.
    pub fn note(title: &str, content: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        fields.insert("content".to_string(), Value::String(content.to_string()));
        Self {
            kind: SecretKind::Note,
            fields,
        }
    }

    /// A payment card secret.
    pub fn card(card_number: &str, expiration: &str, cvv: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(
            "cardNumber".to_string(),
            Value::String(card_number.to_string()),
        );
        fields.insert(
            "expiration".to_string(),
            Value::String(expiration.to_string()),
        );
        fields.insert("cvv".to_string(), Value::String(cvv.to_string()));
        Self {
            kind: SecretKind::Card,
            fields,
        }
    }

    /// Build content from a parsed JSON value.
    ///
    /// Returns `None` when the value is not an object, has no `"kind"`
    /// string, or names an unknown kind.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        // shift_remove keeps the remaining attributes in stored order.
        let tag = fields.shift_remove("kind")?;
        let kind = SecretKind::from_tag(tag.as_str()?)?;
        Some(Self { kind, fields })
    }

    /// Build the JSON object form: `"kind"` first, then the attribute
    /// bag in insertion order.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            "kind".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        for (name, value) in &self.fields {
            object.insert(name.clone(), value.clone());
        }
        Value::Object(object)
    }
}
