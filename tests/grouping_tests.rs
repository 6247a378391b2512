//! Integration tests for the secret codec and the grouping/redaction
//! pipeline, end to end: stored listing → decode → group → render.

use serde_json::json;

use tresor::api::types::StoredSecret;
use tresor::secret::{codec, fields_for_display, group_by_kind, SecretContent, MASK};

fn stored(id: i64, title: &str, content: &str) -> StoredSecret {
    StoredSecret {
        id: Some(id),
        user_id: 1,
        title: title.to_string(),
        content: content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Round-trip law
// ---------------------------------------------------------------------------

#[test]
fn every_kind_roundtrips_through_the_codec() {
    let contents = vec![
        SecretContent::credential("alice", "pa55!", "example.com"),
        SecretContent::note("Router", "admin/admin"),
        SecretContent::card("4111 1111 1111 1111", "12/27", "123"),
    ];

    for content in contents {
        let decoded = codec::decode(&codec::encode(&content)).unwrap();
        assert_eq!(decoded, content);
    }
}

// ---------------------------------------------------------------------------
// Listing with a bad record
// ---------------------------------------------------------------------------

#[test]
fn one_bad_record_does_not_hide_the_rest() {
    let listing = vec![
        stored(1, "broken", "{not json"),
        stored(
            2,
            "note",
            r#"{"kind":"note","title":"T","content":"C"}"#,
        ),
    ];

    let groups = group_by_kind(&listing);

    // Exactly one group, "note", with one entry; id 1 silently dropped.
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].kind, "note");
    assert_eq!(groups[0].secrets.len(), 1);
    assert_eq!(groups[0].secrets[0].id, Some(2));

    let fields = fields_for_display(&groups[0].secrets[0].content);
    assert_eq!(
        fields,
        vec![
            ("title".to_string(), "T".to_string()),
            ("content".to_string(), "C".to_string()),
        ]
    );
}

#[test]
fn grouped_count_equals_parsable_count() {
    let listing = vec![
        stored(1, "", "{not json"),
        stored(2, "", r#"{"kind":"note","title":"a","content":"b"}"#),
        stored(3, "", r#"{"no":"kind"}"#),
        stored(4, "", r#"{"kind":"credential","userName":"u","password":"p","url":"x"}"#),
        stored(5, "", r#"{"kind":"credential","userName":"v","password":"q","url":"y"}"#),
    ];

    let grouped: usize = group_by_kind(&listing)
        .iter()
        .map(|g| g.secrets.len())
        .sum();
    assert_eq!(grouped, 3);
}

// ---------------------------------------------------------------------------
// Redaction through the full pipeline
// ---------------------------------------------------------------------------

#[test]
fn sensitive_fields_stay_masked_from_wire_to_display() {
    let content = SecretContent::credential("alice", "correct horse", "example.com");
    let listing = vec![stored(1, "example.com", &codec::encode(&content))];

    let groups = group_by_kind(&listing);
    let fields = fields_for_display(&groups[0].secrets[0].content);

    let password = fields.iter().find(|(name, _)| name == "password").unwrap();
    assert_eq!(password.1, MASK);

    // Non-sensitive fields render verbatim.
    let user = fields.iter().find(|(name, _)| name == "userName").unwrap();
    assert_eq!(user.1, "alice");
}

#[test]
fn redaction_applies_to_stored_records_of_any_shape() {
    let odd = json!({
        "kind": "card",
        "cvv": 999,
        "secretKey": {"hex": "deadbeef"},
        "password": "",
        "memo": "visible",
    });
    let listing = vec![stored(1, "odd", &odd.to_string())];

    let groups = group_by_kind(&listing);
    let fields = fields_for_display(&groups[0].secrets[0].content);

    for (name, rendered) in &fields {
        match name.as_str() {
            "cvv" | "secretKey" | "password" => assert_eq!(rendered, MASK),
            "memo" => assert_eq!(rendered, "visible"),
            other => panic!("unexpected field {other}"),
        }
    }
}
