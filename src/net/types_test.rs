use super::*;

// =============================================================
// DesignId
// =============================================================

#[test]
fn design_id_accepts_string_and_integer() {
    let text: DesignId = serde_json::from_str("\"d-42\"").unwrap();
    let number: DesignId = serde_json::from_str("42").unwrap();
    assert_eq!(text.as_str(), "d-42");
    assert_eq!(number, DesignId::new("42"));
}

#[test]
fn design_id_serializes_as_plain_string() {
    let json = serde_json::to_value(DesignId::new("abc")).unwrap();
    assert_eq!(json, serde_json::json!("abc"));
}

#[test]
fn design_id_display_is_raw_value() {
    assert_eq!(DesignId::new("x1").to_string(), "x1");
}

// =============================================================
// DesignListResponse
// =============================================================

#[test]
fn list_response_reads_data_field_in_order() {
    let body = serde_json::json!({
        "data": [
            { "design_id": "a", "name": "Poster", "preview": "https://cdn/a.png" },
            { "design_id": "b", "name": "Flyer", "preview": "https://cdn/b.png" },
            { "design_id": 7, "name": "Card", "preview": "" }
        ]
    });
    let resp: DesignListResponse = serde_json::from_value(body).unwrap();
    let ids: Vec<&str> = resp.data.iter().map(|d| d.design_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "7"]);
    assert_eq!(resp.data[0].name, "Poster");
    assert_eq!(resp.data[1].preview, "https://cdn/b.png");
}

#[test]
fn list_response_without_data_is_rejected() {
    let body = serde_json::json!({ "designs": [] });
    assert!(serde_json::from_value::<DesignListResponse>(body).is_err());
}

#[test]
fn design_tolerates_missing_name_and_preview() {
    let design: Design = serde_json::from_value(serde_json::json!({ "design_id": "z" })).unwrap();
    assert!(design.name.is_empty());
    assert!(design.preview.is_empty());
}

#[test]
fn design_without_id_is_rejected() {
    let body = serde_json::json!({ "name": "Orphan", "preview": "" });
    assert!(serde_json::from_value::<Design>(body).is_err());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_value(serde_json::json!({ "name": "Ada" })).unwrap();
    assert_eq!(user.name, "Ada");
    assert!(user.email.is_none());
    assert!(user.picture.is_none());
}
