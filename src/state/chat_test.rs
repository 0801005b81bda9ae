use super::*;

fn reference(law_id: &str, title: Option<&str>, article: Option<&str>) -> LawReference {
    LawReference {
        law_id: law_id.to_owned(),
        title: title.map(str::to_owned),
        article: article.map(str::to_owned),
        url: None,
    }
}

// =============================================================
// Message constructors
// =============================================================

#[test]
fn user_message_gets_fresh_id_and_user_role() {
    let a = Message::user("건축허가 절차는?");
    let b = Message::user("건축허가 절차는?");
    assert_eq!(a.role, Role::User);
    assert_eq!(a.content, "건축허가 절차는?");
    assert!(a.sources.is_none());
    assert_ne!(a.id, b.id);
}

#[test]
fn assistant_notice_is_assistant_without_sources() {
    let msg = Message::assistant_notice("오류");
    assert!(msg.is_assistant());
    assert!(msg.sources().is_empty());
}

// =============================================================
// Serialization shape
// =============================================================

#[test]
fn message_serializes_camel_case_and_skips_missing_sources() {
    let msg = Message::user("hi");
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["role"], "user");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("sources").is_none());
}

#[test]
fn message_deserializes_stored_shape() {
    let raw = r#"{
        "id": "m1",
        "role": "assistant",
        "content": "정답",
        "createdAt": "2024-03-05T05:07:09.000Z",
        "sources": [{"lawId": "L1", "article": "제1조"}]
    }"#;
    let msg: Message = serde_json::from_str(raw).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.sources(), &[reference("L1", None, Some("제1조"))]);
}

// =============================================================
// LawReference::label
// =============================================================

#[test]
fn label_prefers_title_and_appends_article() {
    assert_eq!(reference("L1", Some("건축법"), Some("제11조")).label(), "건축법 제11조");
}

#[test]
fn label_falls_back_to_law_id() {
    assert_eq!(reference("L1", None, None).label(), "L1");
    assert_eq!(reference("L1", None, Some("")).label(), "L1");
}
