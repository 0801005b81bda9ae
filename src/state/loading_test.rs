use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn unknown_key_is_idle_without_error() {
    let manager = LoadingManager::default();
    assert_eq!(manager.state("laws:search"), LoadingState::default());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn set_loading_true_marks_key_loading() {
    let mut manager = LoadingManager::default();
    manager.set_loading("chat:ask", true);
    assert!(manager.is_loading("chat:ask"));
    assert!(!manager.is_loading("laws:search"));
}

#[test]
fn set_error_stops_loading() {
    let mut manager = LoadingManager::default();
    manager.set_loading("chat:ask", true);
    manager.set_error("chat:ask", Some("boom".to_owned()));
    assert_eq!(
        manager.state("chat:ask"),
        LoadingState { is_loading: false, error: Some("boom".to_owned()) }
    );
}

#[test]
fn set_loading_false_clears_error() {
    let mut manager = LoadingManager::default();
    manager.set_error("chat:ask", Some("boom".to_owned()));
    manager.set_loading("chat:ask", false);
    assert!(manager.error("chat:ask").is_none());
}

#[test]
fn set_loading_true_keeps_previous_error() {
    let mut manager = LoadingManager::default();
    manager.set_error("chat:ask", Some("boom".to_owned()));
    manager.set_loading("chat:ask", true);
    assert!(manager.is_loading("chat:ask"));
    assert_eq!(manager.error("chat:ask"), Some("boom"));
}

#[test]
fn set_error_none_does_not_touch_loading() {
    let mut manager = LoadingManager::default();
    manager.set_loading("chat:ask", true);
    manager.set_error("chat:ask", None);
    assert!(manager.is_loading("chat:ask"));
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_removes_only_that_key() {
    let mut manager = LoadingManager::default();
    manager.set_loading("a", true);
    manager.set_loading("b", true);
    manager.clear("a");
    assert!(!manager.is_loading("a"));
    assert!(manager.is_loading("b"));
}

#[test]
fn clear_all_resets_everything() {
    let mut manager = LoadingManager::default();
    manager.set_loading("a", true);
    manager.set_error("b", Some("x".to_owned()));
    manager.clear_all();
    assert_eq!(manager.state("a"), LoadingState::default());
    assert_eq!(manager.state("b"), LoadingState::default());
}
