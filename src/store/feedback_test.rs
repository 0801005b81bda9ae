use super::*;
use crate::store::MemoryStore;
use crate::store::test_helpers::{QuotaStore, UnavailableStore};

fn memory() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

// =============================================================
// FeedbackRecorder
// =============================================================

#[test]
fn record_then_reload_contains_record() {
    let store = memory();
    FeedbackRecorder::new(Arc::clone(&store)).record("m1", Some(5), Some("good".to_owned()));

    let log = FeedbackRecorder::new(store).records();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message_id, "m1");
    assert_eq!(log[0].rating, Some(5));
    assert_eq!(log[0].comment.as_deref(), Some("good"));
}

#[test]
fn record_appends_without_deduplicating() {
    let recorder = FeedbackRecorder::new(memory());
    recorder.record("m1", Some(5), None);
    recorder.record("m1", Some(1), Some("changed my mind".to_owned()));
    let log = recorder.records();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].rating, Some(5));
    assert_eq!(log[1].rating, Some(1));
}

#[test]
fn record_does_not_validate_rating() {
    let recorder = FeedbackRecorder::new(memory());
    recorder.record("m1", None, None);
    recorder.record("m2", Some(9), None);
    let ratings: Vec<_> = recorder.records().iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![None, Some(9)]);
}

#[test]
fn record_round_trips_through_store_unchanged() {
    let recorder = FeedbackRecorder::new(memory());
    let record = recorder.record("m1", Some(4), Some("괜찮아요".to_owned()));
    assert_eq!(recorder.records(), vec![record]);
}

#[test]
fn reads_legacy_log_with_empty_comment_and_null_rating() {
    let store = memory();
    store
        .save(
            FEEDBACK_KEY,
            r#"[{"messageId":"m1","rating":null,"comment":"","timestamp":"2024-03-05T05:07:09.000Z"}]"#,
        )
        .unwrap();
    let log = FeedbackRecorder::new(store).records();
    assert_eq!(log[0].rating, None);
    assert_eq!(log[0].comment.as_deref(), Some(""));
}

#[test]
fn corrupt_log_is_left_untouched() {
    let store = memory();
    store.save(FEEDBACK_KEY, "oops").unwrap();
    let recorder = FeedbackRecorder::new(Arc::clone(&store));
    let record = recorder.record("m1", Some(3), None);

    assert_eq!(record.message_id, "m1");
    assert_eq!(store.load(FEEDBACK_KEY).unwrap().as_deref(), Some("oops"));
}

#[test]
fn failed_read_keeps_earlier_records() {
    let quota = Arc::new(QuotaStore::default());
    let recorder = FeedbackRecorder::new(quota.clone());
    recorder.record("m1", Some(5), None);
    recorder.record("m2", Some(4), None);

    quota.set_unreadable(true);
    let record = recorder.record("m3", Some(1), None);
    assert_eq!(record.message_id, "m3");
    assert!(recorder.records().is_empty());

    quota.set_unreadable(false);
    let ids: Vec<_> = recorder.records().into_iter().map(|r| r.message_id).collect();
    assert_eq!(ids, vec!["m1".to_owned(), "m2".to_owned()]);
}

#[test]
fn unavailable_storage_still_returns_record() {
    let recorder = FeedbackRecorder::new(Arc::new(UnavailableStore));
    let record = recorder.record("m1", Some(5), None);
    assert_eq!(record.message_id, "m1");
    assert!(recorder.records().is_empty());
}

#[test]
fn failed_write_keeps_earlier_log() {
    let quota = Arc::new(QuotaStore::default());
    let recorder = FeedbackRecorder::new(quota.clone());
    recorder.record("m1", Some(5), None);
    quota.set_full(true);
    recorder.record("m2", Some(4), None);

    let ids: Vec<_> = recorder.records().into_iter().map(|r| r.message_id).collect();
    assert_eq!(ids, vec!["m1".to_owned()]);
}

// =============================================================
// FeedbackDraft
// =============================================================

#[test]
fn draft_cannot_submit_without_rating() {
    let recorder = FeedbackRecorder::new(memory());
    let mut draft = FeedbackDraft::default();
    draft.set_comment("no rating");
    assert!(!draft.can_submit());
    assert!(draft.submit(&recorder, "m1").is_none());
    assert!(recorder.records().is_empty());
}

#[test]
fn draft_ignores_out_of_range_ratings() {
    let mut draft = FeedbackDraft::default();
    draft.set_rating(0);
    draft.set_rating(6);
    assert_eq!(draft.rating(), None);
    draft.set_rating(3);
    assert_eq!(draft.rating(), Some(3));
}

#[test]
fn draft_truncates_comment_to_limit_in_chars() {
    let mut draft = FeedbackDraft::default();
    draft.set_comment(&"가".repeat(MAX_COMMENT_CHARS + 20));
    assert_eq!(draft.comment().chars().count(), MAX_COMMENT_CHARS);
}

#[test]
fn draft_submit_records_rating_and_trimmed_comment() {
    let recorder = FeedbackRecorder::new(memory());
    let mut draft = FeedbackDraft::default();
    draft.set_rating(5);
    draft.set_comment("  good  ");
    let record = draft.submit(&recorder, "m1").expect("rated draft submits");
    assert_eq!(record.rating, Some(5));
    assert_eq!(record.comment.as_deref(), Some("good"));
}

#[test]
fn draft_submit_drops_blank_comment() {
    let recorder = FeedbackRecorder::new(memory());
    let mut draft = FeedbackDraft::default();
    draft.set_rating(2);
    draft.set_comment("   ");
    let record = draft.submit(&recorder, "m1").unwrap();
    assert!(record.comment.is_none());
}

// =============================================================
// rating_label
// =============================================================

#[test]
fn rating_label_uses_thumbs_at_extremes() {
    assert_eq!(rating_label(5), "👍");
    assert_eq!(rating_label(1), "👎");
    assert_eq!(rating_label(3), "😐");
}
