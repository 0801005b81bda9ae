//! Answer feedback: an append-only log of ratings and comments.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError, load_json, save_json};
use crate::config::FEEDBACK_KEY;
use crate::util::clock;

/// Longest comment the feedback form accepts, in characters.
pub const MAX_COMMENT_CHARS: usize = 500;

/// Ratings offered by the feedback form.
pub const RATINGS: [u8; 5] = [1, 2, 3, 4, 5];

/// One submitted piece of feedback. Never mutated once logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub message_id: String,
    pub rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Appends feedback records to durable storage.
///
/// Each record is a read-modify-write of the whole log. Storage failures are
/// logged and swallowed: the submitter still sees a confirmation even when
/// the record was not kept. A log that cannot be read is never overwritten.
#[derive(Clone)]
pub struct FeedbackRecorder {
    store: Arc<dyn KeyValueStore>,
}

impl FeedbackRecorder {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append a record. The rating is not validated here; see [`FeedbackDraft`].
    pub fn record(&self, message_id: &str, rating: Option<u8>, comment: Option<String>) -> FeedbackRecord {
        let record = FeedbackRecord { message_id: message_id.to_owned(), rating, comment, timestamp: clock::now() };

        // An unreadable log is left as stored; this record is dropped.
        let mut log = match self.load_log() {
            Ok(log) => log,
            Err(e) => {
                log::warn!("feedback for {message_id} not saved, log unreadable: {e}");
                return record;
            }
        };
        log.push(record.clone());
        if let Err(e) = save_json(self.store.as_ref(), FEEDBACK_KEY, &log) {
            log::warn!("failed to save feedback for {message_id}: {e}");
        }
        record
    }

    /// The persisted log, oldest first. Empty when storage is unreadable.
    #[must_use]
    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.load_log().unwrap_or_else(|e| {
            log::warn!("failed to load feedback log: {e}");
            Vec::new()
        })
    }

    fn load_log(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        Ok(load_json::<Vec<FeedbackRecord>>(self.store.as_ref(), FEEDBACK_KEY)?.unwrap_or_default())
    }
}

/// In-progress feedback form state.
///
/// Submission requires a rating in 1..=5; comments are capped at
/// [`MAX_COMMENT_CHARS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    rating: Option<u8>,
    comment: String,
}

impl FeedbackDraft {
    /// Choose a rating; values outside 1..=5 are ignored.
    pub fn set_rating(&mut self, rating: u8) {
        if RATINGS.contains(&rating) {
            self.rating = Some(rating);
        }
    }

    #[must_use]
    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn set_comment(&mut self, text: &str) {
        self.comment = text.chars().take(MAX_COMMENT_CHARS).collect();
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.rating.is_some()
    }

    /// Record the draft for `message_id`. Returns `None` (and records
    /// nothing) until a rating has been chosen.
    pub fn submit(&self, recorder: &FeedbackRecorder, message_id: &str) -> Option<FeedbackRecord> {
        if !self.can_submit() {
            return None;
        }
        let comment = Some(self.comment.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned);
        Some(recorder.record(message_id, self.rating, comment))
    }
}

/// Button face for a rating: thumbs at the extremes, neutral in between.
#[must_use]
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        5 => "👍",
        1 => "👎",
        _ => "😐",
    }
}
