//! Saved ("favorite") messages persisted across sessions.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, load_json, save_json};
use crate::config::FAVORITES_KEY;
use crate::state::chat::Message;
use crate::util::clock;

/// A message the user saved, with when it was saved and an optional note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMessage {
    #[serde(flatten)]
    pub message: Message,
    pub saved_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Favorites collection, most-recent-first, at most one entry per message id.
///
/// The in-memory list is authoritative for the current session; every
/// mutation writes the whole list back to storage on a best-effort basis.
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    favorites: Vec<FavoriteMessage>,
}

impl FavoritesStore {
    /// Load the persisted collection. Unreadable or corrupt storage yields
    /// an empty collection.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let favorites = match load_json::<Vec<FavoriteMessage>>(store.as_ref(), FAVORITES_KEY) {
            Ok(stored) => dedupe_by_id(stored.unwrap_or_default()),
            Err(e) => {
                log::warn!("failed to load favorites: {e}");
                Vec::new()
            }
        };
        Self { store, favorites }
    }

    /// Save `message` at the front. Re-adding a saved message moves it to the
    /// front with a fresh timestamp instead of duplicating it.
    pub fn add(&mut self, message: &Message, note: Option<String>) {
        self.favorites.retain(|fav| fav.message.id != message.id);
        self.favorites
            .insert(0, FavoriteMessage { message: message.clone(), saved_at: clock::now(), note });
        self.persist();
    }

    pub fn remove(&mut self, message_id: &str) {
        self.favorites.retain(|fav| fav.message.id != message_id);
        self.persist();
    }

    /// Add when absent, remove when present. Returns whether the message is
    /// a favorite afterwards.
    pub fn toggle(&mut self, message: &Message) -> bool {
        if self.is_favorite(&message.id) {
            self.remove(&message.id);
            false
        } else {
            self.add(message, None);
            true
        }
    }

    #[must_use]
    pub fn is_favorite(&self, message_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav.message.id == message_id)
    }

    #[must_use]
    pub fn list(&self) -> &[FavoriteMessage] {
        &self.favorites
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.store.as_ref(), FAVORITES_KEY, &self.favorites) {
            log::warn!("failed to save favorites: {e}");
        }
    }
}

/// Keep the first (most recent) entry per message id; older releases could
/// store duplicates.
fn dedupe_by_id(favorites: Vec<FavoriteMessage>) -> Vec<FavoriteMessage> {
    let mut seen = HashSet::new();
    favorites
        .into_iter()
        .filter(|fav| seen.insert(fav.message.id.clone()))
        .collect()
}
