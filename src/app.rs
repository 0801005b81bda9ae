//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{chat_panel::ChatPanel, favorites_list::FavoritesList, law_search::LawSearch};
use crate::config::ApiConfig;
use crate::net::api::HttpAnswerClient;
use crate::state::loading::LoadingManager;
use crate::state::session::{ConversationSession, SessionSnapshot};
use crate::store::favorites::FavoritesStore;
use crate::store::feedback::FeedbackRecorder;
use crate::store::{KeyValueStore, LocalStorage};

/// Root application component.
///
/// Owns the session, the stores and the HTTP client, and provides them to
/// every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = HttpAnswerClient::new(ApiConfig::from_env());
    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);

    let session = ConversationSession::new(Arc::new(client.clone()));
    let snapshot = RwSignal::new(session.snapshot());
    session.subscribe(move |snap: &SessionSnapshot| {
        let _ = snapshot.try_set(snap.clone());
    });

    let favorites = RwSignal::new(FavoritesStore::load(Arc::clone(&storage)));
    let feedback = FeedbackRecorder::new(storage);
    let loading = RwSignal::new(LoadingManager::default());

    provide_context(session);
    provide_context(snapshot);
    provide_context(client);
    provide_context(favorites);
    provide_context(feedback);
    provide_context(loading);

    view! {
        <Title text="법률 상담 챗봇"/>

        <main class="app">
            <ChatPanel/>
            <aside class="app__sidebar">
                <LawSearch/>
                <FavoritesList/>
            </aside>
        </main>
    }
}
