//! Saved answers, most recent first.

use leptos::prelude::*;

use crate::store::favorites::FavoritesStore;
use crate::util::date::format_kst_date_time;

#[component]
pub fn FavoritesList() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();

    view! {
        <section class="favorites-list">
            <h2>"즐겨찾기"</h2>
            {move || {
                let entries = favorites.with(|f| f.list().to_vec());
                if entries.is_empty() {
                    return view! { <div class="favorites-list__empty">"저장된 답변이 없습니다."</div> }.into_any();
                }
                entries
                    .into_iter()
                    .map(|fav| {
                        let id = fav.message.id.clone();
                        let saved_at = format_kst_date_time(fav.saved_at);
                        let note = fav.note.clone().map(|note| view! { <p class="favorites-list__note">{note}</p> });
                        view! {
                            <div class="favorites-list__item">
                                <div class="favorites-list__content">{fav.message.content}</div>
                                {note}
                                <div class="favorites-list__meta">
                                    <span class="favorites-list__saved-at">{saved_at}</span>
                                    <button
                                        class="btn favorites-list__remove"
                                        title="삭제"
                                        on:click=move |_| favorites.update(|f| f.remove(&id))
                                    >
                                        "삭제"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}
