//! Keyword search over the statute catalogue.

#[cfg(test)]
#[path = "law_search_test.rs"]
mod law_search_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api::HttpAnswerClient;
use crate::state::loading::LoadingManager;

/// Loading-manager key for the search request.
pub const SEARCH_KEY: &str = "laws:search";

#[component]
pub fn LawSearch() -> impl IntoView {
    let client = expect_context::<HttpAnswerClient>();
    let loading = expect_context::<RwSignal<LoadingManager>>();

    let keyword = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<String>::new());

    let busy = move || loading.with(|l| l.is_loading(SEARCH_KEY));
    let error = move || loading.with(|l| l.error(SEARCH_KEY).map(str::to_owned));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = keyword.get_untracked().trim().to_owned();
        if query.is_empty() || loading.with_untracked(|l| l.is_loading(SEARCH_KEY)) {
            return;
        }
        loading.update(|l| {
            l.set_error(SEARCH_KEY, None);
            l.set_loading(SEARCH_KEY, true);
        });

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.search_laws(&query).await {
                    Ok(body) => {
                        results.set(result_titles(&body));
                        loading.update(|l| l.set_loading(SEARCH_KEY, false));
                    }
                    Err(e) => {
                        log::warn!("law search for {query:?} failed: {e}");
                        loading.update(|l| l.set_error(SEARCH_KEY, Some(e.user_message())));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&client, results);
    };

    view! {
        <section class="law-search">
            <h2>"법령 검색"</h2>
            <form class="law-search__form" on:submit=on_submit>
                <input
                    class="law-search__input"
                    type="search"
                    placeholder="법령명 또는 키워드"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button class="btn law-search__submit" type="submit" disabled=busy>
                    {move || if busy() { "검색 중…" } else { "검색" }}
                </button>
            </form>
            {move || error().map(|msg| view! { <div class="law-search__error">{msg}</div> })}
            <ul class="law-search__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|title| view! { <li class="law-search__result">{title}</li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}

/// Display lines for a search response.
///
/// The body is either a bare array or an object wrapping one under
/// `results`/`laws`/`data`. Each entry shows its first present name field,
/// falling back to the raw JSON.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn result_titles(body: &Value) -> Vec<String> {
    let entries = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => ["results", "laws", "data"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    };
    entries.iter().map(entry_title).collect()
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn entry_title(entry: &Value) -> String {
    ["title", "name", "law_name"]
        .iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str))
        .map_or_else(|| entry.to_string(), str::to_owned)
}
