//! Conversation panel: message history, citations, per-message actions and
//! the question input.

use leptos::prelude::*;

use crate::components::feedback_form::FeedbackForm;
use crate::state::chat::Message;
use crate::state::session::{ConversationSession, SessionSnapshot};
use crate::store::favorites::FavoritesStore;

const GREETING: &str = "안녕하세요! 법률 관련 질문을 입력해주세요.";
#[cfg(feature = "csr")]
const COPIED_MARKER_MS: u32 = 2_000;

/// Chat panel showing the conversation and an input for new questions.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<ConversationSession>();
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();

    let input = RwSignal::new(String::new());
    let feedback_for = RwSignal::new(None::<String>);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = snapshot.with(|s| s.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let loading = move || snapshot.with(|s| s.loading);
    let can_send = move || !loading() && !input.with(|text| text.trim().is_empty());

    let clear_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_send() {
            return;
        }
        let pending = session.ask(&input.get_untracked());
        input.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(pending);
        #[cfg(not(feature = "csr"))]
        drop(pending);
    };

    let on_clear = move |_| clear_session.clear_messages();

    view! {
        <section class="chat-panel">
            <header class="chat-panel__header">
                <h1>"법률 상담"</h1>
                <button class="btn chat-panel__clear" on:click=on_clear>"대화 지우기"</button>
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = snapshot.with(|s| s.messages.clone());
                    if messages.is_empty() {
                        return view! { <div class="chat-panel__empty">{GREETING}</div> }.into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| view! { <MessageRow msg=msg feedback_for=feedback_for/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                <Show when=loading>
                    <div class="chat-panel__pending">"답변을 작성하고 있습니다…"</div>
                </Show>
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="질문을 입력하세요"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary chat-panel__send" type="submit" disabled=move || !can_send()>
                    "전송"
                </button>
            </form>

            {move || {
                feedback_for
                    .get()
                    .map(|message_id| {
                        view! {
                            <FeedbackForm
                                message_id=message_id
                                on_close=Callback::new(move |()| feedback_for.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

/// One message bubble with its citations and action buttons.
#[component]
fn MessageRow(msg: Message, feedback_for: RwSignal<Option<String>>) -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();
    let copied = RwSignal::new(false);

    let id = msg.id.clone();
    let is_favorite = move || favorites.with(|f| f.is_favorite(&id));
    let is_assistant = msg.is_assistant();

    let sources = (!msg.sources().is_empty()).then(|| {
        let items = msg
            .sources()
            .iter()
            .map(|r| view! { <li class="chat-panel__source">{r.label()}</li> })
            .collect::<Vec<_>>();
        view! { <ul class="chat-panel__sources">{items}</ul> }
    });

    let content = msg.content.clone();
    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Some(clipboard) = window.navigator().clipboard() {
                    let write = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&content));
                    leptos::task::spawn_local(async move {
                        if let Err(e) = write.await {
                            log::error!("clipboard write failed: {e:?}");
                            return;
                        }
                        let _ = copied.try_set(true);
                        gloo_timers::callback::Timeout::new(COPIED_MARKER_MS, move || {
                            let _ = copied.try_set(false);
                        })
                        .forget();
                    });
                } else {
                    log::error!("clipboard unavailable");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &content;
    };

    let feedback_id = msg.id.clone();
    let on_feedback = move |_| feedback_for.set(Some(feedback_id.clone()));

    let text = msg.content.clone();
    view! {
        <div class="chat-panel__message" class:chat-panel__message--assistant=is_assistant>
            <div class="chat-panel__text">{text}</div>
            {sources}
            <div class="chat-panel__actions">
                <button
                    class="btn chat-panel__favorite"
                    title="즐겨찾기"
                    on:click=move |_| favorites.update(|f| {
                        f.toggle(&msg);
                    })
                >
                    {move || if is_favorite() { "♥" } else { "♡" }}
                </button>
                <button class="btn chat-panel__copy" title="복사" on:click=on_copy>
                    {move || if copied.get() { "복사됨" } else { "복사" }}
                </button>
                {is_assistant
                    .then(|| {
                        view! {
                            <button class="btn chat-panel__feedback" title="피드백" on:click=on_feedback>
                                "피드백"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
