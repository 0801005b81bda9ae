//! Modal collecting a rating and optional comment for one answer.

use leptos::prelude::*;

use crate::store::feedback::{FeedbackDraft, FeedbackRecorder, MAX_COMMENT_CHARS, RATINGS, rating_label};

#[cfg(feature = "csr")]
const CLOSE_AFTER_SUBMIT_MS: u32 = 2_000;

/// Feedback modal. Submit stays disabled until a rating is chosen; after
/// submitting it shows a thank-you note and closes itself.
#[component]
pub fn FeedbackForm(message_id: String, on_close: Callback<()>) -> impl IntoView {
    let recorder = expect_context::<FeedbackRecorder>();

    let draft = RwSignal::new(FeedbackDraft::default());
    let submitted = RwSignal::new(false);

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitted.get_untracked() {
            return;
        }
        if draft.with_untracked(|d| d.submit(&recorder, &message_id)).is_none() {
            return;
        }
        submitted.set(true);

        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(CLOSE_AFTER_SUBMIT_MS, move || on_close.run(())).forget();
    };

    let rating_buttons = RATINGS
        .iter()
        .map(|&rating| {
            let selected = move || draft.with(|d| d.rating() == Some(rating));
            view! {
                <button
                    type="button"
                    class="btn feedback-form__rating"
                    class:feedback-form__rating--selected=selected
                    title=format!("{rating}점")
                    on:click=move |_| draft.update(|d| d.set_rating(rating))
                >
                    {rating_label(rating)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let comment_len = move || draft.with(|d| d.comment().chars().count());

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--feedback"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <form
                    class="feedback-form"
                    class:feedback-form--hidden=move || submitted.get()
                    on:submit=on_submit
                >
                    <h2>"답변이 도움이 되었나요?"</h2>
                    <div class="feedback-form__ratings">{rating_buttons}</div>
                    <textarea
                        class="feedback-form__comment"
                        placeholder="의견을 남겨주세요 (선택)"
                        maxlength=MAX_COMMENT_CHARS.to_string()
                        prop:value=move || draft.with(|d| d.comment().to_owned())
                        on:input=move |ev| draft.update(|d| d.set_comment(&event_target_value(&ev)))
                    ></textarea>
                    <div class="feedback-form__counter">
                        {move || format!("{}/{MAX_COMMENT_CHARS}", comment_len())}
                    </div>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "취소"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || !draft.with(FeedbackDraft::can_submit)
                        >
                            "제출"
                        </button>
                    </div>
                </form>
                <Show when=move || submitted.get()>
                    <p class="feedback-form__thanks">"소중한 의견 감사합니다!"</p>
                </Show>
            </div>
        </div>
    }
}
