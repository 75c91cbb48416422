use eventboard_app::domain::{EventRating, RATING_MAX, RATING_MIN};
use leptos::prelude::*;

#[component]
fn ScoreInput(label: &'static str, value: RwSignal<u8>) -> impl IntoView {
    view! {
        <label class="rate-form__field">
            <span class="rate-form__label">{label}</span>
            <select
                class="rate-form__select"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(score) = event_target_value(&ev).parse::<u8>() {
                        value.set(score);
                    }
                }
            >
                {(RATING_MIN..=RATING_MAX)
                    .map(|score| view! { <option value={score.to_string()}>{score}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Modal collecting a post-attendance rating for one event.
#[component]
pub fn RateEventModal(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] event_name: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<EventRating>,
) -> impl IntoView {
    let host_preparedness = RwSignal::new(RATING_MAX);
    let matched_description = RwSignal::new(RATING_MAX);
    let would_return = RwSignal::new(true);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(EventRating::new(
            host_preparedness.get_untracked(),
            matched_description.get_untracked(),
            would_return.get_untracked(),
        ));
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal__header">
                    <h2 class="modal__title">"Rate event"</h2>
                    <button class="modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <p class="modal__subtitle">{move || event_name.get()}</p>
                <form class="rate-form" on:submit=on_form_submit>
                    <ScoreInput label="How prepared was the host?" value=host_preparedness/>
                    <ScoreInput label="How well did it match its description?" value=matched_description/>
                    <label class="rate-form__field rate-form__field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || would_return.get()
                            on:change=move |ev| would_return.set(event_target_checked(&ev))
                        />
                        "I would go to this host's events again"
                    </label>
                    <button type="submit" class="rate-form__submit">"Submit rating"</button>
                </form>
            </div>
        </Show>
    }
}
