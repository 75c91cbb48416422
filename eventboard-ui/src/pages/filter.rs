use leptos::prelude::*;

/// Filter settings for the event list. Submits back to `/` so the filter
/// lives in the URL.
#[component]
pub fn FilterPage() -> impl IntoView {
    view! {
        <div class="filter">
            <h1 class="filter__title">"Filter events"</h1>
            <form action="/" method="get" class="filter-form">
                <label class="filter-form__field">
                    <span class="filter-form__label">"Host user id"</span>
                    <input
                        type="text"
                        name="host"
                        class="filter-form__input"
                        placeholder="e.g. 3f1c2a9e-..."
                    />
                </label>
                <button type="submit" class="filter-form__button">"Apply"</button>
                <a href="/" class="filter-form__clear">"Clear filter"</a>
            </form>
        </div>
    }
}
