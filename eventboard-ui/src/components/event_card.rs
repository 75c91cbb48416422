use eventboard_app::domain::{EventItem, VoteState};
use leptos::prelude::*;

fn format_score(score: Option<f32>) -> String {
    score.map(|s| format!("{:.1}", s)).unwrap_or_else(|| "-".to_string())
}

fn format_share(share: Option<f32>) -> String {
    share
        .map(|s| format!("{:.0}%", s * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

/// One event in the list: summary row, vote arrows, attendance and rating
/// buttons, and the details shown while expanded.
#[component]
pub fn EventCard(
    event: EventItem,
    expanded: bool,
    hosted_by_current_user: bool,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_upvote: Callback<()>,
    #[prop(into)] on_downvote: Callback<()>,
    #[prop(into)] on_attend: Callback<()>,
    #[prop(into)] on_rate: Callback<()>,
) -> impl IntoView {
    let vote = event.vote_state();
    let attending = event.is_attended();
    let full = event.remaining_capacity() <= 0;
    let capacity = format!(
        "{} / {}",
        event.current_capacity.unwrap_or(0),
        event.total_capacity
    );
    let when = event.time.format("%a %d %b %Y, %H:%M").to_string();
    let host = event.host_name();
    let interest = event.interest_rating.unwrap_or(0);
    let reviews = event.has_reviews().then(|| {
        view! {
            <dl class="event-card__reviews">
                <dt>"Matched description"</dt>
                <dd>{format_score(event.review_matched_desc)}</dd>
                <dt>"Host preparedness"</dt>
                <dd>{format_score(event.review_host_prep)}</dd>
                <dt>"Would return"</dt>
                <dd>{format_share(event.review_would_return)}</dd>
            </dl>
        }
    });

    let attend_label = if attending {
        "Attending"
    } else if full {
        "Full"
    } else {
        "Attend"
    };

    view! {
        <article class="event-card" class:event-card--expanded=expanded>
            <div class="event-card__votes">
                <button
                    class="vote vote--up"
                    class:vote--active={vote == VoteState::Upvoted}
                    aria-label="Upvote"
                    on:click=move |_| on_upvote.run(())
                >
                    "▲"
                </button>
                <span class="vote__count">{interest}</span>
                <button
                    class="vote vote--down"
                    class:vote--active={vote == VoteState::Downvoted}
                    aria-label="Downvote"
                    on:click=move |_| on_downvote.run(())
                >
                    "▼"
                </button>
            </div>

            <div class="event-card__body">
                <header class="event-card__header" on:click=move |_| on_toggle.run(())>
                    <h2 class="event-card__title">{event.name.clone()}</h2>
                    <span class="event-card__category">{event.category.display_name()}</span>
                    {hosted_by_current_user.then(|| view! {
                        <span class="event-card__badge">"Your event"</span>
                    })}
                </header>
                <p class="event-card__meta">
                    <span>{when}</span>
                    " · "
                    <span>{event.location.clone()}</span>
                    " · "
                    <span>{host}</span>
                </p>
                <p class="event-card__capacity">"Capacity " {capacity}</p>

                {expanded.then(|| view! {
                    <div class="event-card__details">
                        <p class="event-card__description">{event.description.clone()}</p>
                        {reviews}
                    </div>
                })}

                <div class="event-card__actions">
                    <button
                        class="event-card__attend"
                        class:event-card__attend--active=attending
                        prop:disabled={full && !attending}
                        on:click=move |_| on_attend.run(())
                    >
                        {attend_label}
                    </button>
                    {attending.then(|| view! {
                        <button class="event-card__rate" on:click=move |_| on_rate.run(())>
                            "Rate"
                        </button>
                    })}
                </div>
            </div>
        </article>
    }
}
