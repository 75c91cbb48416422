use super::{ErrorDisplay, EventCard, LoadingSpinner, RateEventModal};
use crate::pages::get_current_user;
use crate::services::ServerEventService;
use eventboard_app::domain::{EventItem, EventListFilter, EventRating};
use eventboard_app::event_list::{actions, EventListState, Followup, MutationOutcome, VoteDirection};
use eventboard_app::service::EventService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Fetches, filters and renders the event list, and keeps it in step with
/// the records returned by vote and ticket calls.
#[component]
pub fn EventList(
    #[prop(into)] filter: Signal<EventListFilter>,
    #[prop(optional)] show_filter_button: bool,
) -> impl IntoView {
    let state = RwSignal::new(EventListState::new(filter.get_untracked()));
    let current_user_id = RwSignal::new(None::<Uuid>);

    let fetch = move || {
        let Some(token) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let filter = state.with_untracked(|s| s.filter().clone());
        spawn_local(async move {
            let result = ServerEventService.get_all_event_items(&filter).await;
            state.update(|s| {
                s.complete_fetch(token, result);
            });
        });
    };

    let settle = move |outcome: MutationOutcome| {
        if state.try_update(|s| s.settle_mutation(outcome)) == Some(Followup::Refetch) {
            fetch();
        }
    };

    let vote = move |event: EventItem, direction: VoteDirection| {
        spawn_local(async move {
            settle(actions::vote(&ServerEventService, &event, direction).await);
        });
    };

    let attend = move |event: EventItem| {
        spawn_local(async move {
            if let Some(outcome) = actions::attend(&ServerEventService, &event).await {
                settle(outcome);
            }
        });
    };

    // Initial load, and a reload whenever the filter changes.
    Effect::new(move |previous: Option<()>| {
        let next = filter.get();
        let changed = state.try_update(|s| s.set_filter(next)) == Some(Followup::Refetch);
        if previous.is_none() || changed {
            fetch();
        }
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match get_current_user().await {
                Ok(user) => current_user_id.set(user.map(|u| u.id)),
                Err(e) => tracing::warn!("Could not load current user: {}", e),
            }
        });
    });

    let rating_event_name = Signal::derive(move || {
        state.with(|s| s.rating_target().map(|e| e.name.clone()).unwrap_or_default())
    });

    let on_submit_rating = Callback::new(move |rating: EventRating| {
        state.update(|s| {
            if s.submit_rating(rating).is_none() {
                tracing::warn!("Rating submitted without an event to rate");
            }
        });
    });

    view! {
        <section class="event-list-page">
            {show_filter_button.then(|| view! {
                <a href="/events/filter" class="filter-button">"Filter"</a>
            })}

            <Show when=move || state.with(|s| s.is_loading())>
                <LoadingSpinner/>
            </Show>

            {move || state.with(|s| s.load_error().cloned()).map(|err| view! {
                <ErrorDisplay
                    message={err.user_message().to_string()}
                    on_retry={Callback::new(move |_| fetch())}
                />
            })}

            <div class="event-list">
                {move || {
                    let user_id = current_user_id.get();
                    let events = state.with(|s| s.visible_events().cloned().collect::<Vec<_>>());
                    events
                        .into_iter()
                        .map(|event| {
                            let id = event.id;
                            let expanded = id.is_some_and(|id| state.with(|s| s.is_expanded(id)));
                            let hosted_by_current_user = event.is_hosted_by(user_id);

                            let on_toggle = Callback::new(move |_| {
                                if let Some(id) = id {
                                    state.update(|s| s.toggle_expanded(id));
                                }
                            });
                            let on_upvote = {
                                let event = event.clone();
                                Callback::new(move |_| vote(event.clone(), VoteDirection::Up))
                            };
                            let on_downvote = {
                                let event = event.clone();
                                Callback::new(move |_| vote(event.clone(), VoteDirection::Down))
                            };
                            let on_attend = {
                                let event = event.clone();
                                Callback::new(move |_| attend(event.clone()))
                            };
                            let on_rate = {
                                let event = event.clone();
                                Callback::new(move |_| state.update(|s| s.open_rating(event.clone())))
                            };

                            view! {
                                <EventCard
                                    event=event
                                    expanded=expanded
                                    hosted_by_current_user=hosted_by_current_user
                                    on_toggle=on_toggle
                                    on_upvote=on_upvote
                                    on_downvote=on_downvote
                                    on_attend=on_attend
                                    on_rate=on_rate
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <RateEventModal
                show={Signal::derive(move || state.with(|s| s.is_rating_open()))}
                event_name=rating_event_name
                on_close={Callback::new(move |_| state.update(|s| s.close_rating()))}
                on_submit=on_submit_rating
            />
        </section>
    }
}
