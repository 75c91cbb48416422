//! Turns user clicks into service calls.

use super::{AttendanceIntent, VoteDirection, VoteIntent};
use crate::domain::EventItem;
use crate::service::EventService;
use eventboard_errors::AppError;

/// Result of one mutation call, labelled for diagnostics.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub action: &'static str,
    pub result: Result<EventItem, AppError>,
}

/// Issues exactly one vote call for a click on the up or down arrow.
pub async fn vote<S: EventService>(
    service: &S,
    event: &EventItem,
    direction: VoteDirection,
) -> MutationOutcome {
    let intent = VoteIntent::for_click(event.vote_state(), direction);
    let result = match intent {
        VoteIntent::Upvote => service.upvote(event).await,
        VoteIntent::Downvote => service.downvote(event).await,
        VoteIntent::Clear => service.novote(event).await,
    };
    MutationOutcome {
        action: intent.describe(),
        result,
    }
}

/// Issues one ticket call, or none when the event is full and no ticket is held.
pub async fn attend<S: EventService>(service: &S, event: &EventItem) -> Option<MutationOutcome> {
    let intent = AttendanceIntent::for_click(event)?;
    let result = match intent {
        AttendanceIntent::Reserve => service.create_ticket(event).await,
        AttendanceIntent::Release => service.delete_ticket(event).await,
    };
    Some(MutationOutcome {
        action: intent.describe(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::super::fake_service::FakeEventService;
    use super::super::{EventListState, Followup};
    use super::*;
    use crate::domain::{EventCategory, EventListFilter, VoteState};
    use chrono::Utc;
    use uuid::Uuid;

    fn event(total: i32, current: i32) -> EventItem {
        EventItem::new(
            "Meetup".to_string(),
            "Rust and coffee".to_string(),
            Utc::now(),
            "Cafe".to_string(),
            total,
            EventCategory::Education,
        )
        .with_id(Uuid::new_v4())
        .with_current_capacity(current)
    }

    async fn loaded(service: &FakeEventService) -> EventListState {
        let mut state = EventListState::default();
        let token = state.begin_fetch();
        let result = service.get_all_event_items(state.filter()).await;
        assert!(state.complete_fetch(token, result));
        state
    }

    #[tokio::test]
    async fn test_repeated_upvote_cycles_through_states() {
        let service = FakeEventService::new(vec![event(5, 0)]);
        let mut state = loaded(&service).await;
        let initial = state.events()[0].vote_state();
        assert_eq!(initial, VoteState::NoVote);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let current = state.events()[0].clone();
            let outcome = vote(&service, &current, VoteDirection::Up).await;
            assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
            seen.push(state.events()[0].vote_state());
        }

        assert_eq!(
            seen,
            vec![VoteState::Upvoted, VoteState::NoVote, VoteState::Upvoted]
        );
        assert_eq!(seen[1], initial);
        assert_eq!(
            service.calls(),
            vec!["get_all_event_items", "upvote", "novote", "upvote"]
        );
    }

    #[tokio::test]
    async fn test_downvote_switches_from_upvote() {
        let service = FakeEventService::new(vec![event(5, 0)]);
        let mut state = loaded(&service).await;

        for direction in [VoteDirection::Up, VoteDirection::Down] {
            let current = state.events()[0].clone();
            let outcome = vote(&service, &current, direction).await;
            assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
        }
        assert_eq!(state.events()[0].vote_state(), VoteState::Downvoted);
        assert_eq!(service.calls()[1..], ["upvote", "downvote"]);
    }

    #[tokio::test]
    async fn test_attend_when_full_issues_no_call() {
        let service = FakeEventService::new(vec![event(5, 5)]);
        let state = loaded(&service).await;

        assert!(attend(&service, &state.events()[0]).await.is_none());
        assert_eq!(service.calls(), vec!["get_all_event_items"]);
    }

    #[tokio::test]
    async fn test_attend_reserves_and_patches_ticket() {
        let service = FakeEventService::new(vec![event(5, 0), event(8, 2)]);
        let mut state = loaded(&service).await;
        let before = state.events().to_vec();

        let outcome = attend(&service, &before[0]).await.expect("seats remain");
        assert_eq!(state.settle_mutation(outcome), Followup::Nothing);

        let after = state.events();
        assert!(after[0].ticket.is_some());
        assert_eq!(after[0].ticket_id, after[0].ticket.as_ref().map(|t| t.id));
        assert_eq!(after[0].total_capacity, 5);
        assert_eq!(after[1], before[1]);
        assert_eq!(service.calls(), vec!["get_all_event_items", "create_ticket"]);

        let outcome = attend(&service, &after[0].clone()).await.expect("ticket held");
        assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
        assert!(state.events()[0].ticket.is_none());
    }

    #[tokio::test]
    async fn test_change_to_uncached_event_triggers_one_refetch() {
        let service = FakeEventService::new(vec![event(5, 0)]);
        let mut state = loaded(&service).await;
        let stale = state.events().to_vec();

        // Created elsewhere after our fetch.
        let newcomer = event(3, 0);
        service.insert(newcomer.clone());

        let outcome = vote(&service, &newcomer, VoteDirection::Down).await;
        assert_eq!(state.settle_mutation(outcome), Followup::Refetch);
        assert_eq!(state.events(), stale.as_slice());

        let token = state.begin_fetch();
        let result = service.get_all_event_items(&EventListFilter::default()).await;
        assert!(state.complete_fetch(token, result));
        assert_eq!(state.events().len(), 2);
        assert_eq!(state.events()[1].vote_state(), VoteState::Downvoted);
        assert_eq!(
            service.calls(),
            vec!["get_all_event_items", "downvote", "get_all_event_items"]
        );
    }

    #[tokio::test]
    async fn test_failed_call_leaves_list_unchanged() {
        let service = FakeEventService::new(vec![event(5, 0)]);
        let mut state = loaded(&service).await;
        let before = state.events().to_vec();

        service.fail_next(AppError::Network("connection reset".to_string()));
        let outcome = vote(&service, &before[0], VoteDirection::Up).await;
        assert!(outcome.result.is_err());
        assert_eq!(outcome.action, "upvoting");
        assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
        assert_eq!(state.events(), before.as_slice());
    }
}
