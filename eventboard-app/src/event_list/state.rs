use super::actions::MutationOutcome;
use super::{reconcile, Expansion, Reconciled};
use crate::domain::{EventItem, EventListFilter, EventRating};
use eventboard_errors::AppError;
use uuid::Uuid;

/// Identifies one issued fetch. Only the most recently issued token may
/// replace the cached list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// What the caller has to do after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Followup {
    Nothing,
    Refetch,
}

/// Cached event list plus the view state built around it.
#[derive(Debug, Clone)]
pub struct EventListState {
    filter: EventListFilter,
    events: Vec<EventItem>,
    loading: bool,
    load_error: Option<AppError>,
    expansion: Expansion<Uuid>,
    rating_target: Option<EventItem>,
    latest_fetch: u64,
}

impl EventListState {
    pub fn new(filter: EventListFilter) -> Self {
        Self {
            filter,
            events: Vec::new(),
            loading: true,
            load_error: None,
            expansion: Expansion::new(),
            rating_target: None,
            latest_fetch: 0,
        }
    }

    pub fn filter(&self) -> &EventListFilter {
        &self.filter
    }

    /// Returns `Refetch` only when the filter actually changed.
    pub fn set_filter(&mut self, filter: EventListFilter) -> Followup {
        if self.filter == filter {
            return Followup::Nothing;
        }
        self.filter = filter;
        Followup::Refetch
    }

    pub fn events(&self) -> &[EventItem] {
        &self.events
    }

    /// Cached events passing the active filter, in list order.
    pub fn visible_events(&self) -> impl Iterator<Item = &EventItem> {
        self.events.iter().filter(|event| self.filter.matches(event))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&AppError> {
        self.load_error.as_ref()
    }

    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_fetch += 1;
        self.loading = true;
        FetchToken(self.latest_fetch)
    }

    /// Applies a fetch result unless a newer fetch was issued meanwhile.
    /// Returns whether the result was applied.
    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Vec<EventItem>, AppError>,
    ) -> bool {
        if token.0 != self.latest_fetch {
            tracing::debug!(
                "Discarding stale event list response (fetch {} superseded by {})",
                token.0,
                self.latest_fetch
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(events) => {
                self.events = events;
                self.load_error = None;
            }
            Err(err) => {
                tracing::error!("Error fetching event list: {}", err);
                self.load_error = Some(err);
            }
        }
        true
    }

    /// Patches a server-confirmed record into the cache. A record that is
    /// not cached leaves the cache as is and asks for a full reload.
    pub fn apply_changed(&mut self, updated: EventItem) -> Followup {
        let id = updated.id;
        match reconcile(&self.events, updated) {
            Reconciled::Patched(events) => {
                self.events = events;
                Followup::Nothing
            }
            Reconciled::Missing => {
                tracing::error!(
                    "An event changed, but the event could not be found in the event list. Reloading the event list. eventId: {:?}",
                    id
                );
                Followup::Refetch
            }
        }
    }

    /// Settles the outcome of a vote or attendance call. Failures are logged
    /// and leave the cache untouched.
    pub fn settle_mutation(&mut self, outcome: MutationOutcome) -> Followup {
        match outcome.result {
            Ok(updated) => self.apply_changed(updated),
            Err(err) => {
                tracing::error!("Error {} event: {}", outcome.action, err);
                Followup::Nothing
            }
        }
    }

    pub fn toggle_expanded(&mut self, id: Uuid) {
        self.expansion.toggle(id);
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expansion.is_expanded(&id)
    }

    pub fn open_rating(&mut self, event: EventItem) {
        self.rating_target = Some(event);
    }

    pub fn close_rating(&mut self) {
        self.rating_target = None;
    }

    pub fn rating_target(&self) -> Option<&EventItem> {
        self.rating_target.as_ref()
    }

    pub fn is_rating_open(&self) -> bool {
        self.rating_target.is_some()
    }

    /// Records a rating for the event the modal was opened for and closes
    /// the modal. Ratings are not sent anywhere yet.
    pub fn submit_rating(&mut self, rating: EventRating) -> Option<(EventItem, EventRating)> {
        let event = self.rating_target.take()?;
        tracing::info!(
            "Submitted rating for {:?}: host preparedness {}, matched description {}, would return {}",
            event.id,
            rating.host_preparedness,
            rating.matched_description,
            rating.would_return
        );
        Some((event, rating))
    }
}

impl Default for EventListState {
    fn default() -> Self {
        Self::new(EventListFilter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventCategory;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    fn event(host: Option<Uuid>) -> EventItem {
        let mut event = EventItem::new(
            "Quiz night".to_string(),
            String::new(),
            Utc::now(),
            "Pub".to_string(),
            20,
            EventCategory::Social,
        )
        .with_id(Uuid::new_v4());
        event.host_id = host;
        event
    }

    fn loaded(events: Vec<EventItem>) -> EventListState {
        let mut state = EventListState::default();
        let token = state.begin_fetch();
        assert!(state.complete_fetch(token, Ok(events)));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = EventListState::default();
        assert!(state.is_loading());
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_fetch_replaces_list_and_clears_loading() {
        let state = loaded(vec![event(None), event(None)]);
        assert!(!state.is_loading());
        assert_eq!(state.events().len(), 2);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = EventListState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        let newer = vec![event(None)];
        assert!(state.complete_fetch(second, Ok(newer.clone())));
        assert!(!state.complete_fetch(first, Ok(vec![event(None), event(None)])));
        assert_eq!(state.events(), newer.as_slice());
    }

    #[test]
    fn test_fetch_error_keeps_cache() {
        let mut state = loaded(vec![event(None)]);
        let token = state.begin_fetch();
        assert!(state.complete_fetch(token, Err(AppError::Network("offline".to_string()))));
        assert!(!state.is_loading());
        assert_eq!(state.events().len(), 1);
        assert_eq!(
            state.load_error(),
            Some(&AppError::Network("offline".to_string()))
        );

        let token = state.begin_fetch();
        assert!(state.complete_fetch(token, Ok(vec![])));
        assert_eq!(state.load_error(), None);
    }

    #[test]
    fn test_missing_record_requests_refetch_and_keeps_cache() {
        let cached = vec![event(None), event(None)];
        let mut state = loaded(cached.clone());

        assert_eq!(state.apply_changed(event(None)), Followup::Refetch);
        assert_eq!(state.events(), cached.as_slice());
    }

    #[test]
    fn test_failed_mutation_leaves_state() {
        let cached = vec![event(None)];
        let mut state = loaded(cached.clone());
        let outcome = MutationOutcome {
            action: "upvoting",
            result: Err(AppError::NotSignedIn),
        };
        assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
        assert_eq!(state.events(), cached.as_slice());
    }

    #[test]
    fn test_visible_events_apply_filter() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let mut state = loaded(vec![event(Some(u1)), event(Some(u2)), event(Some(u1))]);
        assert_eq!(state.visible_events().count(), 3);

        assert_eq!(state.set_filter(EventListFilter::by_host(u1)), Followup::Refetch);
        assert_eq!(state.set_filter(EventListFilter::by_host(u1)), Followup::Nothing);
        assert!(state.visible_events().all(|e| e.host_id == Some(u1)));
        assert_eq!(state.visible_events().count(), 2);
    }

    #[test]
    fn test_rating_flow() {
        let target = event(None);
        let mut state = loaded(vec![target.clone()]);
        assert!(state.submit_rating(EventRating::default()).is_none());

        state.open_rating(target.clone());
        assert!(state.is_rating_open());
        let rating = EventRating::new(4, 3, false);
        assert_eq!(state.submit_rating(rating), Some((target, rating)));
        assert!(!state.is_rating_open());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_failures_are_logged_at_error_level() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::ERROR)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut state = loaded(vec![event(None)]);
            let outcome = MutationOutcome {
                action: "upvoting",
                result: Err(AppError::Network("offline".to_string())),
            };
            assert_eq!(state.settle_mutation(outcome), Followup::Nothing);
            assert_eq!(state.apply_changed(event(None)), Followup::Refetch);

            let token = state.begin_fetch();
            assert!(state.complete_fetch(token, Err(AppError::Database("down".to_string()))));
        });

        let text = logs.text();
        assert!(text.contains("Error upvoting event: Network error: offline"));
        assert!(text.contains("could not be found in the event list"));
        assert!(text.contains("Error fetching event list: Database error: down"));
        assert_eq!(text.matches("ERROR").count(), 3);
    }

    #[test]
    fn test_expansion_by_event_id() {
        let events = vec![event(None), event(None)];
        let (a, b) = (events[0].id.unwrap(), events[1].id.unwrap());
        let mut state = loaded(events);

        state.toggle_expanded(a);
        state.toggle_expanded(b);
        assert!(state.is_expanded(b));
        assert!(!state.is_expanded(a));
        state.toggle_expanded(b);
        assert!(!state.is_expanded(b));
    }
}
