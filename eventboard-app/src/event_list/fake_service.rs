use crate::domain::{EventItem, EventListFilter, TicketItem, VoteItem};
use crate::service::EventService;
use eventboard_errors::AppError;
use std::cell::RefCell;
use uuid::Uuid;

/// In-memory event service that records every call it receives.
pub struct FakeEventService {
    user_id: Uuid,
    events: RefCell<Vec<EventItem>>,
    calls: RefCell<Vec<&'static str>>,
    failure: RefCell<Option<AppError>>,
}

impl FakeEventService {
    pub fn new(events: Vec<EventItem>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            events: RefCell::new(events),
            calls: RefCell::new(Vec::new()),
            failure: RefCell::new(None),
        }
    }

    pub fn insert(&self, event: EventItem) {
        self.events.borrow_mut().push(event);
    }

    pub fn fail_next(&self, err: AppError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn mutate(
        &self,
        call: &'static str,
        event: &EventItem,
        change: impl FnOnce(&mut EventItem, Uuid, Uuid),
    ) -> Result<EventItem, AppError> {
        self.record(call)?;
        let id = event.id.ok_or(AppError::EventNotFound)?;
        let mut events = self.events.borrow_mut();
        let stored = events
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or(AppError::EventNotFound)?;
        change(stored, id, self.user_id);
        Ok(stored.clone())
    }

    fn set_vote(event: &mut EventItem, event_id: Uuid, user_id: Uuid, value: i32) {
        let vote = (value != 0).then(|| VoteItem::new(event_id, user_id, value));
        *event = event.clone().with_vote(vote);
    }
}

impl EventService for FakeEventService {
    async fn get_all_event_items(
        &self,
        filter: &EventListFilter,
    ) -> Result<Vec<EventItem>, AppError> {
        self.record("get_all_event_items")?;
        Ok(self
            .events
            .borrow()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn upvote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        self.mutate("upvote", event, |e, id, user| Self::set_vote(e, id, user, 1))
    }

    async fn downvote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        self.mutate("downvote", event, |e, id, user| Self::set_vote(e, id, user, -1))
    }

    async fn novote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        self.mutate("novote", event, |e, id, user| Self::set_vote(e, id, user, 0))
    }

    async fn create_ticket(&self, event: &EventItem) -> Result<EventItem, AppError> {
        self.mutate("create_ticket", event, |e, id, user| {
            *e = e.clone().with_ticket(Some(TicketItem::new(id, user)));
        })
    }

    async fn delete_ticket(&self, event: &EventItem) -> Result<EventItem, AppError> {
        self.mutate("delete_ticket", event, |e, _, _| {
            *e = e.clone().with_ticket(None);
        })
    }
}
