use super::{TicketItem, UserItem, VoteItem, VoteState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Social,
    Sports,
    Education,
    Music,
    Food,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        Self::Social,
        Self::Sports,
        Self::Education,
        Self::Music,
        Self::Food,
        Self::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Social => "Social",
            Self::Sports => "Sports",
            Self::Education => "Education",
            Self::Music => "Music",
            Self::Food => "Food & Drink",
            Self::Other => "Other",
        }
    }

    /// Stable code used for the `events.category` column.
    pub fn code(&self) -> i16 {
        match self {
            Self::Social => 0,
            Self::Sports => 1,
            Self::Education => 2,
            Self::Music => 3,
            Self::Food => 4,
            Self::Other => 5,
        }
    }

    pub fn from_code(code: i16) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .unwrap_or(Self::Other)
    }
}

/// An event as seen by the current user: the shared record plus the
/// user-specific overlays (vote, ticket) and aggregated review scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub name: String,
    pub description: String,
    pub time: DateTime<Utc>,
    pub location: String,
    pub total_capacity: i32,
    pub category: EventCategory,
    pub host_id: Option<Uuid>,
    pub id: Option<Uuid>,
    pub interest_rating: Option<i32>,
    pub current_capacity: Option<i32>,
    pub host: Option<UserItem>,
    pub ticket_id: Option<Uuid>,
    pub ticket: Option<TicketItem>,
    pub vote_id: Option<Uuid>,
    pub vote: Option<VoteItem>,
    pub review_matched_desc: Option<f32>,
    pub review_host_prep: Option<f32>,
    pub review_would_return: Option<f32>,
}

impl EventItem {
    pub fn new(
        name: String,
        description: String,
        time: DateTime<Utc>,
        location: String,
        total_capacity: i32,
        category: EventCategory,
    ) -> Self {
        Self {
            name,
            description,
            time,
            location,
            total_capacity,
            category,
            host_id: None,
            id: None,
            interest_rating: None,
            current_capacity: None,
            host: None,
            ticket_id: None,
            ticket: None,
            vote_id: None,
            vote: None,
            review_matched_desc: None,
            review_host_prep: None,
            review_would_return: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_host_id(mut self, host_id: Uuid) -> Self {
        self.host_id = Some(host_id);
        self
    }

    pub fn with_current_capacity(mut self, current_capacity: i32) -> Self {
        self.current_capacity = Some(current_capacity);
        self
    }

    pub fn with_vote(mut self, vote: Option<VoteItem>) -> Self {
        self.vote_id = vote.as_ref().map(|v| v.id);
        self.vote = vote;
        self
    }

    pub fn with_ticket(mut self, ticket: Option<TicketItem>) -> Self {
        self.ticket_id = ticket.as_ref().map(|t| t.id);
        self.ticket = ticket;
        self
    }

    pub fn vote_state(&self) -> VoteState {
        VoteState::of(self.vote.as_ref())
    }

    /// Seats still available. A missing `current_capacity` counts as no
    /// tickets issued.
    pub fn remaining_capacity(&self) -> i32 {
        self.total_capacity - self.current_capacity.unwrap_or(0)
    }

    pub fn is_attended(&self) -> bool {
        self.ticket.is_some()
    }

    pub fn host_name(&self) -> String {
        UserItem::display_name_of(self.host.as_ref())
    }

    pub fn is_hosted_by(&self, user_id: Option<Uuid>) -> bool {
        matches!((self.host_id, user_id), (Some(host), Some(user)) if host == user)
    }

    pub fn has_reviews(&self) -> bool {
        self.review_matched_desc.is_some()
            || self.review_host_prep.is_some()
            || self.review_would_return.is_some()
    }
}
