use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteItem {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    /// Positive is an upvote, negative a downvote, zero no vote.
    pub value: i32,
}

impl VoteItem {
    pub fn new(event_id: Uuid, user_id: Uuid, value: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            value,
        }
    }
}

/// The current user's vote on one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoteState {
    #[default]
    NoVote,
    Upvoted,
    Downvoted,
}

impl VoteState {
    pub fn of(vote: Option<&VoteItem>) -> Self {
        match vote.map(|v| v.value) {
            Some(value) if value >= 1 => Self::Upvoted,
            Some(value) if value <= -1 => Self::Downvoted,
            _ => Self::NoVote,
        }
    }

    /// Signed value as stored by the vote service.
    pub fn value(&self) -> i32 {
        match self {
            Self::NoVote => 0,
            Self::Upvoted => 1,
            Self::Downvoted => -1,
        }
    }
}
