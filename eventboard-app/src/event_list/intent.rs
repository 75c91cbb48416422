use crate::domain::{EventItem, VoteState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

/// The single service call a vote click turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteIntent {
    Upvote,
    Downvote,
    Clear,
}

impl VoteIntent {
    /// Clicking the arrow that is already active clears the vote; any other
    /// click sets the vote in the clicked direction.
    pub fn for_click(current: VoteState, direction: VoteDirection) -> Self {
        match (direction, current) {
            (VoteDirection::Up, VoteState::Upvoted) => Self::Clear,
            (VoteDirection::Up, _) => Self::Upvote,
            (VoteDirection::Down, VoteState::Downvoted) => Self::Clear,
            (VoteDirection::Down, _) => Self::Downvote,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Upvote => "upvoting",
            Self::Downvote => "downvoting",
            Self::Clear => "clearing vote for",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceIntent {
    Reserve,
    Release,
}

impl AttendanceIntent {
    /// `None` when the user holds no ticket and the event is full.
    pub fn for_click(event: &EventItem) -> Option<Self> {
        if event.ticket.is_some() {
            Some(Self::Release)
        } else if event.remaining_capacity() > 0 {
            Some(Self::Reserve)
        } else {
            None
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Reserve => "creating ticket for",
            Self::Release => "deleting ticket for",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventCategory, TicketItem};
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_upvote_transitions() {
        use VoteState::*;
        assert_eq!(VoteIntent::for_click(NoVote, VoteDirection::Up), VoteIntent::Upvote);
        assert_eq!(VoteIntent::for_click(Downvoted, VoteDirection::Up), VoteIntent::Upvote);
        assert_eq!(VoteIntent::for_click(Upvoted, VoteDirection::Up), VoteIntent::Clear);
    }

    #[test]
    fn test_downvote_transitions() {
        use VoteState::*;
        assert_eq!(VoteIntent::for_click(NoVote, VoteDirection::Down), VoteIntent::Downvote);
        assert_eq!(VoteIntent::for_click(Upvoted, VoteDirection::Down), VoteIntent::Downvote);
        assert_eq!(VoteIntent::for_click(Downvoted, VoteDirection::Down), VoteIntent::Clear);
    }

    fn event(total: i32, current: Option<i32>) -> EventItem {
        let mut event = EventItem::new(
            "Run club".to_string(),
            String::new(),
            Utc::now(),
            "Track".to_string(),
            total,
            EventCategory::Sports,
        )
        .with_id(Uuid::new_v4());
        event.current_capacity = current;
        event
    }

    #[test]
    fn test_attendance_reserve_when_seats_remain() {
        assert_eq!(AttendanceIntent::for_click(&event(5, Some(4))), Some(AttendanceIntent::Reserve));
        assert_eq!(AttendanceIntent::for_click(&event(5, None)), Some(AttendanceIntent::Reserve));
    }

    #[test]
    fn test_attendance_noop_when_full_without_ticket() {
        assert_eq!(AttendanceIntent::for_click(&event(5, Some(5))), None);
        assert_eq!(AttendanceIntent::for_click(&event(0, None)), None);
    }

    #[test]
    fn test_attendance_release_when_ticket_held() {
        let full = event(5, Some(5));
        let id = full.id.unwrap();
        let held = full.with_ticket(Some(TicketItem::new(id, Uuid::new_v4())));
        assert_eq!(AttendanceIntent::for_click(&held), Some(AttendanceIntent::Release));
    }
}
