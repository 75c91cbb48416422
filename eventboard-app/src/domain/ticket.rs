use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketItem {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub is_attending: bool,
}

impl TicketItem {
    pub fn new(event_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            is_attending: true,
        }
    }
}
