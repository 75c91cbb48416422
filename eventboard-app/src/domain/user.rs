use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserItem {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl UserItem {
    pub fn new(first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Name shown in the event list; unknown users render as an empty string.
    pub fn display_name_of(user: Option<&UserItem>) -> String {
        user.map(UserItem::display_name).unwrap_or_default()
    }
}
