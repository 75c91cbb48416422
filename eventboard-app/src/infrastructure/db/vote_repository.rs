use super::entities::{vote, Vote};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct VoteRepository {
    db: DatabaseConnection,
}

impl VoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, user_id: Uuid, event_id: Uuid) -> Result<Option<vote::Model>, DbErr> {
        Vote::find()
            .filter(vote::Column::UserId.eq(user_id))
            .filter(vote::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
    }

    /// Sum of all vote values cast on an event.
    pub async fn total_for_event(&self, event_id: Uuid) -> Result<i32, DbErr> {
        let votes = Vote::find()
            .filter(vote::Column::EventId.eq(event_id))
            .all(&self.db)
            .await?;
        Ok(votes.iter().map(|v| v.value).sum())
    }

    /// Stores the user's vote on an event; a value of 0 removes it.
    pub async fn set_value(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        value: i32,
    ) -> Result<Option<vote::Model>, DbErr> {
        let existing = self.find(user_id, event_id).await?;

        match (existing, value) {
            (Some(current), 0) => {
                current.delete(&self.db).await?;
                Ok(None)
            }
            (None, 0) => Ok(None),
            (Some(current), value) if current.value == value => Ok(Some(current)),
            (Some(current), value) => {
                let mut active: vote::ActiveModel = current.into();
                active.value = Set(value);
                active.update(&self.db).await.map(Some)
            }
            (None, value) => {
                let active = vote::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    event_id: Set(event_id),
                    value: Set(value),
                    created_at: Set(Some(chrono::Utc::now())),
                };
                active.insert(&self.db).await.map(Some)
            }
        }
    }
}
