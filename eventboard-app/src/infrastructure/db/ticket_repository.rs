use super::entities::{ticket, Event, Ticket};
use sea_orm::{
    entity::*, query::*, DatabaseConnection, DatabaseTransaction, DbErr, PaginatorTrait,
    TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug)]
pub enum ReserveOutcome {
    Reserved(ticket::Model),
    AlreadyHeld(ticket::Model),
    Full,
    EventMissing,
}

#[derive(Clone)]
pub struct TicketRepository {
    db: DatabaseConnection,
}

impl TicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, user_id: Uuid, event_id: Uuid) -> Result<Option<ticket::Model>, DbErr> {
        Ticket::find()
            .filter(ticket::Column::UserId.eq(user_id))
            .filter(ticket::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
    }

    pub async fn count_for_event(&self, event_id: Uuid) -> Result<u64, DbErr> {
        Ticket::find()
            .filter(ticket::Column::EventId.eq(event_id))
            .count(&self.db)
            .await
    }

    /// Issues a ticket if the event still has room. The event row stays
    /// locked until the ticket is written so concurrent reservations cannot
    /// overbook it.
    pub async fn reserve(&self, user_id: Uuid, event_id: Uuid) -> Result<ReserveOutcome, DbErr> {
        let txn = self.db.begin().await?;
        let outcome = Self::reserve_in(&txn, user_id, event_id).await?;
        txn.commit().await?;
        Ok(outcome)
    }

    async fn reserve_in(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<ReserveOutcome, DbErr> {
        let Some(event) = Event::find_by_id(event_id).lock_exclusive().one(txn).await? else {
            return Ok(ReserveOutcome::EventMissing);
        };

        let held = Ticket::find()
            .filter(ticket::Column::UserId.eq(user_id))
            .filter(ticket::Column::EventId.eq(event_id))
            .one(txn)
            .await?;
        if let Some(ticket) = held {
            return Ok(ReserveOutcome::AlreadyHeld(ticket));
        }

        let issued = Ticket::find()
            .filter(ticket::Column::EventId.eq(event.id))
            .count(txn)
            .await?;
        if issued >= u64::try_from(event.total_capacity).unwrap_or(0) {
            return Ok(ReserveOutcome::Full);
        }

        let active = ticket::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            event_id: Set(event.id),
            is_attending: Set(true),
            created_at: Set(Some(chrono::Utc::now())),
        };
        active.insert(txn).await.map(ReserveOutcome::Reserved)
    }

    pub async fn release(&self, user_id: Uuid, event_id: Uuid) -> Result<(), DbErr> {
        Ticket::delete_many()
            .filter(ticket::Column::UserId.eq(user_id))
            .filter(ticket::Column::EventId.eq(event_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
