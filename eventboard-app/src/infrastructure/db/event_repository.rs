use super::entities::{event, Event};
use super::{TicketRepository, UserRepository, VoteRepository};
use crate::domain::{EventItem, EventListFilter, TicketItem, UserItem, VoteItem};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct EventRepository {
    db: DatabaseConnection,
    users: UserRepository,
    votes: VoteRepository,
    tickets: TicketRepository,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            votes: VoteRepository::new(db.clone()),
            tickets: TicketRepository::new(db.clone()),
            db,
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<event::Model>, DbErr> {
        Event::find_by_id(id).one(&self.db).await
    }

    pub async fn list(&self, filter: &EventListFilter) -> Result<Vec<event::Model>, DbErr> {
        let mut query = Event::find()
            .order_by_asc(event::Column::Time)
            .order_by_asc(event::Column::Id);

        if let Some(host) = filter.host_user_id {
            query = query.filter(event::Column::HostId.eq(host));
        }

        query.all(&self.db).await
    }

    pub async fn list_with_details(
        &self,
        filter: &EventListFilter,
        current_user_id: Option<Uuid>,
    ) -> Result<Vec<EventItem>, DbErr> {
        let models = self.list(filter).await?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.with_details(model, current_user_id).await?);
        }
        Ok(results)
    }

    pub async fn find_with_details(
        &self,
        id: Uuid,
        current_user_id: Option<Uuid>,
    ) -> Result<Option<EventItem>, DbErr> {
        match self.find_by_id(id).await? {
            Some(model) => self.with_details(model, current_user_id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Fills in the host, the aggregates and the current user's vote and ticket.
    async fn with_details(
        &self,
        model: event::Model,
        current_user_id: Option<Uuid>,
    ) -> Result<EventItem, DbErr> {
        let id = model.id;

        let host: Option<UserItem> = match model.host_id {
            Some(host_id) => self.users.find_by_id(host_id).await?.map(Into::into),
            None => None,
        };

        let interest_rating = self.votes.total_for_event(id).await?;
        let issued = self.tickets.count_for_event(id).await?;

        let (vote, ticket): (Option<VoteItem>, Option<TicketItem>) = match current_user_id {
            Some(user_id) => (
                self.votes.find(user_id, id).await?.map(Into::into),
                self.tickets.find(user_id, id).await?.map(Into::into),
            ),
            None => (None, None),
        };

        let mut item = EventItem::from(model)
            .with_current_capacity(i32::try_from(issued).unwrap_or(i32::MAX))
            .with_vote(vote)
            .with_ticket(ticket);
        item.interest_rating = Some(interest_rating);
        item.host = host;
        Ok(item)
    }
}
