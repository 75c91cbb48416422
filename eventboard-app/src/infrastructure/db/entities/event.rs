use crate::domain::{EventCategory, EventItem};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub time: DateTimeUtc,
    pub location: String,
    pub total_capacity: i32,
    pub category: i16,
    pub host_id: Option<Uuid>,
    pub review_matched_desc: Option<f32>,
    pub review_host_prep: Option<f32>,
    pub review_would_return: Option<f32>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HostId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Host,
    #[sea_orm(has_many = "super::vote::Entity")]
    Votes,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Votes.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EventItem {
    /// The shared part of the record; per-user overlays are filled in by the
    /// repository.
    fn from(m: Model) -> Self {
        let mut item = EventItem::new(
            m.name,
            m.description,
            m.time,
            m.location,
            m.total_capacity,
            EventCategory::from_code(m.category),
        )
        .with_id(m.id);
        item.host_id = m.host_id;
        item.review_matched_desc = m.review_matched_desc;
        item.review_host_prep = m.review_host_prep;
        item.review_would_return = m.review_would_return;
        item
    }
}
