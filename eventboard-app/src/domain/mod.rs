mod event;
mod filter;
mod rating;
mod ticket;
mod user;
mod vote;

pub use event::{EventCategory, EventItem};
pub use filter::EventListFilter;
pub use rating::{EventRating, RATING_MAX, RATING_MIN};
pub use ticket::TicketItem;
pub use user::UserItem;
pub use vote::{VoteItem, VoteState};
