pub mod event;
pub mod ticket;
pub mod user;
pub mod vote;

pub use event::Entity as Event;
pub use ticket::Entity as Ticket;
pub use user::Entity as User;
pub use vote::Entity as Vote;
