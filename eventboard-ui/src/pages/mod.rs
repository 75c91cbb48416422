pub mod events;
mod filter;
mod logout;

pub use events::{
    get_current_user, CreateTicketFn, DeleteTicketFn, DownvoteFn, EventsPage, GetAllEventItemsFn,
    GetCurrentUserFn, NovoteFn, UpvoteFn,
};
pub use filter::FilterPage;
pub use logout::{perform_log_out, LogOutFn, LogoutPage};
