mod error_display;
mod event_card;
mod event_list;
mod loading_spinner;
mod rate_event_modal;

pub use error_display::ErrorDisplay;
pub use event_card::EventCard;
pub use event_list::EventList;
pub use loading_spinner::LoadingSpinner;
pub use rate_event_modal::RateEventModal;
