//! Event list presentation logic, free of any UI framework.

pub mod actions;
mod expansion;
mod intent;
mod reconcile;
mod state;

#[cfg(test)]
mod fake_service;

pub use actions::MutationOutcome;
pub use expansion::Expansion;
pub use intent::{AttendanceIntent, VoteDirection, VoteIntent};
pub use reconcile::{reconcile, Reconciled};
pub use state::{EventListState, FetchToken, Followup};
