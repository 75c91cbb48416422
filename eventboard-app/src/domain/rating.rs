use serde::{Deserialize, Serialize};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Post-attendance feedback on a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRating {
    pub host_preparedness: u8,
    pub matched_description: u8,
    pub would_return: bool,
}

impl EventRating {
    /// Builds a rating, clamping both scores into `RATING_MIN..=RATING_MAX`.
    pub fn new(host_preparedness: u8, matched_description: u8, would_return: bool) -> Self {
        Self {
            host_preparedness: host_preparedness.clamp(RATING_MIN, RATING_MAX),
            matched_description: matched_description.clamp(RATING_MIN, RATING_MAX),
            would_return,
        }
    }
}

impl Default for EventRating {
    fn default() -> Self {
        Self::new(RATING_MAX, RATING_MAX, true)
    }
}
