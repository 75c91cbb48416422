use super::EventItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Narrows the visible event set. An empty filter lets every event through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventListFilter {
    pub host_user_id: Option<Uuid>,
}

impl EventListFilter {
    pub fn by_host(host_user_id: Uuid) -> Self {
        Self {
            host_user_id: Some(host_user_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.host_user_id.is_none()
    }

    pub fn matches(&self, event: &EventItem) -> bool {
        match self.host_user_id {
            None => true,
            Some(host) => event.host_id == Some(host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventCategory;

    fn hosted_by(host: Uuid) -> EventItem {
        EventItem::new(
            "Picnic".to_string(),
            String::new(),
            chrono::Utc::now(),
            "Park".to_string(),
            10,
            EventCategory::Food,
        )
        .with_host_id(host)
    }

    #[test]
    fn test_host_filter() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let filter = EventListFilter::by_host(u1);

        assert!(filter.matches(&hosted_by(u1)));
        assert!(!filter.matches(&hosted_by(u2)));
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = EventListFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&hosted_by(Uuid::new_v4())));

        let mut hostless = hosted_by(Uuid::new_v4());
        hostless.host_id = None;
        assert!(filter.matches(&hostless));
        assert!(!EventListFilter::by_host(Uuid::new_v4()).matches(&hostless));
    }
}
