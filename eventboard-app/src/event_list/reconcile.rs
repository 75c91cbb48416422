use crate::domain::EventItem;

#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    /// The list with the matching entry replaced in place.
    Patched(Vec<EventItem>),
    /// No cached entry shares the updated record's id.
    Missing,
}

/// Replaces the cached entry that shares `updated`'s id, keeping every other
/// entry and the list order intact. Records without an id never match.
pub fn reconcile(list: &[EventItem], updated: EventItem) -> Reconciled {
    let Some(id) = updated.id else {
        return Reconciled::Missing;
    };

    match list.iter().position(|event| event.id == Some(id)) {
        Some(index) => {
            let mut patched = list.to_vec();
            patched[index] = updated;
            Reconciled::Patched(patched)
        }
        None => Reconciled::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventCategory, TicketItem};
    use chrono::Utc;
    use uuid::Uuid;

    fn event(name: &str) -> EventItem {
        EventItem::new(
            name.to_string(),
            String::new(),
            Utc::now(),
            "Hall".to_string(),
            5,
            EventCategory::Other,
        )
        .with_id(Uuid::new_v4())
    }

    #[test]
    fn test_replaces_only_the_matching_entry() {
        let list = vec![event("a"), event("b"), event("c")];
        let mut updated = list[1].clone();
        updated.interest_rating = Some(4);

        match reconcile(&list, updated.clone()) {
            Reconciled::Patched(patched) => {
                assert_eq!(patched.len(), 3);
                assert_eq!(patched[0], list[0]);
                assert_eq!(patched[1], updated);
                assert_eq!(patched[2], list[2]);
            }
            Reconciled::Missing => panic!("expected a patch"),
        }
    }

    #[test]
    fn test_patch_keeps_first_and_last_positions() {
        let list = vec![event("a"), event("b")];
        let first = list[0].clone().with_ticket(Some(TicketItem::new(
            list[0].id.unwrap(),
            Uuid::new_v4(),
        )));
        let Reconciled::Patched(patched) = reconcile(&list, first.clone()) else {
            panic!("expected a patch");
        };
        assert_eq!(patched, vec![first, list[1].clone()]);

        let last = list[1].clone().with_current_capacity(2);
        let Reconciled::Patched(patched) = reconcile(&list, last.clone()) else {
            panic!("expected a patch");
        };
        assert_eq!(patched, vec![list[0].clone(), last]);
    }

    #[test]
    fn test_unknown_id_is_missing() {
        let list = vec![event("a"), event("b")];
        assert_eq!(reconcile(&list, event("z")), Reconciled::Missing);
        assert_eq!(reconcile(&[], event("z")), Reconciled::Missing);
    }

    #[test]
    fn test_record_without_id_is_missing() {
        let mut idless = event("a");
        idless.id = None;
        let mut also_idless = event("b");
        also_idless.id = None;
        assert_eq!(reconcile(&[also_idless], idless), Reconciled::Missing);
    }
}
