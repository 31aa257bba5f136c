use std::collections::{HashMap, HashSet};

use crate::models::PairingRecord;

/// Event ids already paired with each volunteer
///
/// Pairing status is ignored: pending, confirmed, and cancelled records all
/// take the pair out of future matching.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    by_volunteer: HashMap<String, HashSet<String>>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build exclusion sets from any mix of volunteers' pairing records
    pub fn from_pairings<'a, I>(pairings: I) -> Self
    where
        I: IntoIterator<Item = &'a PairingRecord>,
    {
        let mut exclusions = Self::new();
        for pairing in pairings {
            exclusions.insert(&pairing.volunteer_id, &pairing.event_id);
        }
        exclusions
    }

    pub fn insert(&mut self, volunteer_id: &str, event_id: &str) {
        self.by_volunteer
            .entry(volunteer_id.to_string())
            .or_default()
            .insert(event_id.to_string());
    }

    /// A pair is eligible iff no pairing record exists for it
    #[inline]
    pub fn is_eligible(&self, volunteer_id: &str, event_id: &str) -> bool {
        self.by_volunteer
            .get(volunteer_id)
            .map_or(true, |events| !events.contains(event_id))
    }

    /// Events already paired with a volunteer
    pub fn paired_events(&self, volunteer_id: &str) -> Option<&HashSet<String>> {
        self.by_volunteer.get(volunteer_id)
    }

    pub fn len(&self) -> usize {
        self.by_volunteer.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PairingStatus;

    fn pairing(volunteer_id: &str, event_id: &str, status: PairingStatus) -> PairingRecord {
        PairingRecord {
            volunteer_id: volunteer_id.to_string(),
            event_id: event_id.to_string(),
            status,
        }
    }

    #[test]
    fn test_every_status_excludes() {
        let records = vec![
            pairing("v1", "e1", PairingStatus::Pending),
            pairing("v1", "e2", PairingStatus::Confirmed),
            pairing("v1", "e3", PairingStatus::Cancelled),
        ];
        let exclusions = Exclusions::from_pairings(&records);

        assert!(!exclusions.is_eligible("v1", "e1"));
        assert!(!exclusions.is_eligible("v1", "e2"));
        assert!(!exclusions.is_eligible("v1", "e3"));
        assert!(exclusions.is_eligible("v1", "e4"));
    }

    #[test]
    fn test_exclusions_are_per_volunteer() {
        let records = vec![pairing("v1", "e1", PairingStatus::Confirmed)];
        let exclusions = Exclusions::from_pairings(&records);

        assert!(!exclusions.is_eligible("v1", "e1"));
        assert!(exclusions.is_eligible("v2", "e1"));
        assert!(exclusions.paired_events("v2").is_none());
    }

    #[test]
    fn test_duplicate_records_collapse() {
        let records = vec![
            pairing("v1", "e1", PairingStatus::Pending),
            pairing("v1", "e1", PairingStatus::Cancelled),
        ];
        let exclusions = Exclusions::from_pairings(&records);

        assert_eq!(exclusions.len(), 1);
        assert!(Exclusions::new().is_empty());
    }
}
