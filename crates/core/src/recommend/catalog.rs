use std::collections::BTreeSet;

use crate::domain::itinerary::{ItineraryId, ItineraryRecord};
use crate::errors::DomainError;
use crate::recommend::filter::FilterCriteria;
use crate::recommend::fixtures;

/// Read-only collection of itineraries, in load order.
#[derive(Clone, Debug, Default)]
pub struct ItineraryCatalog {
    records: Vec<ItineraryRecord>,
}

impl ItineraryCatalog {
    pub fn new(records: Vec<ItineraryRecord>) -> Result<Self, DomainError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DomainError::DuplicateItinerary(record.id));
            }
            if record.activities.is_empty() {
                return Err(DomainError::EmptyActivities(record.id));
            }
        }

        Ok(Self { records })
    }

    /// The 25-record catalog used by the recommendations persona.
    pub fn sample() -> Self {
        Self { records: fixtures::sample_records() }
    }

    pub fn records(&self) -> &[ItineraryRecord] {
        &self.records
    }

    pub fn find(&self, id: ItineraryId) -> Option<&ItineraryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&ItineraryRecord> {
        self.records.iter().filter(|record| criteria.matches(record)).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
