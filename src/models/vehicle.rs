use super::identifier::Identifier;
use super::ids::{EntryId, VehicleId};

/// One dated usage record contributing hours to a vehicle's total.
#[derive(Debug, Clone, PartialEq)]
pub struct HourEntry {
    pub id: EntryId,
    pub date: String, // opaque locale label, never parsed back
    pub hours: f64,   // > 0, full precision kept
}

/// All hour entries logged for one vehicle, in order of entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub identifier: Identifier,
    pub records: Vec<HourEntry>,
}

impl VehicleRecord {
    pub fn total_hours(&self) -> f64 {
        self.records.iter().map(|r| r.hours).sum()
    }

    /// Hours logged under the given date label.
    pub fn hours_on(&self, date: &str) -> f64 {
        self.records
            .iter()
            .filter(|r| r.date == date)
            .map(|r| r.hours)
            .sum()
    }

    pub fn entry(&self, id: EntryId) -> Option<&HourEntry> {
        self.records.iter().find(|r| r.id == id)
    }

    /// 1-based position of an entry, as shown by `list`.
    pub fn entry_at(&self, position: usize) -> Option<&HourEntry> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }
}
