//! In-memory vehicle → hour entries repository.
//!
//! Pure state: persistence is driven by `HourBook`, which rewrites the whole
//! collection after every successful mutation.

use crate::core::validate::validate_hours;
use crate::errors::{AppError, AppResult};
use crate::models::ids::IdGen;
use crate::models::{EntryId, HourEntry, Identifier, VehicleId, VehicleRecord};
use crate::storage::{StoredHourEntry, StoredVehicle};

/// What `delete_record` removed.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    EntryRemoved { vehicle: VehicleId },
    /// The entry was the vehicle's last one, so the vehicle went too.
    VehicleRemoved { vehicle: VehicleId, identifier: Identifier },
}

#[derive(Debug, Clone, Default)]
pub struct RecordRepository {
    vehicles: Vec<VehicleRecord>,
    vehicle_ids: IdGen,
    entry_ids: IdGen,
}

impl RecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the repository from loaded documents.
    ///
    /// Vehicles sharing an identifier are merged into the first one, keeping
    /// entry order. Returns the repository and the number of merges.
    pub fn from_stored(stored: Vec<StoredVehicle>) -> (Self, usize) {
        let mut repo = Self::new();
        let mut merged = 0;

        for sv in stored {
            let identifier = Identifier::new_unchecked(sv.identifier);
            let idx = match repo.position_of(identifier.as_str()) {
                Some(idx) => {
                    merged += 1;
                    idx
                }
                None => repo.push_vehicle(identifier),
            };
            for r in sv.records {
                let entry = HourEntry {
                    id: EntryId(repo.entry_ids.next()),
                    date: r.date,
                    hours: r.hours,
                };
                repo.vehicles[idx].records.push(entry);
            }
        }

        (repo, merged)
    }

    pub fn to_stored(&self) -> Vec<StoredVehicle> {
        self.vehicles
            .iter()
            .map(|v| StoredVehicle {
                identifier: v.identifier.to_string(),
                records: v
                    .records
                    .iter()
                    .map(|r| StoredHourEntry {
                        date: r.date.clone(),
                        hours: r.hours,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<&VehicleRecord> {
        self.vehicles
            .iter()
            .find(|v| v.identifier.as_str() == identifier)
    }

    /// Owning vehicle of an entry, plus the entry itself.
    pub fn entry(&self, id: EntryId) -> Option<(&VehicleRecord, &HourEntry)> {
        self.vehicles
            .iter()
            .find_map(|v| v.entry(id).map(|e| (v, e)))
    }

    /// Append an entry, creating the vehicle on first use.
    ///
    /// `hours` is expected to be validated by the caller. Never
    /// deduplicates: identical calls append identical entries.
    pub fn add_record(
        &mut self,
        identifier: Identifier,
        hours: f64,
        date: &str,
    ) -> (VehicleId, EntryId) {
        let idx = match self.position_of(identifier.as_str()) {
            Some(idx) => idx,
            None => self.push_vehicle(identifier),
        };

        let entry_id = EntryId(self.entry_ids.next());
        let vehicle = &mut self.vehicles[idx];
        vehicle.records.push(HourEntry {
            id: entry_id,
            date: date.to_string(),
            hours,
        });

        (vehicle.id, entry_id)
    }

    pub fn update_hours(&mut self, entry: EntryId, new_hours: f64) -> AppResult<()> {
        let new_hours = validate_hours(new_hours)?;

        let record = self
            .vehicles
            .iter_mut()
            .flat_map(|v| v.records.iter_mut())
            .find(|r| r.id == entry)
            .ok_or_else(|| AppError::NotFound(format!("entry {}", entry)))?;

        record.hours = new_hours;
        Ok(())
    }

    /// Rename a vehicle. Fails with `Conflict` when another vehicle already
    /// uses `new_identifier`; renaming to the current identifier is a no-op.
    pub fn update_identifier(
        &mut self,
        vehicle: VehicleId,
        new_identifier: Identifier,
    ) -> AppResult<()> {
        let idx = self
            .index_of(vehicle)
            .ok_or_else(|| AppError::NotFound(format!("vehicle {}", vehicle)))?;

        if let Some(owner) = self.find_by_identifier(new_identifier.as_str()) {
            if owner.id != vehicle {
                return Err(AppError::Conflict(new_identifier.to_string()));
            }
            return Ok(());
        }

        self.vehicles[idx].identifier = new_identifier;
        Ok(())
    }

    pub fn delete_record(&mut self, entry: EntryId) -> AppResult<DeleteOutcome> {
        let (v_idx, r_idx) = self
            .vehicles
            .iter()
            .enumerate()
            .find_map(|(vi, v)| {
                v.records
                    .iter()
                    .position(|r| r.id == entry)
                    .map(|ri| (vi, ri))
            })
            .ok_or_else(|| AppError::NotFound(format!("entry {}", entry)))?;

        self.vehicles[v_idx].records.remove(r_idx);

        let vehicle = self.vehicles[v_idx].id;
        if self.vehicles[v_idx].records.is_empty() {
            let removed = self.vehicles.remove(v_idx);
            return Ok(DeleteOutcome::VehicleRemoved {
                vehicle,
                identifier: removed.identifier,
            });
        }

        Ok(DeleteOutcome::EntryRemoved { vehicle })
    }

    pub fn total_hours_for(&self, vehicle: VehicleId) -> AppResult<f64> {
        self.vehicle(vehicle)
            .map(VehicleRecord::total_hours)
            .ok_or_else(|| AppError::NotFound(format!("vehicle {}", vehicle)))
    }

    /// Sum over every stored entry of every vehicle, regardless of date.
    pub fn total_hours_all(&self) -> f64 {
        self.vehicles.iter().map(VehicleRecord::total_hours).sum()
    }

    /// Sum of the entries logged under `date`.
    pub fn total_hours_on(&self, date: &str) -> f64 {
        self.vehicles.iter().map(|v| v.hours_on(date)).sum()
    }

    fn position_of(&self, identifier: &str) -> Option<usize> {
        self.vehicles
            .iter()
            .position(|v| v.identifier.as_str() == identifier)
    }

    fn index_of(&self, id: VehicleId) -> Option<usize> {
        self.vehicles.iter().position(|v| v.id == id)
    }

    fn push_vehicle(&mut self, identifier: Identifier) -> usize {
        self.vehicles.push(VehicleRecord {
            id: VehicleId(self.vehicle_ids.next()),
            identifier,
            records: Vec::new(),
        });
        self.vehicles.len() - 1
    }
}
