//! `HourBook`: the single owner of the vehicle collection, the saved-day
//! collection and the store they are persisted to.
//!
//! Every mutating operation follows the same sequence:
//! validate → apply to a working copy → rewrite the collection in the store
//! → swap the working copy in. A failed validation or a failed write leaves
//! both memory and store untouched.

use crate::config::Config;
use crate::core::aggregator::{DailyAggregator, SaveOutcome, SkipReason, TotalScope};
use crate::core::clock::Clock;
use crate::core::notify::{Notice, NoticeLevel, Notifier};
use crate::core::repository::{DeleteOutcome, RecordRepository};
use crate::core::validate::{validate, validate_hours};
use crate::errors::{AppError, AppResult};
use crate::models::{
    EntryId, Identifier, IdentifierKind, SavedDay, SavedDayId, VehicleId, VehicleRecord,
};
use crate::storage::{
    CAR_DATABASE_KEY, LoadReport, PersistenceStore, SAVED_HOURS_KEY, StorageBackend,
    StoredSavedDay, StoredVehicle,
};
use crate::utils::formatting::format_hours;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookSettings {
    pub identifier_kind: IdentifierKind,
    pub total_scope: TotalScope,
    pub guard_manual_save: bool,
}

impl From<&Config> for BookSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            identifier_kind: cfg.identifier_kind,
            total_scope: cfg.total_scope,
            guard_manual_save: cfg.guard_manual_save,
        }
    }
}

pub struct HourBook<B: StorageBackend> {
    store: PersistenceStore<B>,
    repo: RecordRepository,
    aggregator: DailyAggregator,
    settings: BookSettings,
    clock: Box<dyn Clock>,
    notifier: Box<dyn Notifier>,
    load_reports: Vec<LoadReport>,
}

impl<B: StorageBackend> HourBook<B> {
    /// Load both collections from `backend`. Never fails: unreadable data
    /// yields empty collections, described by `load_reports()`.
    pub fn open(
        backend: B,
        settings: BookSettings,
        clock: Box<dyn Clock>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let store = PersistenceStore::new(backend);

        let (vehicles, mut vehicles_report) =
            store.load_with_report::<StoredVehicle>(CAR_DATABASE_KEY);
        let (saved, saved_report) = store.load_with_report::<StoredSavedDay>(SAVED_HOURS_KEY);

        let (repo, merged) = RecordRepository::from_stored(vehicles);
        vehicles_report.merged = merged;

        let aggregator =
            DailyAggregator::from_stored(saved, settings.total_scope, settings.guard_manual_save);

        let book = Self {
            store,
            repo,
            aggregator,
            settings,
            clock,
            notifier,
            load_reports: vec![vehicles_report, saved_report],
        };

        for report in book.load_reports.iter().filter(|r| !r.is_clean()) {
            book.notify(NoticeLevel::Warning, "load", report.describe());
        }

        book
    }

    // ------------------------------------------------
    // Accessors
    // ------------------------------------------------

    pub fn settings(&self) -> BookSettings {
        self.settings
    }

    pub fn load_reports(&self) -> &[LoadReport] {
        &self.load_reports
    }

    pub fn repository(&self) -> &RecordRepository {
        &self.repo
    }

    pub fn aggregator(&self) -> &DailyAggregator {
        &self.aggregator
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        self.repo.vehicles()
    }

    pub fn saved_days(&self) -> &[SavedDay] {
        self.aggregator.saved_days()
    }

    pub fn store(&self) -> &PersistenceStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PersistenceStore<B> {
        &mut self.store
    }

    pub fn into_backend(self) -> B {
        self.store.into_backend()
    }

    pub fn today(&self) -> String {
        self.clock.today()
    }

    pub fn validate(&self, raw: &str) -> AppResult<Identifier> {
        validate(self.settings.identifier_kind, raw)
    }

    pub fn find_vehicle(&self, raw_identifier: &str) -> AppResult<&VehicleRecord> {
        let key = raw_identifier.trim();
        self.repo
            .find_by_identifier(key)
            .ok_or_else(|| AppError::NotFound(format!("vehicle '{}'", key)))
    }

    // ------------------------------------------------
    // Record operations
    // ------------------------------------------------

    /// Log `hours` for a vehicle. `date` defaults to today's label.
    pub fn add_record(
        &mut self,
        raw_identifier: &str,
        hours: f64,
        date: Option<&str>,
    ) -> AppResult<(VehicleId, EntryId)> {
        let result = self.try_add_record(raw_identifier, hours, date);
        self.report("add", result, |book, (vehicle, _)| {
            let name = book.identifier_of(*vehicle);
            format!("{} h logged for {}.", format_hours(hours), name)
        })
    }

    fn try_add_record(
        &mut self,
        raw_identifier: &str,
        hours: f64,
        date: Option<&str>,
    ) -> AppResult<(VehicleId, EntryId)> {
        let identifier = self.validate(raw_identifier)?;
        let hours = validate_hours(hours)?;
        let date = match date.map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => self.clock.today(),
        };

        let mut next = self.repo.clone();
        let ids = next.add_record(identifier, hours, &date);
        self.commit_vehicles(next)?;
        Ok(ids)
    }

    pub fn update_hours(&mut self, entry: EntryId, new_hours: f64) -> AppResult<()> {
        let result = self.try_update_hours(entry, new_hours);
        self.report("edit", result, |_, _| {
            format!("Hours updated to {} h.", format_hours(new_hours))
        })
    }

    fn try_update_hours(&mut self, entry: EntryId, new_hours: f64) -> AppResult<()> {
        let mut next = self.repo.clone();
        next.update_hours(entry, new_hours)?;
        self.commit_vehicles(next)
    }

    pub fn update_identifier(
        &mut self,
        vehicle: VehicleId,
        raw_identifier: &str,
    ) -> AppResult<()> {
        let result = self.try_update_identifier(vehicle, raw_identifier);
        self.report("rename", result, |book, _| {
            format!("Identifier updated to {}.", book.identifier_of(vehicle))
        })
    }

    fn try_update_identifier(
        &mut self,
        vehicle: VehicleId,
        raw_identifier: &str,
    ) -> AppResult<()> {
        let identifier = self.validate(raw_identifier)?;
        let mut next = self.repo.clone();
        next.update_identifier(vehicle, identifier)?;
        self.commit_vehicles(next)
    }

    pub fn delete_record(&mut self, entry: EntryId) -> AppResult<DeleteOutcome> {
        let result = self.try_delete_record(entry);
        self.report("del", result, |book, outcome| match outcome {
            DeleteOutcome::EntryRemoved { vehicle } => {
                format!("Entry deleted from {}.", book.identifier_of(*vehicle))
            }
            DeleteOutcome::VehicleRemoved { identifier, .. } => {
                format!("Last entry deleted, vehicle {} removed.", identifier)
            }
        })
    }

    fn try_delete_record(&mut self, entry: EntryId) -> AppResult<DeleteOutcome> {
        let mut next = self.repo.clone();
        let outcome = next.delete_record(entry)?;
        self.commit_vehicles(next)?;
        Ok(outcome)
    }

    pub fn total_hours_for(&self, vehicle: VehicleId) -> AppResult<f64> {
        self.repo.total_hours_for(vehicle)
    }

    pub fn total_hours_all(&self) -> f64 {
        self.repo.total_hours_all()
    }

    // ------------------------------------------------
    // Daily totals
    // ------------------------------------------------

    pub fn current_total(&self) -> f64 {
        self.aggregator.current_total(&self.repo, &self.clock.today())
    }

    /// Guarded snapshot for the clock's today.
    pub fn save_for_today(&mut self) -> AppResult<SaveOutcome> {
        let today = self.clock.today();
        self.save_for_date(&today)
    }

    /// Guarded snapshot for an explicit date label.
    pub fn save_for_date(&mut self, today: &str) -> AppResult<SaveOutcome> {
        let mut next = self.aggregator.clone();
        let outcome = next.save_for_today(&self.repo, today);
        let result = self.commit_saved(next, outcome);
        self.report_save(today, result)
    }

    /// Manual save; guarded only when `guard_manual_save` is set.
    pub fn save_manual(&mut self) -> AppResult<SaveOutcome> {
        let today = self.clock.today();
        let mut next = self.aggregator.clone();
        let outcome = next.save_manual(&self.repo, &today);
        let result = self.commit_saved(next, outcome);
        self.report_save(&today, result)
    }

    pub fn delete_saved_day(&mut self, id: SavedDayId) -> AppResult<SavedDay> {
        let result = self.try_delete_saved_day(id);
        self.report("unsave", result, |_, day| {
            format!("Saved total for {} deleted.", day.date)
        })
    }

    fn try_delete_saved_day(&mut self, id: SavedDayId) -> AppResult<SavedDay> {
        let mut next = self.aggregator.clone();
        let removed = next.delete_saved_day(id)?;
        self.store.save(SAVED_HOURS_KEY, &next.to_stored())?;
        self.aggregator = next;
        Ok(removed)
    }

    // ------------------------------------------------
    // Internals
    // ------------------------------------------------

    fn commit_vehicles(&mut self, next: RecordRepository) -> AppResult<()> {
        self.store.save(CAR_DATABASE_KEY, &next.to_stored())?;
        self.repo = next;
        Ok(())
    }

    fn commit_saved(
        &mut self,
        next: DailyAggregator,
        outcome: SaveOutcome,
    ) -> AppResult<SaveOutcome> {
        if let SaveOutcome::Saved(_) = outcome {
            self.store.save(SAVED_HOURS_KEY, &next.to_stored())?;
            self.aggregator = next;
        }
        Ok(outcome)
    }

    fn report_save(
        &self,
        today: &str,
        result: AppResult<SaveOutcome>,
    ) -> AppResult<SaveOutcome> {
        match &result {
            Ok(SaveOutcome::Saved(id)) => {
                let total = self
                    .aggregator
                    .saved_day(*id)
                    .map(|d| d.total_hours)
                    .unwrap_or_default();
                self.notify(
                    NoticeLevel::Success,
                    "save",
                    format!("Total of {} h saved for {}.", format_hours(total), today),
                );
            }
            Ok(SaveOutcome::Skipped(SkipReason::ZeroTotal)) => {
                self.notify(NoticeLevel::Info, "save", "Nothing to save: total is zero.")
            }
            Ok(SaveOutcome::Skipped(SkipReason::AlreadySaved)) => self.notify(
                NoticeLevel::Info,
                "save",
                format!("Total for {} already saved.", today),
            ),
            Err(e) => self.notify(NoticeLevel::Error, "save", e.to_string()),
        }
        result
    }

    fn report<T>(
        &self,
        operation: &'static str,
        result: AppResult<T>,
        describe: impl FnOnce(&Self, &T) -> String,
    ) -> AppResult<T> {
        match &result {
            Ok(value) => self.notify(NoticeLevel::Success, operation, describe(self, value)),
            Err(e) => self.notify(NoticeLevel::Error, operation, e.to_string()),
        }
        result
    }

    fn notify(&self, level: NoticeLevel, operation: &'static str, message: impl Into<String>) {
        self.notifier.notify(&Notice {
            level,
            operation,
            message: message.into(),
        });
    }

    fn identifier_of(&self, vehicle: VehicleId) -> String {
        self.repo
            .vehicle(vehicle)
            .map(|v| v.identifier.to_string())
            .unwrap_or_else(|| vehicle.to_string())
    }
}
