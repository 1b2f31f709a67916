//! Daily totals and saved-day snapshots.

use crate::core::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::ids::IdGen;
use crate::models::{SavedDay, SavedDayId};
use crate::storage::StoredSavedDay;
use serde::{Deserialize, Serialize};

/// Which entries make up the "current" total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalScope {
    /// Every stored entry, whatever its date.
    #[default]
    Lifetime,
    /// Only entries whose date label equals today's label.
    Dated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ZeroTotal,
    AlreadySaved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SavedDayId),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Default)]
pub struct DailyAggregator {
    saved: Vec<SavedDay>,
    ids: IdGen,
    scope: TotalScope,
    guard_manual_save: bool,
}

impl DailyAggregator {
    pub fn new(scope: TotalScope, guard_manual_save: bool) -> Self {
        Self {
            scope,
            guard_manual_save,
            ..Default::default()
        }
    }

    /// Rebuild from loaded snapshots.
    pub fn from_stored(
        stored: Vec<StoredSavedDay>,
        scope: TotalScope,
        guard_manual_save: bool,
    ) -> Self {
        let mut agg = Self::new(scope, guard_manual_save);
        for s in stored {
            let id = SavedDayId(agg.ids.next());
            agg.saved.push(SavedDay {
                id,
                date: s.date,
                total_hours: s.total_hours,
            });
        }
        agg
    }

    pub fn to_stored(&self) -> Vec<StoredSavedDay> {
        self.saved
            .iter()
            .map(|s| StoredSavedDay {
                date: s.date.clone(),
                total_hours: s.total_hours,
            })
            .collect()
    }

    pub fn saved_days(&self) -> &[SavedDay] {
        &self.saved
    }

    pub fn saved_day(&self, id: SavedDayId) -> Option<&SavedDay> {
        self.saved.iter().find(|s| s.id == id)
    }

    /// Date of the most recent snapshot, manual or guarded.
    pub fn last_saved_date(&self) -> Option<&str> {
        self.saved.last().map(|s| s.date.as_str())
    }

    pub fn current_total(&self, repo: &RecordRepository, today: &str) -> f64 {
        match self.scope {
            TotalScope::Lifetime => repo.total_hours_all(),
            TotalScope::Dated => repo.total_hours_on(today),
        }
    }

    /// Guarded snapshot: at most one per date, never for a zero total.
    pub fn save_for_today(&mut self, repo: &RecordRepository, today: &str) -> SaveOutcome {
        let total = self.current_total(repo, today);

        if total <= 0.0 {
            return SaveOutcome::Skipped(SkipReason::ZeroTotal);
        }
        if self.last_saved_date() == Some(today) {
            return SaveOutcome::Skipped(SkipReason::AlreadySaved);
        }

        SaveOutcome::Saved(self.push(today, total))
    }

    /// Save-button path. Appends unconditionally unless the manual guard is
    /// enabled, in which case it behaves like `save_for_today`. Either way
    /// the new snapshot becomes the last-saved marker.
    pub fn save_manual(&mut self, repo: &RecordRepository, today: &str) -> SaveOutcome {
        if self.guard_manual_save {
            return self.save_for_today(repo, today);
        }

        let total = self.current_total(repo, today);
        SaveOutcome::Saved(self.push(today, total))
    }

    /// Remove a snapshot. The marker follows the remaining last snapshot.
    pub fn delete_saved_day(&mut self, id: SavedDayId) -> AppResult<SavedDay> {
        let idx = self
            .saved
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("saved day {}", id)))?;
        Ok(self.saved.remove(idx))
    }

    fn push(&mut self, date: &str, total_hours: f64) -> SavedDayId {
        let id = SavedDayId(self.ids.next());
        self.saved.push(SavedDay {
            id,
            date: date.to_string(),
            total_hours,
        });
        id
    }
}
