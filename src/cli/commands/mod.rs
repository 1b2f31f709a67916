pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod save;

use crate::config::Config;
use crate::core::book::{BookSettings, HourBook};
use crate::core::clock::LocalClock;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryId, IdentifierKind, SavedDayId};
use crate::storage::SqliteBackend;
use crate::ui::messages::{ConsoleNotifier, warning};
use std::io::{self, Write};

pub(crate) type Book = HourBook<SqliteBackend>;

/// Open the configured database and load both collections.
/// Recovered (corrupt/repaired) collections are written to the internal log.
pub(crate) fn open_book(cfg: &Config, kind: Option<IdentifierKind>) -> AppResult<Book> {
    let backend = SqliteBackend::open(&cfg.database)?;

    let mut settings = BookSettings::from(cfg);
    if let Some(k) = kind {
        settings.identifier_kind = k;
    }

    let book = HourBook::open(
        backend,
        settings,
        Box::new(LocalClock::new(cfg.date_format.clone())),
        Box::new(ConsoleNotifier),
    );

    for report in book.load_reports().iter().filter(|r| !r.is_clean()) {
        oplog(&book, "recover", &report.key, &report.describe());
    }

    Ok(book)
}

/// Write to the internal log; never blocks the operation.
pub(crate) fn oplog(book: &Book, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(book.store().backend().conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Common tail of every mutating command: guarded daily save when enabled.
pub(crate) fn finish(book: &mut Book, cfg: &Config) -> AppResult<()> {
    if cfg.auto_save {
        book.save_for_today()?;
    }
    Ok(())
}

/// Resolve a 1-based entry number of a vehicle to its stable id.
pub(crate) fn entry_id(book: &Book, identifier: &str, position: usize) -> AppResult<EntryId> {
    let vehicle = book.find_vehicle(identifier)?;
    vehicle.entry_at(position).map(|e| e.id).ok_or_else(|| {
        AppError::NotFound(format!(
            "entry #{} of {} ({} entries)",
            position,
            vehicle.identifier,
            vehicle.records.len()
        ))
    })
}

/// Resolve a 1-based saved-day position to its stable id.
pub(crate) fn saved_day_id(book: &Book, position: usize) -> AppResult<SavedDayId> {
    position
        .checked_sub(1)
        .and_then(|i| book.saved_days().get(i))
        .map(|d| d.id)
        .ok_or_else(|| AppError::NotFound(format!("saved day #{}", position)))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
