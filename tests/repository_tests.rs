mod common;

use common::{memory_book, memory_book_with};
use rmotohours::core::{BookSettings, DeleteOutcome, NoticeLevel, RecordRepository};
use rmotohours::errors::AppError;
use rmotohours::models::{EntryId, IdentifierKind, VehicleId};
use rmotohours::storage::{CAR_DATABASE_KEY, MemoryBackend, PersistenceStore, StoredVehicle};

const DAY: &str = "01.01.2024";

fn stored_vehicles(backend: &MemoryBackend) -> Vec<StoredVehicle> {
    let raw = backend.raw(CAR_DATABASE_KEY).expect("collection written");
    serde_json::from_str(raw).expect("valid json")
}

#[test]
fn test_add_twice_same_vehicle_sums_hours() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());

    let (v1, _) = book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();
    let (v2, _) = book.add_record("1234AB-1", 1.5, Some(DAY)).unwrap();

    assert_eq!(v1, v2);
    assert_eq!(book.vehicles().len(), 1);
    assert_eq!(book.vehicles()[0].records.len(), 2);
    assert_eq!(book.total_hours_for(v1).unwrap(), 4.0);
}

#[test]
fn test_add_is_not_idempotent_and_keeps_entry_order() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());

    book.add_record("1234AB-1", 1.0, Some("01.01.2024")).unwrap();
    book.add_record("1234AB-1", 1.0, Some("01.01.2024")).unwrap();
    book.add_record("1234AB-1", 3.0, Some("02.01.2024")).unwrap();

    let dates: Vec<&str> = book.vehicles()[0]
        .records
        .iter()
        .map(|r| r.date.as_str())
        .collect();
    assert_eq!(dates, ["01.01.2024", "01.01.2024", "02.01.2024"]);
}

#[test]
fn test_total_is_order_independent() {
    let hours = [0.5, 2.25, 1.0, 4.0];

    let (mut forward, _) = memory_book(DAY, BookSettings::default());
    for h in hours {
        forward.add_record("1234AB-1", h, None).unwrap();
    }

    let (mut backward, _) = memory_book(DAY, BookSettings::default());
    for h in hours.iter().rev() {
        backward.add_record("1234AB-1", *h, None).unwrap();
    }

    let id_f = forward.vehicles()[0].id;
    let id_b = backward.vehicles()[0].id;
    assert_eq!(forward.total_hours_for(id_f).unwrap(), 7.75);
    assert_eq!(backward.total_hours_for(id_b).unwrap(), 7.75);
}

#[test]
fn test_add_defaults_date_to_clock_today() {
    let (mut book, _) = memory_book("15.03.2024", BookSettings::default());
    book.add_record("1234AB-1", 1.0, None).unwrap();
    assert_eq!(book.vehicles()[0].records[0].date, "15.03.2024");
}

#[test]
fn test_add_rejects_bad_input_before_mutation() {
    let (mut book, notices) = memory_book(DAY, BookSettings::default());

    let err = book.add_record("1234ab-1", 1.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidFormat(_)));

    let err = book.add_record("1234AB-1", 0.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidValue(_)));

    assert!(book.vehicles().is_empty());
    assert!(book.into_backend().raw(CAR_DATABASE_KEY).is_none());

    let last = notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.operation, "add");
}

#[test]
fn test_every_mutation_rewrites_the_store() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());

    book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();
    book.add_record("5678CD-7", 1.0, Some(DAY)).unwrap();

    let stored = stored_vehicles(book.store().backend());
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].identifier, "1234AB-1");
    assert_eq!(stored[0].records[0].hours, 2.5);
    assert_eq!(stored[1].identifier, "5678CD-7");
}

#[test]
fn test_update_hours_negative_leaves_store_unchanged() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    let (_, entry) = book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();
    let before = book.store().backend().raw(CAR_DATABASE_KEY).unwrap().to_string();

    let err = book.update_hours(entry, -1.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidValue(_)));
    assert!(matches!(
        book.update_hours(entry, f64::NAN),
        Err(AppError::InvalidValue(_))
    ));

    let after = book.store().backend().raw(CAR_DATABASE_KEY).unwrap();
    assert_eq!(before, after);
    assert_eq!(book.vehicles()[0].records[0].hours, 2.5);
}

#[test]
fn test_update_hours_overwrites_in_place() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();
    let (vehicle, entry) = book.add_record("1234AB-1", 1.5, Some(DAY)).unwrap();

    book.update_hours(entry, 3.5).unwrap();

    assert_eq!(book.total_hours_for(vehicle).unwrap(), 6.0);
    assert_eq!(stored_vehicles(book.store().backend())[0].records[1].hours, 3.5);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    book.add_record("1234AB-1", 1.0, None).unwrap();

    assert!(matches!(
        book.update_hours(EntryId(999), 1.0),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        book.delete_record(EntryId(999)),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        book.total_hours_for(VehicleId(999)),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_delete_sole_entry_removes_vehicle() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    let (vehicle, entry) = book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();

    let outcome = book.delete_record(entry).unwrap();

    assert!(matches!(outcome, DeleteOutcome::VehicleRemoved { vehicle: v, .. } if v == vehicle));
    assert!(book.vehicles().is_empty());
    assert!(book.find_vehicle("1234AB-1").is_err());
    assert!(stored_vehicles(book.store().backend()).is_empty());
}

#[test]
fn test_delete_keeps_vehicle_with_remaining_entries() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    let (vehicle, first) = book.add_record("1234AB-1", 2.5, Some(DAY)).unwrap();
    book.add_record("1234AB-1", 1.5, Some(DAY)).unwrap();

    let outcome = book.delete_record(first).unwrap();

    assert_eq!(outcome, DeleteOutcome::EntryRemoved { vehicle });
    assert_eq!(book.total_hours_for(vehicle).unwrap(), 1.5);
}

#[test]
fn test_ids_stay_valid_after_other_deletions() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    let (_, a) = book.add_record("1111AA-1", 1.0, None).unwrap();
    let (_, b) = book.add_record("2222BB-2", 2.0, None).unwrap();
    let (_, c) = book.add_record("2222BB-2", 3.0, None).unwrap();

    // removing the first vehicle shifts every position, not the ids
    book.delete_record(a).unwrap();
    book.update_hours(c, 5.0).unwrap();
    book.delete_record(b).unwrap();

    let v = book.find_vehicle("2222BB-2").unwrap();
    assert_eq!(v.records.len(), 1);
    assert_eq!(v.records[0].id, c);
    assert_eq!(v.records[0].hours, 5.0);
}

#[test]
fn test_rename_validates_and_detects_conflicts() {
    let (mut book, _) = memory_book(DAY, BookSettings::default());
    let (first, _) = book.add_record("1234AB-1", 1.0, None).unwrap();
    let (second, _) = book.add_record("5678CD-2", 1.0, None).unwrap();

    assert!(matches!(
        book.update_identifier(first, "bad"),
        Err(AppError::InvalidFormat(_))
    ));
    assert!(matches!(
        book.update_identifier(first, "5678CD-2"),
        Err(AppError::Conflict(_))
    ));

    // same identifier is a no-op
    book.update_identifier(second, "5678CD-2").unwrap();

    book.update_identifier(first, " 9999ZZ-7 ").unwrap();
    assert_eq!(book.vehicles()[0].identifier.as_str(), "9999ZZ-7");
    assert_eq!(
        stored_vehicles(book.store().backend())[0].identifier,
        "9999ZZ-7"
    );
}

#[test]
fn test_vin_mode_uses_vin_grammar() {
    let settings = BookSettings {
        identifier_kind: IdentifierKind::Vin,
        ..BookSettings::default()
    };
    let (mut book, _) = memory_book(DAY, settings);

    book.add_record("0427", 1.0, None).unwrap();
    assert!(book.add_record("1234AB-1", 1.0, None).is_err());
}

#[test]
fn test_repository_merges_duplicate_identifiers_on_load() {
    let backend = MemoryBackend::with_entry(
        CAR_DATABASE_KEY,
        r#"[
            {"identifier": "1234AB-1", "records": [{"date": "01.01.2024", "hours": 1.0}]},
            {"identifier": "5678CD-2", "records": [{"date": "01.01.2024", "hours": 2.0}]},
            {"identifier": "1234AB-1", "records": [{"date": "02.01.2024", "hours": 3.0}]}
        ]"#,
    );
    let (book, _) = memory_book_with(backend, DAY, BookSettings::default());

    assert_eq!(book.vehicles().len(), 2);
    let merged = book.find_vehicle("1234AB-1").unwrap();
    assert_eq!(merged.records.len(), 2);
    assert_eq!(merged.total_hours(), 4.0);

    let report = &book.load_reports()[0];
    assert!(!report.is_clean());
    assert_eq!(report.merged, 1);
    assert_eq!(report.dropped, 0);
    assert!(report.describe().contains("merged 1 duplicate(s)"));
}

#[test]
fn test_repository_round_trips_through_store() {
    let mut repo = RecordRepository::new();
    let ident = rmotohours::core::validate(IdentifierKind::Registration, "1234AB-1").unwrap();
    repo.add_record(ident, 2.5, DAY);

    let mut store = PersistenceStore::new(MemoryBackend::new());
    store.save(CAR_DATABASE_KEY, &repo.to_stored()).unwrap();

    let loaded: Vec<StoredVehicle> = store.load(CAR_DATABASE_KEY);
    let (reloaded, merged) = RecordRepository::from_stored(loaded);

    assert_eq!(merged, 0);
    assert_eq!(reloaded.to_stored(), repo.to_stored());
}
