use leadform_core::{Column, OutputRecord};
use leadform_store::backup::backup_to;
use leadform_store::error::StoreError;
use leadform_store::ledger::Ledger;
use std::fs;
use tempfile::TempDir;

fn seed_ledger(path: &std::path::Path) {
    let record: OutputRecord = [
        (Column::CustomerName, "Acme".to_string()),
        (Column::Status, "Decline".to_string()),
    ]
    .into_iter()
    .collect();
    Ledger::new(path).append(record).expect("append");
}

#[test]
fn backup_copies_ledger_contents() {
    let temp = TempDir::new().expect("temp dir");
    let ledger_path = temp.path().join("lead_sheet.csv");
    let backup_path = temp.path().join("backups").join("copy.csv");
    seed_ledger(&ledger_path);

    let size = backup_to(&ledger_path, &backup_path).expect("backup");
    let original = fs::read(&ledger_path).expect("read ledger");
    assert_eq!(size, original.len() as u64);
    assert_eq!(fs::read(&backup_path).expect("read backup"), original);
}

#[test]
fn backup_rejects_ledger_path() {
    let temp = TempDir::new().expect("temp dir");
    let ledger_path = temp.path().join("lead_sheet.csv");
    seed_ledger(&ledger_path);

    let err = backup_to(&ledger_path, &ledger_path).expect_err("backup should fail");
    assert!(matches!(err, StoreError::InvalidBackupPath(_)));
}

#[test]
fn backup_requires_existing_ledger() {
    let temp = TempDir::new().expect("temp dir");
    let ledger_path = temp.path().join("lead_sheet.csv");
    let err = backup_to(&ledger_path, &temp.path().join("copy.csv")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
