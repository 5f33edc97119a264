use leadform_store::catalog;
use leadform_store::error::StoreError;
use leadform_store::Store;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = "\
Customer/Company Name,Mobile Number,Email Address,Address,City,State,Source,Lead Date
Acme Jewellers,9876543210,acme@example.com,12 High Street,Surat,Gujarat,Referral,01-04-2024
Borealis Gems,9123456780,sales@borealis.in,4 Ring Road,Rajkot,Gujarat,Exhibition,03-04-2024
Acme Jewellers,9000000000,branch@acme.in,7 Mill Lane,Vadodara,Gujarat,Walk-in,05-04-2024
";

#[test]
fn load_reads_rows_in_file_order() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("lead_data.csv");
    fs::write(&path, CATALOG).expect("write catalog");

    let catalog = catalog::load(&path).expect("load catalog");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.names(), vec!["Acme Jewellers", "Borealis Gems"]);
    assert_eq!(catalog.duplicates(), vec!["Acme Jewellers"]);

    let record = catalog.lookup("Borealis Gems").expect("lookup");
    assert_eq!(record.email_address, "sales@borealis.in");
    assert_eq!(record.source, "Exhibition");
}

#[test]
fn load_reports_missing_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("absent.csv");
    let err = catalog::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::MissingCatalog(p) if p == path));
}

#[test]
fn store_open_exposes_catalog_and_paths() {
    let temp = TempDir::new().expect("temp dir");
    let catalog_path = temp.path().join("lead_data.csv");
    let ledger_path = temp.path().join("out").join("lead_sheet.csv");
    fs::write(&catalog_path, CATALOG).expect("write catalog");

    let store = Store::open(&catalog_path, &ledger_path).expect("open store");
    assert_eq!(store.catalog().names().len(), 2);
    assert_eq!(store.ledger_path(), ledger_path.as_path());
    assert!(!store.ledger().exists());
}
