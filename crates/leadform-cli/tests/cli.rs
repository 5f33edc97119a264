use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = "\
Customer/Company Name,Mobile Number,Email Address,Address,City,State,Source,Lead Date
Acme Jewellers,9876543210,acme@example.com,12 High Street,Surat,Gujarat,Referral,01-04-2024
Borealis Gems,9123456780,sales@borealis.in,4 Ring Road,Rajkot,Gujarat,Exhibition,03-04-2024
";

struct Fixture {
    _temp: TempDir,
    catalog: PathBuf,
    ledger: PathBuf,
    config: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let catalog = temp.path().join("lead_data.csv");
        let ledger = temp.path().join("out").join("lead_sheet.csv");
        let config = temp.path().join("config.toml");
        fs::write(&catalog, CATALOG).expect("write catalog");
        fs::write(&config, "").expect("write config");
        restrict_permissions(&config);
        Self {
            _temp: temp,
            catalog,
            ledger,
            config,
        }
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("leadform");
        cmd.args(["--catalog", path_str(&self.catalog)])
            .args(["--ledger", path_str(&self.ledger)])
            .args(["--config", path_str(&self.config)]);
        cmd
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("run command");
        assert!(output.status.success(), "command failed: {:?}", output);
        String::from_utf8(output.stdout).expect("utf8")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self
            .command()
            .arg("--json")
            .args(args)
            .output()
            .expect("run command");
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("parse json")
    }

    fn run_failure(&self, args: &[&str]) -> (i32, String) {
        let output = self.command().args(args).output().expect("run command");
        assert!(!output.status.success(), "command succeeded: {:?}", output);
        (
            output.status.code().expect("exit code"),
            String::from_utf8(output.stderr).expect("utf8"),
        )
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf8 path")
}

fn restrict_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).expect("metadata").permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms).expect("chmod");
    }
}

#[test]
fn cli_lists_and_shows_customers() {
    let fixture = Fixture::new();

    let names = fixture.run_json(&["customers"]);
    assert_eq!(
        names,
        serde_json::json!(["Acme Jewellers", "Borealis Gems"])
    );

    let detail = fixture.run_json(&["show", "Borealis Gems"]);
    assert_eq!(detail["City"], "Rajkot");
    assert_eq!(detail["Lead Date"], "03-04-2024");

    let text = fixture.run(&["show", "Acme Jewellers"]);
    assert!(text.contains("Customer/Company Name: Acme Jewellers"));
    assert!(text.contains("State: Gujarat"));
}

#[test]
fn cli_show_unknown_customer_is_not_found() {
    let fixture = Fixture::new();
    let (code, stderr) = fixture.run_failure(&["show", "Nobody"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("No data found for the selected customer"));
}

#[test]
fn cli_submit_converted_lead_appends_row() {
    let fixture = Fixture::new();

    let report = fixture.run_json(&[
        "submit",
        "Acme Jewellers",
        "--visit-date",
        "2024-04-20",
        "--brand",
        "British Jewel",
        "--lead-type",
        "Hot",
        "--store-type",
        "Hyper Market",
        "--status",
        "Converted",
        "--product",
        "Ring",
        "--next-connect-date",
        "2024-05-01",
    ]);
    assert_eq!(report["rows"], 1);
    assert_eq!(report["record"]["Customer Dealing Product"], "Ring");
    assert_eq!(report["record"]["Next Connect Date"], "01-05-2024");
    assert!(report["record"].get("Follow-Up Date").is_none());

    let text = fs::read_to_string(&fixture.ledger).expect("read ledger");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().expect("header"),
        "Customer/Company Name,Mobile Number,Email Address,Address,City,State,Source,Lead Date,\
Visit Date,Type of Lead,Type of Brand,Type of Store,Status,Customer Dealing Product,\
Next Connect Date,Description"
    );
    assert_eq!(
        lines.next().expect("row"),
        "Acme Jewellers,9876543210,acme@example.com,12 High Street,Surat,Gujarat,Referral,\
01-04-2024,20-04-2024,Hot,British Jewel,Hyper Market,Converted,Ring,01-05-2024,"
    );

    let rows = fixture.run_json(&["ledger"]);
    assert_eq!(rows.as_array().expect("array").len(), 1);
}

#[test]
fn cli_submit_reports_first_failing_rule_and_writes_nothing() {
    let fixture = Fixture::new();

    let (code, stderr) = fixture.run_failure(&[
        "submit",
        "Acme Jewellers",
        "--lead-type",
        "Hot",
        "--store-type",
        "Hyper Market",
        "--status",
        "-- Select --",
    ]);
    assert_eq!(code, 3);
    assert!(stderr.contains("Please select at least one Type of Brand."));
    assert!(!stderr.contains("Please select Status."));
    assert!(!fixture.ledger.exists());

    let (code, stderr) = fixture.run_failure(&[
        "submit",
        "Acme Jewellers",
        "--lead-type",
        "Warm",
        "--brand",
        "Bellex",
        "--store-type",
        "Super Market",
        "--status",
        "Follow-Up",
    ]);
    assert_eq!(code, 3);
    assert!(stderr.contains("Please select Follow-Up Date."));
    assert!(!fixture.ledger.exists());
}

#[test]
fn cli_submit_unknown_customer_exits_not_found() {
    let fixture = Fixture::new();
    let (code, _) = fixture.run_failure(&[
        "submit",
        "Ghost Traders",
        "--lead-type",
        "Hot",
        "--brand",
        "Bellex",
        "--store-type",
        "Super Market",
        "--status",
        "Decline",
    ]);
    assert_eq!(code, 2);
    assert!(!fixture.ledger.exists());
}

#[test]
fn cli_backup_copies_ledger() {
    let fixture = Fixture::new();
    fixture.run(&[
        "submit",
        "Borealis Gems",
        "--lead-type",
        "Cold",
        "--brand",
        "Lagacy Ice,Bellex",
        "--store-type",
        "Super Market",
        "--status",
        "Decline",
        "--description",
        "Not interested this season",
    ]);

    let backup = fixture.ledger.with_file_name("copy.csv");
    let report = fixture.run_json(&["backup", "--out", path_str(&backup)]);
    assert_eq!(report["output"], path_str(&backup));
    assert_eq!(
        fs::read(&backup).expect("read backup"),
        fs::read(&fixture.ledger).expect("read ledger")
    );

    let text = fixture.run(&["ledger"]);
    assert!(text.contains("\"Bellex, Lagacy Ice\""));
    assert!(text.contains("Not interested this season"));
}
