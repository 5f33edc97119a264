use crate::error::{Result, StoreError};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "leadform";
const CATALOG_FILENAME: &str = "lead_data.csv";
const LEDGER_FILENAME: &str = "lead_sheet.csv";
const BACKUP_DIR: &str = "backups";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn resolve_catalog_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    resolve_file(custom, CATALOG_FILENAME)
}

pub fn resolve_ledger_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    resolve_file(custom, LEDGER_FILENAME)
}

fn resolve_file(custom: Option<PathBuf>, default_name: &str) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => Ok(path),
        None => Ok(data_dir()?.join(default_name)),
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            restrict_dir_permissions(parent)?;
        }
    }
    Ok(())
}

pub fn backup_path_for(ledger: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = ledger
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("lead_sheet");
    let dir = ledger
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    dir.join(BACKUP_DIR)
        .join(format!("{}-{}.csv", stem, now.format("%Y%m%d-%H%M%S")))
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}
