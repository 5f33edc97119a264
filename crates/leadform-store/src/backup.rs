use crate::error::{Result, StoreError};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn backup_to(ledger: &Path, path: &Path) -> Result<u64> {
    if !ledger.is_file() {
        return Err(StoreError::NotFound(format!(
            "ledger {} does not exist yet",
            ledger.display()
        )));
    }
    paths::ensure_parent_dir(path)?;
    let target = canonicalize_path(path)?;
    let source = fs::canonicalize(ledger)?;
    if target == source || is_staging_path(&target, &source) {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    if is_same_file_identity(&target, &source)? {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    let size = fs::copy(&source, &target)?;
    debug!(from = %source.display(), to = %target.display(), bytes = size, "ledger backed up");
    Ok(size)
}

fn canonicalize_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(parent.join(file_name))
}

fn is_staging_path(target: &Path, ledger: &Path) -> bool {
    let mut staging = ledger.as_os_str().to_owned();
    staging.push(".tmp");
    target == Path::new(&staging)
}

#[cfg(unix)]
fn is_same_file_identity(target: &Path, source: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() {
        return Ok(false);
    }
    let target_meta = fs::metadata(target)?;
    let source_meta = fs::metadata(source)?;
    Ok(target_meta.dev() == source_meta.dev() && target_meta.ino() == source_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file_identity(_target: &Path, _source: &Path) -> Result<bool> {
    Ok(false)
}
