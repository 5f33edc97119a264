use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use chrono::Local;
use clap::Args;
use leadform_store::error::StoreError;
use leadform_store::paths;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BackupReport {
    output: String,
    size_bytes: u64,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs) -> Result<()> {
    let out = match args.out {
        Some(path) => path,
        None => paths::backup_path_for(ctx.store.ledger_path(), Local::now().naive_local()),
    };

    let size = match ctx.store.backup_ledger_to(&out) {
        Ok(size) => size,
        Err(err) if matches!(err, StoreError::InvalidBackupPath(_)) => {
            return Err(err)
                .with_context(|| format!("backup path matches ledger: {}", out.display()));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("backup ledger to {}", out.display()));
        }
    };

    if ctx.json {
        let report = BackupReport {
            output: out.display().to_string(),
            size_bytes: size,
        };
        return print_json(&report);
    }

    println!("Backup written to {}", out.display());
    Ok(())
}
