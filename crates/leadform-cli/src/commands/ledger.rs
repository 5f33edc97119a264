use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use std::io;

#[derive(Debug, Args)]
pub struct LedgerArgs {
    /// Only the last N rows
    #[arg(long)]
    pub tail: Option<usize>,
}

pub fn print_ledger(ctx: &Context<'_>, args: LedgerArgs) -> Result<()> {
    let ledger = ctx.store.ledger();
    let sheet = ledger
        .read()
        .with_context(|| format!("read ledger {}", ledger.path().display()))?;
    let skip = args
        .tail
        .map(|tail| sheet.len().saturating_sub(tail))
        .unwrap_or(0);

    if ctx.json {
        let rows: Vec<_> = sheet.rows().iter().skip(skip).collect();
        return print_json(&rows);
    }

    if sheet.is_empty() {
        eprintln!("ledger {} has no rows", ledger.path().display());
        return Ok(());
    }
    let mut view = leadform_store::Sheet::default();
    for row in sheet.rows().iter().skip(skip) {
        view.push(row.clone());
    }
    view.write_to(io::stdout().lock())?;
    Ok(())
}
