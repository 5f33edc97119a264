use anyhow::Result;
use leadform_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod completions;
pub mod customers;
pub mod ledger;
pub mod submit;
pub mod tui;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
