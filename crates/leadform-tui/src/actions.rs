use anyhow::{Context as _, Result};
use leadform_store::Store;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
}

pub fn execute_action(app: &mut App, store: &Store, action: Action) -> Result<()> {
    match action {
        Action::Submit => submit(app, store),
    }
}

fn submit(app: &mut App, store: &Store) -> Result<()> {
    if let Err(message) = app.sync_dates() {
        app.set_error(message);
        return Ok(());
    }
    let record = match app.form.submit(store.catalog()) {
        Ok(record) => record,
        Err(err) => {
            app.set_error(err.to_string());
            return Ok(());
        }
    };

    let ledger = store.ledger();
    ledger
        .append(record)
        .with_context(|| format!("write ledger {}", ledger.path().display()))?;
    app.finish_submit(ledger.path());
    Ok(())
}
