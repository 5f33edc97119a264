pub mod backup;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod paths;

use crate::error::Result;
use crate::ledger::Ledger;
use leadform_core::Catalog;
use std::path::{Path, PathBuf};

pub use ledger::Sheet;

pub struct Store {
    catalog: Catalog,
    catalog_path: PathBuf,
    ledger_path: PathBuf,
}

impl Store {
    pub fn open(catalog_path: &Path, ledger_path: &Path) -> Result<Self> {
        let catalog = catalog::load(catalog_path)?;
        Ok(Self {
            catalog,
            catalog_path: catalog_path.to_path_buf(),
            ledger_path: ledger_path.to_path_buf(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    pub fn ledger(&self) -> Ledger<'_> {
        Ledger::new(&self.ledger_path)
    }

    pub fn backup_ledger_to(&self, path: &Path) -> Result<u64> {
        backup::backup_to(&self.ledger_path, path)
    }
}
