use crate::error::{Result, StoreError};
use leadform_core::{Catalog, Column, CustomerRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

pub fn load(path: &Path) -> Result<Catalog> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::MissingCatalog(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    let catalog = read_catalog(file, path)?;
    debug!(path = %path.display(), rows = catalog.len(), "catalog loaded");
    for name in catalog.duplicates() {
        warn!(customer = name, "duplicate customer name in catalog; first row is used");
    }
    Ok(catalog)
}

pub fn read_catalog<R: Read>(input: R, origin: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    for column in Column::CUSTOMER {
        if !headers.iter().any(|header| header == column.header()) {
            return Err(StoreError::MissingColumn {
                path: origin.to_path_buf(),
                column: column.header(),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<CustomerRecord>() {
        records.push(row?);
    }
    Ok(Catalog::new(records))
}
