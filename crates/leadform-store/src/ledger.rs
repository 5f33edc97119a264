use crate::error::Result;
use crate::paths;
use leadform_core::{canonical_columns, Column, OutputRecord};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    columns: Vec<Column>,
    rows: Vec<OutputRecord>,
}

impl Sheet {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[OutputRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, record: OutputRecord) {
        self.columns = canonical_columns(self.columns.iter().copied().chain(record.columns()));
        self.rows.push(record);
    }

    pub fn read_from<R: Read>(input: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(input);
        let headers = reader.headers()?.clone();
        let mut mapping = Vec::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            match Column::from_header(header) {
                Some(column) => mapping.push((index, column)),
                None => warn!(column = header, "dropping non-canonical ledger column"),
            }
        }

        let mut sheet = Sheet {
            columns: canonical_columns(mapping.iter().map(|(_, column)| *column)),
            rows: Vec::new(),
        };
        for row in reader.records() {
            let row = row?;
            let record = mapping
                .iter()
                .map(|(index, column)| (*column, row.get(*index).unwrap_or_default().to_string()))
                .collect();
            sheet.rows.push(record);
        }
        Ok(sheet)
    }

    pub fn write_to<W: Write>(&self, output: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(output);
        if !self.columns.is_empty() {
            writer.write_record(self.columns.iter().map(|column| column.header()))?;
            for row in &self.rows {
                writer.write_record(
                    self.columns
                        .iter()
                        .map(|column| row.get(*column).unwrap_or_default()),
                )?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

pub struct Ledger<'a> {
    path: &'a Path,
}

impl<'a> Ledger<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read(&self) -> Result<Sheet> {
        if !self.exists() {
            return Ok(Sheet::default());
        }
        let file = File::open(self.path)?;
        Sheet::read_from(file)
    }

    // No locking: a concurrent writer's row can be lost.
    pub fn append(&self, record: OutputRecord) -> Result<Sheet> {
        let mut sheet = self.read()?;
        sheet.push(record);
        self.replace(&sheet)?;
        debug!(
            path = %self.path.display(),
            rows = sheet.len(),
            "ledger rewritten"
        );
        Ok(sheet)
    }

    fn replace(&self, sheet: &Sheet) -> Result<()> {
        replace_file(self.path, |output| sheet.write_to(output))
    }
}

fn replace_file(path: &Path, write: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let staging = staging_path(path);
    let staged = (|| -> Result<()> {
        let mut writer = BufWriter::new(File::create(&staging)?);
        write(&mut writer)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&staging, path)?;
        Ok(())
    })();
    if staged.is_err() {
        let _ = fs::remove_file(&staging);
    }
    staged
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::{replace_file, staging_path, Sheet};
    use crate::error::StoreError;
    use leadform_core::{Column, OutputRecord};
    use std::fs;
    use std::io::{self, Write};
    use tempfile::TempDir;

    fn record(cells: &[(Column, &str)]) -> OutputRecord {
        cells
            .iter()
            .map(|(column, value)| (*column, value.to_string()))
            .collect()
    }

    #[test]
    fn push_extends_header_canonically() {
        let mut sheet = Sheet::default();
        sheet.push(record(&[
            (Column::CustomerName, "Acme"),
            (Column::Status, "Follow-Up"),
            (Column::FollowUpDate, "02-06-2024"),
        ]));
        sheet.push(record(&[
            (Column::CustomerName, "Borealis"),
            (Column::Status, "Converted"),
            (Column::NextConnectDate, "01-05-2024"),
        ]));
        assert_eq!(
            sheet.columns(),
            &[
                Column::CustomerName,
                Column::Status,
                Column::FollowUpDate,
                Column::NextConnectDate
            ]
        );
    }

    #[test]
    fn write_fills_missing_cells_with_empty_text() {
        let mut sheet = Sheet::default();
        sheet.push(record(&[(Column::CustomerName, "Acme"), (Column::City, "Surat")]));
        sheet.push(record(&[(Column::CustomerName, "Borealis")]));
        let mut out = Vec::new();
        sheet.write_to(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Customer/Company Name,City", "Acme,Surat", "Borealis,"]);
    }

    #[test]
    fn read_drops_unknown_headers_and_sorts_columns() {
        let data = "Status,Internal Id,Customer/Company Name\nDecline,42,Acme\n";
        let sheet = Sheet::read_from(data.as_bytes()).expect("read");
        assert_eq!(sheet.columns(), &[Column::CustomerName, Column::Status]);
        assert_eq!(sheet.rows()[0].get(Column::Status), Some("Decline"));
        assert!(sheet.rows()[0].iter().all(|(_, value)| value != "42"));
    }

    #[test]
    fn empty_input_reads_as_empty_sheet() {
        let sheet = Sheet::read_from("".as_bytes()).expect("read");
        assert!(sheet.is_empty());
        assert!(sheet.columns().is_empty());
    }

    #[test]
    fn failed_write_removes_staging_file_and_keeps_ledger() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("lead_sheet.csv");
        fs::write(&path, "Customer/Company Name\nAcme\n").expect("seed ledger");

        let err = replace_file(&path, |output| {
            output.write_all(b"Customer/Company Name\n")?;
            Err(StoreError::Io(io::Error::other("disk full")))
        })
        .expect_err("write should fail");

        assert!(matches!(err, StoreError::Io(_)));
        assert!(!staging_path(&path).exists());
        assert_eq!(
            fs::read_to_string(&path).expect("read ledger"),
            "Customer/Company Name\nAcme\n"
        );
    }
}
