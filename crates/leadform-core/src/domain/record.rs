use crate::domain::column::Column;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRecord {
    cells: BTreeMap<Column, String>,
}

impl OutputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: Column, value: impl Into<String>) {
        self.cells.insert(column, value.into());
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.cells.get(&column).map(String::as_str)
    }

    pub fn contains(&self, column: Column) -> bool {
        self.cells.contains_key(&column)
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.cells.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        self.cells
            .iter()
            .map(|(column, value)| (*column, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(Column, String)> for OutputRecord {
    fn from_iter<T: IntoIterator<Item = (Column, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
