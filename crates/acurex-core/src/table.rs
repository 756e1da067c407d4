use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One input record, keyed by its position in the table it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub values: Vec<String>,
}

impl Row {
    /// Cell at `position`; absent cells read as empty.
    pub fn get(&self, position: usize) -> &str {
        self.values.get(position).map(String::as_str).unwrap_or("")
    }

    pub fn with_value(&self, position: usize, value: String) -> Row {
        let mut values = self.values.clone();
        if let Some(slot) = values.get_mut(position) {
            *slot = value;
        }
        Row {
            index: self.index,
            values,
        }
    }
}

/// An immutable snapshot of rows sharing one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from raw records, numbering rows from zero.
    pub fn new(columns: Vec<String>, records: Vec<Vec<String>>) -> Result<Self, CoreError> {
        let expected = columns.len();
        let mut rows = Vec::with_capacity(records.len());
        for (index, values) in records.into_iter().enumerate() {
            if values.len() != expected {
                return Err(CoreError::RaggedRow {
                    row: index,
                    expected,
                    found: values.len(),
                });
            }
            rows.push(Row { index, values });
        }
        Ok(Self { columns, rows })
    }

    /// A new table with the same header and the given rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Table {
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Row>) -> Table {
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell values of each row, in row order.
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|row| row.values.as_slice())
    }
}
