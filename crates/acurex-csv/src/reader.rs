use crate::error::{CsvError, Result};
use acurex_core::Table;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads delimited text with a header row into a [`Table`].
///
/// Header names are trimmed and stripped of a UTF-8 BOM. Cell values are kept
/// verbatim; empty cells stay empty strings. Short records are padded with
/// empty cells up to the header width; records wider than the header are
/// rejected.
pub fn read_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .map_err(CsvError::Parse)?
        .iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(CsvError::EmptyInput);
    }

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(CsvError::Parse)?;
        let mut values: Vec<String> = record.iter().map(str::to_string).collect();
        if values.len() < columns.len() {
            values.resize(columns.len(), String::new());
        }
        records.push(values);
    }
    debug!(columns = columns.len(), rows = records.len(), "read csv table");

    Ok(Table::new(columns, records)?)
}

pub fn read_table_from_path(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| CsvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file)
}
