use crate::error::{CsvError, Result};
use acurex_core::{Table, DEFAULT_OUTPUT_NAME};
use csv::WriterBuilder;
use std::io::Write;
const OUTPUT_EXTENSION: &str = "csv";

/// Writes the header and every row, quoting only where needed.
pub fn write_table<W: Write>(table: &Table, output: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer
        .write_record(table.columns())
        .map_err(CsvError::Write)?;
    for record in table.records() {
        writer.write_record(record).map_err(CsvError::Write)?;
    }
    writer
        .flush()
        .map_err(|err| CsvError::Write(err.into()))?;
    Ok(())
}

pub fn table_to_csv(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// File name for the cleaned export: the trimmed base name, or the default
/// when none is given, with a `.csv` extension.
pub fn output_file_name(base: Option<&str>) -> String {
    let base = base
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_NAME);
    format!("{base}.{OUTPUT_EXTENSION}")
}
