use acurex_config::AppConfig;
use acurex_core::{Report, Table};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub mod check;
pub mod clean;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Reads `input` and runs the cleaning pipeline over it. Returns the uploaded
/// table alongside the report.
pub fn load_report(input: &Path) -> Result<(Table, Report)> {
    let table = acurex_csv::read_table_from_path(input)?;
    let report = acurex_core::run(&table)?;
    info!(
        input = %input.display(),
        original_rows = report.original_rows,
        final_rows = report.final_rows,
        "cleaned table"
    );
    Ok((table, report))
}

pub fn print_warnings(report: &Report) {
    for diagnostic in &report.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
}
