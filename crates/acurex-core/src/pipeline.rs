//! The ordered cleaning stages applied to a whole table.
//!
//! Stages never modify their input. Each one returns a fresh [`Table`], and
//! rows keep their original input index until the final projection, so every
//! diagnostic refers to rows by their position in the uploaded file.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{ColumnLayout, OUTPUT_COLUMNS};
use crate::error::CoreError;
use crate::report::{Diagnostic, DiagnosticKind, Report};
use crate::rules::{RowOutcome, RowValidator};
use crate::table::{Row, Table};

/// Cleans `input` and reports what was changed or removed.
///
/// Fails with [`CoreError::MissingColumns`] before touching any row if a
/// required column is absent.
pub fn run(input: &Table) -> Result<Report, CoreError> {
    let layout = ColumnLayout::resolve(input.columns())?;
    let validator = RowValidator::new(layout);
    let mut findings = Findings::default();

    let table = rewrite(input, &mut findings, |row| validator.normalize_mobile(row));
    debug!(stage = "mobile", rows = table.len(), "normalized mobile numbers");

    let table = rewrite(&table, &mut findings, |row| validator.normalize_email(row));
    debug!(stage = "email", rows = table.len(), "normalized email addresses");

    let table = filter(&table, &mut findings, |row| validator.check_nhs_number(row));
    debug!(stage = "nhs", rows = table.len(), "filtered invalid NHS numbers");

    let table = filter(&table, &mut findings, |row| validator.check_contactable(row));
    debug!(stage = "contact", rows = table.len(), "filtered uncontactable rows");

    let cleaned = project(&table, &layout);
    let report = Report {
        original_rows: input.len(),
        final_rows: cleaned.len(),
        table: cleaned,
        diagnostics: findings.into_diagnostics(),
    };
    debug!(
        original_rows = report.original_rows,
        final_rows = report.final_rows,
        diagnostics = report.diagnostics.len(),
        "pipeline finished"
    );
    Ok(report)
}

#[derive(Debug, Default)]
struct Findings {
    rows: BTreeMap<DiagnosticKind, Vec<usize>>,
}

impl Findings {
    fn record(&mut self, kind: DiagnosticKind, row: usize) {
        self.rows.entry(kind).or_default().push(row);
    }

    fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.rows
            .into_iter()
            .map(|(kind, rows)| Diagnostic { kind, rows })
            .collect()
    }
}

fn rewrite<F>(table: &Table, findings: &mut Findings, step: F) -> Table
where
    F: Fn(&Row) -> RowOutcome,
{
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let outcome = step(row);
            if let Some(kind) = outcome.finding {
                findings.record(kind, row.index);
            }
            outcome.row
        })
        .collect();
    table.with_rows(rows)
}

fn filter<F>(table: &Table, findings: &mut Findings, check: F) -> Table
where
    F: Fn(&Row) -> Option<DiagnosticKind>,
{
    let mut kept = Vec::with_capacity(table.len());
    for row in table.rows() {
        match check(row) {
            Some(kind) => findings.record(kind, row.index),
            None => kept.push(row.clone()),
        }
    }
    table.with_rows(kept)
}

fn project(table: &Table, layout: &ColumnLayout) -> Table {
    let positions = layout.projection();
    let columns = OUTPUT_COLUMNS.iter().map(|name| name.to_string()).collect();
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| Row {
            index,
            values: positions
                .iter()
                .map(|&position| row.get(position).to_string())
                .collect(),
        })
        .collect();
    Table::from_parts(columns, rows)
}
