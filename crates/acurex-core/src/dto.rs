use crate::report::{Diagnostic, DiagnosticKind, Report};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDto {
    pub kind: DiagnosticKind,
    pub count: usize,
    pub rows: Vec<usize>,
    pub dropped: bool,
    pub message: String,
}

impl From<&Diagnostic> for DiagnosticDto {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            kind: diagnostic.kind,
            count: diagnostic.count(),
            rows: diagnostic.rows.clone(),
            dropped: diagnostic.kind.drops_rows(),
            message: diagnostic.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummaryDto {
    pub original_rows: usize,
    pub final_rows: usize,
    pub dropped_rows: usize,
    pub diagnostics: Vec<DiagnosticDto>,
    pub output: Option<String>,
}

impl ReportSummaryDto {
    pub fn new(report: &Report, output: Option<String>) -> Self {
        Self {
            original_rows: report.original_rows,
            final_rows: report.final_rows,
            dropped_rows: report.dropped_rows(),
            diagnostics: report.diagnostics.iter().map(DiagnosticDto::from).collect(),
            output,
        }
    }
}
