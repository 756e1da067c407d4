use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row-level findings, declared in the order the pipeline emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MobileCorrected,
    MobileBlanked,
    EmailBlanked,
    NhsInvalid,
    BothMissing,
}

impl DiagnosticKind {
    /// Whether rows with this finding are removed from the cleaned table.
    pub fn drops_rows(self) -> bool {
        matches!(self, DiagnosticKind::NhsInvalid | DiagnosticKind::BothMissing)
    }

    fn describe(self) -> &'static str {
        match self {
            DiagnosticKind::MobileCorrected => {
                "had their mobile number corrected to a valid UK format"
            }
            DiagnosticKind::MobileBlanked => {
                "had invalid or missing mobile numbers and have been blanked"
            }
            DiagnosticKind::EmailBlanked => {
                "had no valid email address and have been left blank"
            }
            DiagnosticKind::NhsInvalid => {
                "dropped due to invalid NHS number (must be exactly 10 digits)"
            }
            DiagnosticKind::BothMissing => {
                "dropped because both mobile number and email address were missing"
            }
        }
    }
}

/// A non-fatal finding and the original input rows it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub rows: Vec<usize>,
}

impl Diagnostic {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .rows
            .iter()
            .map(|row| row.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} row(s) {}: rows {}",
            self.count(),
            self.kind.describe(),
            rows
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub table: Table,
    pub diagnostics: Vec<Diagnostic>,
    pub original_rows: usize,
    pub final_rows: usize,
}

impl Report {
    pub fn diagnostic(&self, kind: DiagnosticKind) -> Option<&Diagnostic> {
        self.diagnostics
            .iter()
            .find(|diagnostic| diagnostic.kind == kind)
    }

    pub fn dropped_rows(&self) -> usize {
        self.original_rows - self.final_rows
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticKind};

    #[test]
    fn display_names_count_and_rows() {
        let diagnostic = Diagnostic {
            kind: DiagnosticKind::NhsInvalid,
            rows: vec![1, 4],
        };
        assert_eq!(
            diagnostic.to_string(),
            "2 row(s) dropped due to invalid NHS number (must be exactly 10 digits): rows 1, 4"
        );
    }

    #[test]
    fn kinds_sort_in_emission_order() {
        let mut kinds = vec![
            DiagnosticKind::BothMissing,
            DiagnosticKind::EmailBlanked,
            DiagnosticKind::MobileCorrected,
            DiagnosticKind::NhsInvalid,
            DiagnosticKind::MobileBlanked,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::MobileCorrected,
                DiagnosticKind::MobileBlanked,
                DiagnosticKind::EmailBlanked,
                DiagnosticKind::NhsInvalid,
                DiagnosticKind::BothMissing,
            ]
        );
    }

    #[test]
    fn only_filters_drop_rows() {
        assert!(DiagnosticKind::NhsInvalid.drops_rows());
        assert!(DiagnosticKind::BothMissing.drops_rows());
        assert!(!DiagnosticKind::MobileBlanked.drops_rows());
    }
}
