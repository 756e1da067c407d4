use crate::domain::{is_valid_nhs_number, normalize_email, normalize_mobile, ColumnLayout};
use crate::report::DiagnosticKind;
use crate::table::Row;

/// A row after one validation step, plus the finding it produced, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    pub row: Row,
    pub finding: Option<DiagnosticKind>,
}

/// Applies the field rules to single rows of a table with a known layout.
///
/// Empty strings are the only representation of a missing value, both on the
/// way in and in the rows handed back.
#[derive(Debug, Clone, Copy)]
pub struct RowValidator {
    layout: ColumnLayout,
}

impl RowValidator {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Rewrites the mobile cell. A changed non-empty result is a correction;
    /// any row left without a mobile number is reported as blanked.
    pub fn normalize_mobile(&self, row: &Row) -> RowOutcome {
        let before = row.get(self.layout.mobile);
        let after = normalize_mobile(before).unwrap_or_default();
        let finding = if after.is_empty() {
            Some(DiagnosticKind::MobileBlanked)
        } else if after != before {
            Some(DiagnosticKind::MobileCorrected)
        } else {
            None
        };
        RowOutcome {
            row: row.with_value(self.layout.mobile, after),
            finding,
        }
    }

    pub fn normalize_email(&self, row: &Row) -> RowOutcome {
        let after = normalize_email(row.get(self.layout.email)).unwrap_or_default();
        let finding = after.is_empty().then_some(DiagnosticKind::EmailBlanked);
        RowOutcome {
            row: row.with_value(self.layout.email, after),
            finding,
        }
    }

    pub fn check_nhs_number(&self, row: &Row) -> Option<DiagnosticKind> {
        if is_valid_nhs_number(row.get(self.layout.nhs_number)) {
            None
        } else {
            Some(DiagnosticKind::NhsInvalid)
        }
    }

    /// Flags rows with no way to contact the patient. Expects normalized cells.
    pub fn check_contactable(&self, row: &Row) -> Option<DiagnosticKind> {
        let mobile = row.get(self.layout.mobile).trim();
        let email = row.get(self.layout.email).trim();
        if mobile.is_empty() && email.is_empty() {
            Some(DiagnosticKind::BothMissing)
        } else {
            None
        }
    }

    /// Runs every rule over one row in pipeline order.
    ///
    /// Stops at the first rule that would drop the row, so a row rejected for
    /// its NHS number is never also reported as uncontactable.
    pub fn validate(&self, row: &Row) -> (Row, Vec<DiagnosticKind>) {
        let mut findings = Vec::new();

        let mobile = self.normalize_mobile(row);
        findings.extend(mobile.finding);
        let email = self.normalize_email(&mobile.row);
        findings.extend(email.finding);
        let row = email.row;

        if let Some(finding) = self.check_nhs_number(&row) {
            findings.push(finding);
            return (row, findings);
        }
        findings.extend(self.check_contactable(&row));
        (row, findings)
    }
}
