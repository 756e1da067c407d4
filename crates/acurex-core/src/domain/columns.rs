use crate::error::CoreError;

pub const NHS_NUMBER: &str = "NHS number";
pub const PREFERRED_TELEPHONE: &str = "Preferred telephone number";
pub const DATE_OF_BIRTH: &str = "Date of birth";
pub const FIRST_NAME: &str = "First name";
pub const EMAIL_ADDRESS: &str = "Email address";

/// Base name of the cleaned export when none is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "acurex_sms_cleaned";

/// Required columns, in the order they appear in the cleaned export.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    NHS_NUMBER,
    PREFERRED_TELEPHONE,
    DATE_OF_BIRTH,
    FIRST_NAME,
    EMAIL_ADDRESS,
];

/// Positions of the required columns within an input header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub nhs_number: usize,
    pub mobile: usize,
    pub date_of_birth: usize,
    pub first_name: usize,
    pub email: usize,
}

impl ColumnLayout {
    /// Resolves every required column or reports all of the missing ones at once.
    pub fn resolve(columns: &[String]) -> Result<Self, CoreError> {
        let positions: Vec<Option<usize>> = OUTPUT_COLUMNS
            .iter()
            .map(|&name| columns.iter().position(|column| column == name))
            .collect();

        let missing: Vec<String> = OUTPUT_COLUMNS
            .iter()
            .zip(&positions)
            .filter(|(_, position)| position.is_none())
            .map(|(&name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingColumns(missing));
        }

        let found: Vec<usize> = positions.into_iter().flatten().collect();
        Ok(Self {
            nhs_number: found[0],
            mobile: found[1],
            date_of_birth: found[2],
            first_name: found[3],
            email: found[4],
        })
    }

    /// Source positions for each output column, in output order.
    pub fn projection(&self) -> [usize; 5] {
        [
            self.nhs_number,
            self.mobile,
            self.date_of_birth,
            self.first_name,
            self.email,
        ]
    }
}
