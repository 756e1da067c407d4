pub mod columns;
pub mod email;
pub mod mobile;
pub mod nhs;

pub use columns::{ColumnLayout, DEFAULT_OUTPUT_NAME, OUTPUT_COLUMNS};
pub use email::normalize_email;
pub use mobile::normalize_mobile;
pub use nhs::is_valid_nhs_number;
