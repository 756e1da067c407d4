pub mod validation;

pub use validation::{RowOutcome, RowValidator};
