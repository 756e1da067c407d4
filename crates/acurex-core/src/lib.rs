pub mod domain;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod table;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use pipeline::run;
pub use report::{Diagnostic, DiagnosticKind, Report};
pub use rules::*;
pub use table::{Row, Table};
