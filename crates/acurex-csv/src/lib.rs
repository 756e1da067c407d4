pub mod error;
pub mod reader;
pub mod writer;

pub use error::{CsvError, Result};
pub use reader::{read_table, read_table_from_path};
pub use acurex_core::DEFAULT_OUTPUT_NAME;
pub use writer::{output_file_name, table_to_csv, write_table};
