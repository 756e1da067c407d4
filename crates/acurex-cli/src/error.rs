use acurex_config::ConfigError;
use acurex_core::CoreError;
use acurex_csv::CsvError;
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(csv_err) = cause.downcast_ref::<CsvError>() {
            return ExitCode::from(csv_exit_code(csv_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn csv_exit_code(err: &CsvError) -> u8 {
    if err.is_unreadable_input() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidOutputName(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
