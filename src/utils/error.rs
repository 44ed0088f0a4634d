use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input file '{}': {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Field '{field}' not found {}", location(.row))]
    MissingField { field: String, row: Option<usize> },

    #[error("Output row {row} has no value for column '{column}'")]
    WriteConsistency { row: usize, column: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

fn location(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("in row {}", row),
        None => "in header".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad user input: paths, extensions, missing columns.
    Input,
    /// Header/record bookkeeping went wrong; a bug, not a runtime condition.
    Internal,
    /// Disk, permissions, malformed CSV.
    System,
    Configuration,
}

impl PipelineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PipelineError::InvalidInput { .. } | PipelineError::MissingField { .. } => {
                ErrorCategory::Input
            }
            PipelineError::WriteConsistency { .. } => ErrorCategory::Internal,
            PipelineError::CsvError(_) | PipelineError::IoError(_) => ErrorCategory::System,
            PipelineError::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code for the CLI. 2 is left to clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Internal => 3,
            ErrorCategory::System | ErrorCategory::Configuration => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PipelineError::InvalidInput { path, reason } => {
                format!("Cannot use '{}' as input: {}", path.display(), reason)
            }
            PipelineError::MissingField { field, .. } => {
                format!("The input file has no '{}' column", field)
            }
            PipelineError::WriteConsistency { .. } => {
                "Internal error while writing the output file".to_string()
            }
            PipelineError::CsvError(e) => format!("Could not parse CSV: {}", e),
            PipelineError::IoError(e) => format!("File system error: {}", e),
            PipelineError::ConfigError { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PipelineError::InvalidInput { .. } => {
                "Check that the path exists and points to a .csv file"
            }
            PipelineError::MissingField { .. } => {
                "Pass the name column with --field-name, e.g. --field-name full_name"
            }
            PipelineError::WriteConsistency { .. } => "Please report this as a bug",
            PipelineError::CsvError(_) => {
                "Make sure every row has the same number of columns as the header"
            }
            PipelineError::IoError(_) => "Check permissions and free space in the output directory",
            PipelineError::ConfigError { .. } => "Fix the constants TOML file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
