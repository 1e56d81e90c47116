use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Page request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    HttpStatusError { status: u16 },

    #[error("HTML parsing error: {message}")]
    ParseError { message: String },

    #[error("No records extracted, nothing to write")]
    NoDataError,

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] umya_spreadsheet::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parsing,
    Output,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::ParseError { .. } => ErrorCategory::Parsing,
            Self::NoDataError | Self::SpreadsheetError(_) | Self::IoError(_) => {
                ErrorCategory::Output
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ProcessingError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoDataError => ErrorSeverity::Medium,
            Self::HttpError(_)
            | Self::HttpStatusError { .. }
            | Self::ParseError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ProcessingError { .. } => ErrorSeverity::High,
            Self::SpreadsheetError(_) | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) => "Check network connectivity and that the catalog URL is reachable",
            Self::HttpStatusError { .. } => {
                "The page did not return 200; verify the URL still points at the catalog"
            }
            Self::ParseError { .. } => "Verify the table class selector is valid CSS",
            Self::NoDataError => {
                "No matching tables or columns were found; check --table-class and --field patterns"
            }
            Self::SpreadsheetError(_) => {
                "The workbook could not be read or written; check it is a valid .xlsx file"
            }
            Self::IoError(_) => "Check file permissions and free disk space for the output path",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration value and run again",
            Self::ProcessingError { .. } => "This is likely a bug; re-run with --verbose and report it",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) => format!("Could not fetch the catalog page: {}", e),
            Self::HttpStatusError { status } => {
                format!("The catalog page answered with HTTP {}", status)
            }
            Self::ParseError { message } => format!("Could not parse the page: {}", message),
            Self::NoDataError => "No rows were extracted, the workbook was left untouched".to_string(),
            Self::SpreadsheetError(e) => format!("Workbook error: {}", e),
            Self::IoError(e) => format!("File error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
