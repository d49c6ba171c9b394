use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog integrity error at {location}: {message}")]
    IntegrityError { location: String, message: String },

    #[error("Scrape failed for {page}: {details}")]
    ScrapeError { page: String, details: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Network,
    Data,
    Configuration,
    Catalog,
}

impl CatalogError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路或頁面結構問題，稍後重試可能成功
            CatalogError::ApiError(_) | CatalogError::ScrapeError { .. } => ErrorSeverity::Medium,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_) | CatalogError::ZipError(_) => ErrorCategory::System,
            CatalogError::ApiError(_) => ErrorCategory::Network,
            CatalogError::CsvError(_)
            | CatalogError::SerializationError(_)
            | CatalogError::ScrapeError { .. }
            | CatalogError::ProcessingError { .. } => ErrorCategory::Data,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::IntegrityError { .. } => ErrorCategory::Catalog,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the output directory exists and is writable",
            CatalogError::ApiError(_) => {
                "Check the network connection and the endpoint URL, then retry"
            }
            CatalogError::CsvError(_) => "Inspect the generated rows for unbalanced fields",
            CatalogError::ZipError(_) => "Retry the run; if it persists, check disk space",
            CatalogError::SerializationError(_) => {
                "The JSON document is malformed; fix the file and retry"
            }
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the named field in the configuration and retry"
            }
            CatalogError::MissingConfigError { .. } => {
                "Provide the missing field via flag or configuration file"
            }
            CatalogError::IntegrityError { .. } => {
                "Fix the catalog entry at the reported location and reload"
            }
            CatalogError::ScrapeError { .. } => {
                "The page markup may have changed; verify the URL in a browser"
            }
            CatalogError::ProcessingError { .. } => {
                "Re-run with --verbose to locate the bad record"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("File system problem: {}", e),
            CatalogError::ApiError(e) => format!("Could not reach the rankings site: {}", e),
            CatalogError::CsvError(e) => format!("Could not write CSV output: {}", e),
            CatalogError::ZipError(e) => format!("Could not build the output archive: {}", e),
            CatalogError::SerializationError(e) => format!("Invalid JSON document: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            CatalogError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            CatalogError::IntegrityError { location, message } => {
                format!("The catalog is inconsistent at {}: {}", location, message)
            }
            CatalogError::ScrapeError { page, details } => {
                format!("No usable ranking data from {}: {}", page, details)
            }
            CatalogError::ProcessingError { message } => {
                format!("Data processing failed: {}", message)
            }
        }
    }
}
