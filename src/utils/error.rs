use thiserror::Error;

/// Input errors raised by the margin formula.
///
/// The `Display` text is the human-readable reason given to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginError {
    #[error("Revenue must be positive and greater than zero")]
    InvalidRevenue,

    #[error("Cost cannot be negative")]
    InvalidCost,

    #[error("Cost cannot exceed revenue")]
    CostExceedsRevenue,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid margin input: {0}")]
    Margin(#[from] MarginError),

    #[error("Scenario '{name}' rejected: {source}")]
    Scenario {
        name: String,
        #[source]
        source: MarginError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binaries.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Margin(_) | AppError::Scenario { .. } => ErrorCategory::Input,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::TomlError(_) => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::CsvError(_) | AppError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Margin(e) => e.to_string(),
            AppError::Scenario { name, source } => format!("Scenario '{}': {}", name, source),
            AppError::IoError(e) => format!("Could not read or write a file: {}", e),
            AppError::CsvError(e) => format!("The CSV input could not be processed: {}", e),
            AppError::SerializationError(e) => format!("The report could not be encoded: {}", e),
            AppError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AppError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' has an invalid value '{}': {}", field, value, reason),
            AppError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Margin(MarginError::InvalidRevenue)
            | AppError::Scenario {
                source: MarginError::InvalidRevenue,
                ..
            } => "Provide a revenue greater than zero",
            AppError::Margin(MarginError::InvalidCost)
            | AppError::Scenario {
                source: MarginError::InvalidCost,
                ..
            } => "Provide a cost of zero or more",
            AppError::Margin(MarginError::CostExceedsRevenue)
            | AppError::Scenario {
                source: MarginError::CostExceedsRevenue,
                ..
            } => "Check that the cost does not exceed the revenue",
            AppError::IoError(_) => "Check that the path exists and is accessible",
            AppError::CsvError(_) => {
                "Make sure the CSV has numeric 'revenue' and 'cost' columns"
            }
            AppError::SerializationError(_) => "Re-run with --verbose for details",
            AppError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => {
                "Review the configuration file against the documented format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
