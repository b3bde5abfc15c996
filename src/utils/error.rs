use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Null input: {context}")]
    NullInput { context: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn null_input(context: impl Into<String>) -> Self {
        Self::NullInput {
            context: context.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NullInput { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::CsvError(_) | Self::SerializationError(_) | Self::TomlError(_) => {
                ErrorSeverity::High
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(e) => match e.kind() {
                std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock => {
                    ErrorSeverity::Medium
                }
                _ => ErrorSeverity::Critical,
            },
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NullInput { context } => format!("Missing value: {}", context),
            Self::CsvError(_) => "The parcel CSV file could not be read".to_string(),
            Self::SerializationError(_) => "The parcel JSON file could not be read".to_string(),
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("{} must be provided", field),
            Self::ValidationError { message } => format!("Invalid parcel data: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NullInput { .. } => "Remove null entries from the parcel source",
            Self::CsvError(_) => "Check that the CSV header is 'id,weight,cost,recipient'",
            Self::SerializationError(_) => "Check that the file holds a JSON array of parcels",
            Self::TomlError(_) => "Fix the TOML syntax in the configuration file",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Review the command line flags and config file",
            Self::ValidationError { .. } => "Weights and costs must be finite, non-negative numbers",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
