use thiserror::Error;

#[derive(Error, Debug)]
pub enum EssenceError {
    #[error("Cycle data unavailable for user {user_id}: {message}")]
    DataUnavailable { user_id: String, message: String },

    #[error("Invalid menu selection: {key}")]
    InvalidSelection { key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Date parse error for {field}: {source}")]
    DateParseError {
        field: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataAccess,
    UserInput,
    Configuration,
    Parsing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EssenceError {
    pub fn data_unavailable(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            user_id: user_id.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataUnavailable { .. } | Self::IoError(_) => ErrorCategory::DataAccess,
            Self::InvalidSelection { .. } => ErrorCategory::UserInput,
            Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::DateParseError { .. } => ErrorCategory::Parsing,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSelection { .. } => ErrorSeverity::Low,
            Self::DataUnavailable { .. } | Self::IoError(_) => ErrorSeverity::Medium,
            Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::DateParseError { .. } => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::DataAccess => "Check that the cycle log files exist and are readable, then try again",
            ErrorCategory::UserInput => "Reply with n for next month or p for previous month",
            ErrorCategory::Parsing => "Check the file format: dates must be YYYY-MM-DD and lengths whole days",
            ErrorCategory::Configuration => "Fix the configuration value named in the error and rerun",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DataUnavailable { .. } => {
                "Your cycle data could not be loaded right now. Please try again later.".to_string()
            }
            Self::InvalidSelection { key } => format!("'{}' is not a menu option.", key),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EssenceError>;
