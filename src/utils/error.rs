use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unable to assemble feed {feed_ident}: {message}")]
    AssemblyError { feed_ident: String, message: String },

    #[error("Unable to persist feed at transportIdent={transport_ident}: {message}")]
    PersistenceError {
        transport_ident: String,
        message: String,
    },

    #[error("Feed definition lookup failed: {message}")]
    LookupError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Assembly,
    Persistence,
    Lookup,
}

impl PublishError {
    pub fn persistence(transport_ident: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PersistenceError {
            transport_ident: transport_ident.into(),
            message: message.into(),
        }
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::LookupError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PublishError::ConfigError { .. }
            | PublishError::MissingConfigError { .. }
            | PublishError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PublishError::AssemblyError { .. } | PublishError::SerializationError(_) => {
                ErrorCategory::Assembly
            }
            PublishError::PersistenceError { .. } | PublishError::IoError(_) => {
                ErrorCategory::Persistence
            }
            PublishError::LookupError { .. } => ErrorCategory::Lookup,
        }
    }

    /// Configuration defects are fatal to publisher start-up; everything else
    /// only affects the call that produced it.
    pub fn is_recoverable(&self) -> bool {
        self.category() != ErrorCategory::Configuration
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
