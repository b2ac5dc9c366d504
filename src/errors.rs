use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("failed to read configuration {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CreditError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CreditError::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        CreditError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// name of the offending input field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CreditError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CreditError>;
