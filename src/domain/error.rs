use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptError;

/// Library-wide error type for phiprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// A `--field` argument is not of the form `key=value`.
    #[error("Invalid field argument '{0}': expected key=value")]
    InvalidFieldArgument(String),

    /// Prompt rendering failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_errors_display_transparently() {
        let err: AppError = PromptError::UnknownKind("vitals".into()).into();
        assert_eq!(
            err.to_string(),
            "Unknown prompt kind 'vitals'. Run 'phiprompt list' to see available kinds"
        );
    }

    #[test]
    fn invalid_field_argument_names_the_argument() {
        let err = AppError::InvalidFieldArgument("user_role".into());
        assert_eq!(err.to_string(), "Invalid field argument 'user_role': expected key=value");
    }
}
