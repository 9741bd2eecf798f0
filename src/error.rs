//! Error types for the OxiSign application
//!
//! The session loop itself cannot fail; errors only come from validating
//! configuration and loading scripted scenarios.

use thiserror::Error;

/// OxiSign application errors
#[derive(Error, Debug, Clone)]
pub enum OxiSignError {
    /// Session configuration is out of range or could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Scenario script could not be parsed or is malformed
    #[error("Scenario error: {0}")]
    ScenarioError(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for OxiSignError {
    fn from(e: std::io::Error) -> Self {
        OxiSignError::IOError(e.to_string())
    }
}

impl From<toml::de::Error> for OxiSignError {
    fn from(e: toml::de::Error) -> Self {
        OxiSignError::ConfigError(e.to_string())
    }
}

impl OxiSignError {
    /// Get a user-friendly description of the error
    pub fn user_message(&self) -> String {
        match self {
            OxiSignError::ConfigError(_) => {
                "Session settings are invalid. Please check the exercise configuration.".to_string()
            }
            OxiSignError::ScenarioError(_) => {
                "The scripted session could not be loaded.".to_string()
            }
            OxiSignError::IOError(_) => "File system error occurred.".to_string(),
        }
    }
}

/// Result type alias for OxiSign operations
pub type Result<T> = std::result::Result<T, OxiSignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: OxiSignError = io.into();
        assert!(matches!(err, OxiSignError::IOError(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_config_error_message() {
        let err = OxiSignError::ConfigError("required_reps must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: required_reps must be at least 1"
        );
        assert!(err.user_message().contains("settings"));
    }
}
