//! CLI-level errors (wraps link and config errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::link::LinkError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Link(#[from] LinkError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("browser command failed: {message}")]
    Browser { message: String },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Link(e) => match e {
                LinkError::InvalidSlug { .. }
                | LinkError::InvalidDate { .. }
                | LinkError::InvalidHost { .. } => crate::exitcode::USAGE,
                LinkError::MissingSetting { .. } => crate::exitcode::CONFIG,
            },
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Browser { .. } => crate::exitcode::UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_link_errors_when_mapping_then_usage_or_config() {
        let usage = CliError::from(LinkError::InvalidSlug {
            value: "x".into(),
            expected: "OWNER/NAME",
        });
        assert_eq!(usage.exit_code(), crate::exitcode::USAGE);

        let config = CliError::from(LinkError::MissingSetting {
            key: "jira.site",
            hint: "set it",
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_browser_error_when_mapping_then_unavailable() {
        let err = CliError::Browser {
            message: "exit 1".into(),
        };
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
    }
}
