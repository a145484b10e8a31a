//! Presentation of responses and errors on the terminal.
use colored::*;
use registry_client::{ConfigError, MetadataError, MetadataResponse};
use std::fmt::Display;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<MetadataResponse> for FormattedString {
    fn from(response: MetadataResponse) -> Self {
        FormattedString(
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| format!("{response:?}")),
        )
    }
}

impl From<MetadataError> for FormattedString {
    fn from(err: MetadataError) -> Self {
        let label = match &err {
            MetadataError::InvalidRequest(_) | MetadataError::Request(_) => "Invalid Request:",
            MetadataError::InvalidEndpoint { .. } => "Invalid Configuration:",
            MetadataError::Connection { .. } => "Connection Failed:",
            MetadataError::Timeout { .. } => "Timed Out:",
            MetadataError::Remote(_) => "Registry Error:",
            MetadataError::Runtime(_) => "Internal Error:",
        };

        error_message(label, err)
    }
}

impl From<ConfigError> for FormattedString {
    fn from(err: ConfigError) -> Self {
        error_message("Invalid Configuration:", err)
    }
}

fn error_message(label: &str, err: impl Display) -> FormattedString {
    FormattedString(format!("{}\n\n'{}'", label.red().bold(), err))
}
