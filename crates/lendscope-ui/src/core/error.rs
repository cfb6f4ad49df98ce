//! Error types for dashboard configuration.

use thiserror::Error;

/// Errors surfaced by the DOM-free dashboard core.
///
/// Both variants describe a misconfigured host view; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A configuration value is outside its accepted domain.
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// A configuration document could not be decoded.
    #[error("failed to parse dashboard configuration: {detail}")]
    ConfigParse {
        /// Decoder error detail.
        detail: String,
    },
}

/// Convenience alias for results carrying a [`DashboardError`].
pub type Result<T> = std::result::Result<T, DashboardError>;
