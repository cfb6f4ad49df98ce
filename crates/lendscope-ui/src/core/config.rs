//! Host-supplied configuration for the paginated market view.

use crate::core::error::{DashboardError, Result};
use crate::core::pagination::checked_page_size;
use serde::Deserialize;
use tracing::warn;

/// Rows per page of the lending market table.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page shown when the view mounts.
pub const DEFAULT_INITIAL_PAGE: usize = 1;

/// Dashboard view configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Rows per page; must be at least 1.
    pub page_size: usize,
    /// Requested page on mount; clamped like any page request.
    pub initial_page: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_page: DEFAULT_INITIAL_PAGE,
        }
    }
}

/// Wire shape of a configuration document; signed so negative sizes surface as
/// configuration errors rather than decode errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawDashboardConfig {
    page_size: Option<i64>,
    initial_page: Option<i64>,
}

impl TryFrom<RawDashboardConfig> for DashboardConfig {
    type Error = DashboardError;

    fn try_from(raw: RawDashboardConfig) -> Result<Self> {
        let page_size = match raw.page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(value) => usize::try_from(value).map_err(|_| {
                warn!(page_size = value, "rejected pagination page size");
                DashboardError::InvalidConfiguration {
                    field: "page_size",
                    reason: "must be at least 1",
                }
            })?,
        };
        // Negative pages clamp to the first page like any other request.
        let initial_page = raw
            .initial_page
            .map_or(DEFAULT_INITIAL_PAGE, |value| usize::try_from(value).unwrap_or(0));
        let config = Self {
            page_size,
            initial_page,
        };
        config.validate()?;
        Ok(config)
    }
}

impl DashboardConfig {
    /// Configuration with a custom page size, starting on page 1.
    ///
    /// # Errors
    /// Returns [`DashboardError::InvalidConfiguration`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self> {
        let config = Self {
            page_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values that cannot be clamped.
    ///
    /// # Errors
    /// Returns [`DashboardError::InvalidConfiguration`] when `page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        checked_page_size(self.page_size).map(|_| ())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// Returns [`DashboardError::ConfigParse`] when the document is malformed, or
    /// [`DashboardError::InvalidConfiguration`] when it fails validation.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawDashboardConfig = serde_json::from_str(raw).map_err(|err| {
            warn!(error = %err, "dashboard configuration rejected");
            DashboardError::ConfigParse {
                detail: err.to_string(),
            }
        })?;
        Self::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.initial_page, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(
            DashboardConfig::new(0),
            Err(DashboardError::InvalidConfiguration {
                field: "page_size",
                reason: "must be at least 1",
            })
        );
    }

    #[test]
    fn json_fills_missing_fields() -> Result<()> {
        let config = DashboardConfig::from_json(r#"{ "page_size": 12 }"#)?;
        assert_eq!(config.page_size, 12);
        assert_eq!(config.initial_page, DEFAULT_INITIAL_PAGE);
        assert_eq!(DashboardConfig::from_json("{}")?, DashboardConfig::default());
        Ok(())
    }

    #[test]
    fn json_zero_page_size_is_invalid_configuration() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "page_size": 0 }"#),
            Err(DashboardError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn negative_page_size_is_invalid_configuration() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "page_size": -3 }"#),
            Err(DashboardError::InvalidConfiguration {
                field: "page_size",
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        for raw in [r#"{ "page_size": "five" }"#, r#"{ "rows": 4 }"#, "not json"] {
            assert!(matches!(
                DashboardConfig::from_json(raw),
                Err(DashboardError::ConfigParse { .. })
            ));
        }
    }

    #[test]
    fn out_of_range_initial_page_is_accepted() -> Result<()> {
        let config = DashboardConfig::from_json(r#"{ "initial_page": 0 }"#)?;
        assert_eq!(config.initial_page, 0);
        let config = DashboardConfig::from_json(r#"{ "initial_page": -4 }"#)?;
        assert_eq!(config.initial_page, 0);
        let config = DashboardConfig::from_json(r#"{ "initial_page": 900 }"#)?;
        assert_eq!(config.initial_page, 900);
        Ok(())
    }
}
