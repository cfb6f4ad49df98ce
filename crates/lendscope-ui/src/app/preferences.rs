//! Host-page configuration lookup for the app shell.

use crate::core::config::DashboardConfig;
use gloo::console;
use gloo::utils::document;

/// Id of the inline JSON element a host page can use to configure the dashboard.
pub(crate) const CONFIG_ELEMENT_ID: &str = "lendscope-config";

/// Load the dashboard configuration embedded in the host page.
///
/// Falls back to defaults when the element is absent; a present but invalid
/// document is logged and also falls back, since the page size is fixed by the
/// host rather than chosen by the user.
pub(crate) fn load_dashboard_config() -> DashboardConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return DashboardConfig::default();
    };
    if raw.trim().is_empty() {
        return DashboardConfig::default();
    }
    match DashboardConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log_config_error(&err.to_string());
            DashboardConfig::default()
        }
    }
}

fn log_config_error(detail: &str) {
    console::error!("dashboard configuration rejected", CONFIG_ELEMENT_ID, detail);
}
