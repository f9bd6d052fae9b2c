//! Build-time tool catalog and window-manager configuration.

use desktop_tool_contract::{CatalogError, ToolCatalog};
use leptos::logging;

use crate::window_manager::WindowManagerConfig;

include!(concat!(env!("OUT_DIR"), "/tool_catalog_generated.rs"));

/// Parses the catalog embedded from `tools.manifest.toml`.
///
/// # Errors
///
/// Returns [`CatalogError`] when the embedded JSON does not decode or repeats a tool id.
pub fn load_tool_catalog() -> Result<ToolCatalog, CatalogError> {
    ToolCatalog::from_json(TOOL_CATALOG_JSON)
}

/// Returns the built-in tool catalog, or an empty catalog when the embedded manifest is unusable.
pub fn builtin_tool_catalog() -> ToolCatalog {
    match load_tool_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("tool catalog unavailable: {err}");
            ToolCatalog::default()
        }
    }
}

/// Returns the `[window_manager]` manifest settings, falling back to the defaults.
pub fn window_manager_config() -> WindowManagerConfig {
    serde_json::from_str(WINDOW_MANAGER_CONFIG_JSON).unwrap_or_else(|err| {
        logging::warn!("window manager config invalid, using defaults: {err}");
        WindowManagerConfig::default()
    })
}
