//! Built-in tool registrations backed by the tool catalog.

mod placeholder;

use desktop_tool_contract::{ComponentRegistry, RetryPolicy, ToolCatalog, ToolModule};

/// Mount module shared by every catalog tool until it ships a dedicated view.
pub const PLACEHOLDER_TOOL: ToolModule = ToolModule::new(placeholder::mount_tool_placeholder);

/// Builds a component registry with one lazily-resolved loader per catalog entry.
pub fn builtin_component_registry(catalog: &ToolCatalog) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new(RetryPolicy::default());
    for tool in catalog.iter() {
        registry.register_module(tool.id.clone(), PLACEHOLDER_TOOL);
    }
    registry
}
