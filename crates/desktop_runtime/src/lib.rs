//! Virtual desktop window manager for the tool catalog: window registry, reducer, drag
//! controller, and the Leptos components that render the desktop surface.

pub mod catalog;
pub mod components;
mod effect_executor;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod tools;
pub mod window_manager;

pub use catalog::{builtin_tool_catalog, load_tool_catalog, window_manager_config};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use tools::builtin_component_registry;
pub use window_manager::WindowManagerConfig;
