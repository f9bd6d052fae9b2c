//! Shared window-manager transition helpers used by the desktop reducer.

use desktop_tool_contract::ToolId;
use serde::{Deserialize, Serialize};

use crate::model::{
    DesktopState, WindowEntry, WindowPosition, WindowSize, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};

/// Spawn offset of the first cascaded window on both axes.
pub const CASCADE_ORIGIN: i32 = 50;
/// Per-window cascade increment on both axes.
pub const CASCADE_STEP: i32 = 30;
/// Counter value before the first raise; the first window receives `INITIAL_Z_INDEX + 1`.
pub const INITIAL_Z_INDEX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Window placement and stacking parameters, loadable from the `[window_manager]` manifest table.
pub struct WindowManagerConfig {
    pub cascade_origin: i32,
    pub cascade_step: i32,
    pub default_width: i32,
    pub default_height: i32,
    pub initial_z_index: u64,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            cascade_origin: CASCADE_ORIGIN,
            cascade_step: CASCADE_STEP,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            initial_z_index: INITIAL_Z_INDEX,
        }
    }
}

impl WindowManagerConfig {
    pub fn default_size(&self) -> WindowSize {
        WindowSize::new(self.default_width, self.default_height)
    }
}

/// Cascaded spawn position for a new window given `open_count` currently open windows.
pub fn cascade_position(config: &WindowManagerConfig, open_count: usize) -> WindowPosition {
    let k = i32::try_from(open_count).unwrap_or(i32::MAX);
    let offset = config
        .cascade_origin
        .saturating_add(config.cascade_step.saturating_mul(k));
    WindowPosition::new(offset, offset)
}

/// Advances the z-order counter and returns the freshly assigned value.
///
/// Returns `None` once the counter is exhausted; the counter is left untouched in that case.
pub fn next_z_index(state: &mut DesktopState) -> Option<u64> {
    let z_index = state.z_counter.checked_add(1)?;
    state.z_counter = z_index;
    Some(z_index)
}

/// Builds a fresh entry at the cascade position for the current open-window count.
///
/// The entry is not inserted and no z-index is allocated; callers pass the raised value.
pub fn spawn_entry(state: &DesktopState, tool_id: ToolId, z_index: u64) -> WindowEntry {
    WindowEntry {
        id: tool_id,
        position: cascade_position(&state.config, state.open_window_count()),
        size: state.config.default_size(),
        z_index,
        minimized: false,
    }
}

/// Moves `tool_id` to `z_index` (allocated by [`next_z_index`]) and marks it active.
///
/// Returns `false` when no such entry exists.
pub fn raise_window(state: &mut DesktopState, tool_id: &ToolId, z_index: u64) -> bool {
    let Some(entry) = state.windows.get_mut(tool_id) else {
        return false;
    };
    entry.z_index = z_index;
    state.active_tool = Some(tool_id.clone());
    true
}

/// Clears the active pointer when it no longer names a live, non-minimized entry.
///
/// Returns `true` when the pointer was cleared.
pub fn normalize_active_pointer(state: &mut DesktopState) -> bool {
    let stale = state
        .active_tool
        .as_ref()
        .is_some_and(|tool_id| !state.entry(tool_id).is_some_and(WindowEntry::is_open));
    if stale {
        state.active_tool = None;
    }
    stale
}
