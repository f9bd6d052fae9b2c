//! Window registry, geometry, and interaction state owned by the desktop reducer.

use std::collections::BTreeMap;

use desktop_tool_contract::ToolId;

use crate::window_manager::WindowManagerConfig;

/// Default window width applied when no manifest override exists.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Default window height applied when no manifest override exists.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Top-left offset of a window in surface coordinates.
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window extent in pixels.
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Registry entry for one open or minimized tool window.
pub struct WindowEntry {
    /// Tool identifier, also the registry key.
    pub id: ToolId,
    pub position: WindowPosition,
    pub size: WindowSize,
    /// Stacking order; larger values render on top.
    pub z_index: u64,
    /// Minimized entries are listed in the taskbar instead of rendered.
    pub minimized: bool,
}

impl WindowEntry {
    pub fn is_open(&self) -> bool {
        !self.minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Partial geometry update merged into an existing [`WindowEntry`].
pub struct GeometryPatch {
    pub position: Option<WindowPosition>,
    pub size: Option<WindowSize>,
}

impl GeometryPatch {
    /// Patch that only moves the window.
    pub fn position(position: WindowPosition) -> Self {
        Self {
            position: Some(position),
            size: None,
        }
    }

    /// Patch that only changes the window extent.
    pub fn size(size: WindowSize) -> Self {
        Self {
            position: None,
            size: Some(size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.size.is_none()
    }

    pub(crate) fn apply_to(self, entry: &mut WindowEntry) {
        if let Some(position) = self.position {
            entry.position = position;
        }
        if let Some(size) = self.size {
            entry.size = size;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window registry, active pointer, and z-order counter for one desktop surface.
pub struct DesktopState {
    /// One entry per open or minimized tool, keyed by tool id.
    pub windows: BTreeMap<ToolId, WindowEntry>,
    /// Tool whose window is styled as focused, if any.
    pub active_tool: Option<ToolId>,
    /// Last z-index handed out. Never decremented.
    pub z_counter: u64,
    pub config: WindowManagerConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(WindowManagerConfig::default())
    }
}

impl DesktopState {
    /// Creates an empty registry using `config` for cascade, sizing, and z-order seeding.
    pub fn with_config(config: WindowManagerConfig) -> Self {
        Self {
            windows: BTreeMap::new(),
            active_tool: None,
            z_counter: config.initial_z_index,
            config,
        }
    }

    pub fn entry(&self, tool_id: &ToolId) -> Option<&WindowEntry> {
        self.windows.get(tool_id)
    }

    pub fn contains(&self, tool_id: &ToolId) -> bool {
        self.windows.contains_key(tool_id)
    }

    pub fn is_active(&self, tool_id: &ToolId) -> bool {
        self.active_tool.as_ref() == Some(tool_id)
    }

    /// Number of non-minimized entries.
    pub fn open_window_count(&self) -> usize {
        self.windows.values().filter(|entry| entry.is_open()).count()
    }

    /// Non-minimized entries ordered bottom to top.
    pub fn open_windows(&self) -> Vec<WindowEntry> {
        self.stacked(WindowEntry::is_open)
    }

    /// Minimized entries ordered by ascending z-index.
    pub fn minimized_windows(&self) -> Vec<WindowEntry> {
        self.stacked(|entry| entry.minimized)
    }

    /// Topmost non-minimized entry.
    pub fn top_open_window(&self) -> Option<&WindowEntry> {
        self.windows
            .values()
            .filter(|entry| entry.is_open())
            .max_by_key(|entry| entry.z_index)
    }

    fn stacked(&self, filter: impl Fn(&WindowEntry) -> bool) -> Vec<WindowEntry> {
        let mut entries: Vec<WindowEntry> = self
            .windows
            .values()
            .filter(|entry| filter(entry))
            .cloned()
            .collect();
        entries.sort_by_key(|entry| entry.z_index);
        entries
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pointer coordinates reported by the browser (client space).
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Anchor captured when a titlebar press starts a drag.
pub struct DragSession {
    pub tool_id: ToolId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

impl DragSession {
    /// Window position for the current pointer, derived from the anchor and the total delta.
    pub fn position_at(&self, pointer: PointerPosition) -> WindowPosition {
        self.position_start.offset(
            pointer.x.saturating_sub(self.pointer_start.x),
            pointer.y.saturating_sub(self.pointer_start.y),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Drag controller state. Move and release input is only meaningful while `Dragging`.
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    pub fn dragged_tool(&self) -> Option<&ToolId> {
        self.session().map(|session| &session.tool_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer interaction state kept outside the window registry.
pub struct InteractionState {
    pub drag: DragState,
}
