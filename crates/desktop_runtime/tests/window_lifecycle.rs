use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, WindowEntry,
    WindowPosition, WindowSize,
};
use desktop_tool_contract::ToolId;
use pretty_assertions::assert_eq;

struct Surface {
    state: DesktopState,
    interaction: InteractionState,
}

impl Surface {
    fn new() -> Self {
        Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        }
    }

    fn apply(&mut self, action: DesktopAction) {
        reduce_desktop(&mut self.state, &mut self.interaction, action).expect("reduce");
    }

    fn open(&mut self, id: &str) {
        self.apply(DesktopAction::OpenTool { tool_id: tool(id) });
    }

    fn minimize(&mut self, id: &str) {
        self.apply(DesktopAction::MinimizeTool { tool_id: tool(id) });
    }

    fn close(&mut self, id: &str) {
        self.apply(DesktopAction::CloseTool { tool_id: tool(id) });
    }

    fn entry(&self, id: &str) -> WindowEntry {
        self.state.entry(&tool(id)).cloned().expect("window entry")
    }

    fn active(&self) -> Option<&str> {
        self.state.active_tool.as_ref().map(ToolId::as_str)
    }
}

fn tool(id: &str) -> ToolId {
    ToolId::new(id).expect("valid tool id")
}

fn pointer(x: i32, y: i32) -> PointerPosition {
    PointerPosition::new(x, y)
}

/// Surface after opening the code explainer and then the regex sandbox.
fn two_open_windows() -> Surface {
    let mut surface = Surface::new();
    surface.open("ai-code-explainer");
    surface.open("regex-sandbox");
    surface
}

#[test]
fn first_window_spawns_at_cascade_origin() {
    let mut surface = Surface::new();
    surface.open("ai-code-explainer");

    assert_eq!(
        surface.entry("ai-code-explainer"),
        WindowEntry {
            id: tool("ai-code-explainer"),
            position: WindowPosition::new(50, 50),
            size: WindowSize::new(800, 600),
            z_index: 11,
            minimized: false,
        }
    );
    assert_eq!(surface.active(), Some("ai-code-explainer"));
}

#[test]
fn second_window_cascades_from_open_count() {
    let surface = two_open_windows();
    let entry = surface.entry("regex-sandbox");

    assert_eq!(entry.position, WindowPosition::new(80, 80));
    assert_eq!(entry.z_index, 12);
    assert_eq!(surface.active(), Some("regex-sandbox"));
}

#[test]
fn minimize_moves_window_to_taskbar_and_clears_active() {
    let mut surface = two_open_windows();
    surface.minimize("ai-code-explainer");

    assert!(surface.entry("ai-code-explainer").minimized);
    assert_eq!(surface.active(), None);
    let taskbar: Vec<ToolId> = surface
        .state
        .minimized_windows()
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(taskbar, vec![tool("ai-code-explainer")]);
}

#[test]
fn restore_from_taskbar_keeps_geometry_and_raises() {
    let mut surface = two_open_windows();
    surface.minimize("ai-code-explainer");
    surface.open("ai-code-explainer");

    let entry = surface.entry("ai-code-explainer");
    assert!(!entry.minimized);
    assert_eq!(entry.position, WindowPosition::new(50, 50));
    assert_eq!(entry.size, WindowSize::new(800, 600));
    assert_eq!(entry.z_index, 13);
    assert_eq!(surface.active(), Some("ai-code-explainer"));
    assert!(surface.state.minimized_windows().is_empty());
}

#[test]
fn dragging_header_moves_window_by_total_delta() {
    let mut surface = Surface::new();
    surface.open("ai-code-explainer");

    surface.apply(DesktopAction::BeginDrag {
        tool_id: tool("ai-code-explainer"),
        pointer: pointer(100, 100),
    });
    surface.apply(DesktopAction::UpdateDrag {
        pointer: pointer(140, 130),
    });
    surface.apply(DesktopAction::EndDrag);

    assert_eq!(
        surface.entry("ai-code-explainer").position,
        WindowPosition::new(90, 80)
    );
    assert!(!surface.interaction.drag.is_dragging());
}

#[test]
fn closed_window_reopens_at_fresh_cascade_position() {
    let mut surface = two_open_windows();
    surface.close("regex-sandbox");
    assert!(!surface.state.contains(&tool("regex-sandbox")));

    surface.minimize("ai-code-explainer");
    surface.open("regex-sandbox");

    assert_eq!(
        surface.entry("regex-sandbox").position,
        WindowPosition::new(50, 50)
    );
}

#[test]
fn repeated_opens_keep_one_entry_per_tool() {
    let mut surface = Surface::new();
    for id in [
        "jwt-decoder",
        "regex-sandbox",
        "jwt-decoder",
        "uuid-generator",
        "regex-sandbox",
        "jwt-decoder",
    ] {
        surface.open(id);
    }

    let ids: Vec<&str> = surface.state.windows.keys().map(ToolId::as_str).collect();
    assert_eq!(ids, vec!["jwt-decoder", "regex-sandbox", "uuid-generator"]);
}

#[test]
fn drag_result_is_independent_of_intermediate_moves() {
    let mut coarse = Surface::new();
    let mut fine = Surface::new();
    for surface in [&mut coarse, &mut fine] {
        surface.open("diff-viewer");
        surface.apply(DesktopAction::BeginDrag {
            tool_id: tool("diff-viewer"),
            pointer: pointer(300, 20),
        });
    }

    coarse.apply(DesktopAction::UpdateDrag {
        pointer: pointer(-37, 412),
    });
    for step in 1..=25 {
        fine.apply(DesktopAction::UpdateDrag {
            pointer: pointer(300 - step * 337 / 25, 20 + step * 392 / 25),
        });
    }

    assert_eq!(
        coarse.entry("diff-viewer").position,
        WindowPosition::new(-287, 442)
    );
    assert_eq!(
        fine.entry("diff-viewer").position,
        coarse.entry("diff-viewer").position
    );
}

#[test]
fn z_indices_strictly_increase_across_lifecycle() {
    let mut surface = Surface::new();
    let mut assigned = Vec::new();
    let mut record = |surface: &Surface, id: &str| assigned.push(surface.entry(id).z_index);

    surface.open("json-formatter");
    record(&surface, "json-formatter");
    surface.open("sql-formatter");
    record(&surface, "sql-formatter");
    surface.apply(DesktopAction::FocusTool {
        tool_id: tool("json-formatter"),
    });
    record(&surface, "json-formatter");
    surface.minimize("sql-formatter");
    surface.open("sql-formatter");
    record(&surface, "sql-formatter");
    surface.close("json-formatter");
    surface.open("json-formatter");
    record(&surface, "json-formatter");
    surface.open("json-formatter");
    record(&surface, "json-formatter");

    assert_eq!(assigned, vec![11, 12, 13, 14, 15, 16]);
}

#[test]
fn unknown_tool_ids_still_get_registry_entries() {
    let mut surface = Surface::new();
    surface.open("not-in-catalog");

    assert_eq!(
        surface.entry("not-in-catalog").position,
        WindowPosition::new(50, 50)
    );
    surface.minimize("not-in-catalog");
    surface.close("not-in-catalog");
    assert!(surface.state.windows.is_empty());
}
