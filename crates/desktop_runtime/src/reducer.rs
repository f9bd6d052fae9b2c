//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_tool_contract::ToolId;
use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, DragState, GeometryPatch, InteractionState, PointerPosition,
    WindowEntry,
};
use crate::window_manager::{next_z_index, normalize_active_pointer, raise_window, spawn_entry};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a tool window, or restore and raise the existing one.
    OpenTool {
        /// Tool to open.
        tool_id: ToolId,
    },
    /// Remove a tool window from the registry.
    CloseTool {
        /// Tool to close.
        tool_id: ToolId,
    },
    /// Hide a tool window in the taskbar.
    MinimizeTool {
        /// Tool to minimize.
        tool_id: ToolId,
    },
    /// Raise an open window and mark it active.
    FocusTool {
        /// Tool to focus.
        tool_id: ToolId,
    },
    /// Merge a partial geometry update into a window.
    UpdateGeometry {
        /// Tool to update.
        tool_id: ToolId,
        /// Fields to overwrite.
        patch: GeometryPatch,
    },
    /// Begin dragging a window by its titlebar.
    BeginDrag {
        /// Window being dragged.
        tool_id: ToolId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndDrag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by the reducer for the effect executor.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window of the given tool.
    FocusWindowContent(ToolId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by [`reduce_desktop`].
pub enum ReducerError {
    /// The target tool has no window in the registry.
    #[error("no window is registered for tool `{0}`")]
    WindowNotFound(ToolId),
    /// The action is only valid for open windows.
    #[error("window for tool `{0}` is minimized")]
    WindowMinimized(ToolId),
    /// No z-order value is left to raise a window with.
    #[error("z-order counter exhausted")]
    ZOrderExhausted,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// On error neither `state` nor `interaction` is modified.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action targets a window that does not exist or is in a
/// lifecycle state where the action is invalid.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenTool { tool_id } => {
            let z_index = allocate_z_index(state)?;
            match state.windows.get_mut(&tool_id) {
                Some(entry) => {
                    entry.minimized = false;
                    entry.z_index = z_index;
                }
                None => {
                    let entry = spawn_entry(state, tool_id.clone(), z_index);
                    state.windows.insert(tool_id.clone(), entry);
                }
            }
            state.active_tool = Some(tool_id.clone());
            effects.push(RuntimeEffect::FocusWindowContent(tool_id));
        }
        DesktopAction::CloseTool { tool_id } => {
            if state.windows.remove(&tool_id).is_none() {
                return Err(ReducerError::WindowNotFound(tool_id));
            }
            end_drag_for(interaction, &tool_id);
        }
        DesktopAction::MinimizeTool { tool_id } => {
            find_window_mut(state, &tool_id)?.minimized = true;
            state.active_tool = None;
            end_drag_for(interaction, &tool_id);
        }
        DesktopAction::FocusTool { tool_id } => {
            ensure_open(state, &tool_id)?;
            if !state.is_active(&tool_id) {
                let z_index = allocate_z_index(state)?;
                raise_window(state, &tool_id, z_index);
                effects.push(RuntimeEffect::FocusWindowContent(tool_id));
            }
        }
        DesktopAction::UpdateGeometry { tool_id, patch } => {
            patch.apply_to(find_window_mut(state, &tool_id)?);
        }
        DesktopAction::BeginDrag { tool_id, pointer } => {
            let position_start = ensure_open(state, &tool_id)?.position;
            if !state.is_active(&tool_id) {
                let z_index = allocate_z_index(state)?;
                raise_window(state, &tool_id, z_index);
                effects.push(RuntimeEffect::FocusWindowContent(tool_id.clone()));
            }
            interaction.drag = DragState::Dragging(DragSession {
                tool_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateDrag { pointer } => {
            if let DragState::Dragging(session) = &interaction.drag {
                let position = session.position_at(pointer);
                match state.windows.get_mut(&session.tool_id) {
                    Some(entry) => GeometryPatch::position(position).apply_to(entry),
                    None => interaction.drag = DragState::Idle,
                }
            }
        }
        DesktopAction::EndDrag => {
            interaction.drag = DragState::Idle;
        }
    }

    normalize_active_pointer(state);
    Ok(effects)
}

fn allocate_z_index(state: &mut DesktopState) -> Result<u64, ReducerError> {
    next_z_index(state).ok_or(ReducerError::ZOrderExhausted)
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    tool_id: &ToolId,
) -> Result<&'a mut WindowEntry, ReducerError> {
    state
        .windows
        .get_mut(tool_id)
        .ok_or_else(|| ReducerError::WindowNotFound(tool_id.clone()))
}

fn ensure_open<'a>(
    state: &'a DesktopState,
    tool_id: &ToolId,
) -> Result<&'a WindowEntry, ReducerError> {
    let entry = state
        .entry(tool_id)
        .ok_or_else(|| ReducerError::WindowNotFound(tool_id.clone()))?;
    if entry.minimized {
        return Err(ReducerError::WindowMinimized(tool_id.clone()));
    }
    Ok(entry)
}

fn end_drag_for(interaction: &mut InteractionState, tool_id: &ToolId) {
    if interaction.drag.dragged_tool() == Some(tool_id) {
        interaction.drag = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowPosition, WindowSize};

    fn tool(id: &str) -> ToolId {
        ToolId::trusted(id)
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) -> WindowEntry {
        reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenTool { tool_id: tool(id) },
        )
        .expect("open tool");
        state.entry(&tool(id)).cloned().expect("window entry")
    }

    #[test]
    fn open_emits_focus_effect_for_the_raised_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenTool {
                tool_id: tool("json-formatter"),
            },
        )
        .expect("open");

        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowContent(tool("json-formatter"))]
        );
    }

    #[test]
    fn reopening_active_window_still_raises_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "regex-sandbox");
        let again = open(&mut state, &mut interaction, "regex-sandbox");

        assert_eq!(again.position, first.position);
        assert_eq!(again.size, first.size);
        assert!(again.z_index > first.z_index);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn focusing_active_window_is_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "jwt-decoder");
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusTool {
                tool_id: tool("jwt-decoder"),
            },
        )
        .expect("focus");

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn focusing_background_window_raises_and_activates_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "jwt-decoder");
        open(&mut state, &mut interaction, "uuid-generator");

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusTool {
                tool_id: tool("jwt-decoder"),
            },
        )
        .expect("focus");

        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowContent(tool("jwt-decoder"))]
        );
        assert_eq!(state.active_tool, Some(tool("jwt-decoder")));
        assert_eq!(
            state.top_open_window().map(|entry| entry.id.clone()),
            Some(tool("jwt-decoder"))
        );
        assert_eq!(state.z_counter, 13);
    }

    #[test]
    fn focus_and_drag_reject_minimized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "cron-explainer");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeTool {
                tool_id: tool("cron-explainer"),
            },
        )
        .expect("minimize");
        let before = state.clone();

        let focus = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusTool {
                tool_id: tool("cron-explainer"),
            },
        );
        let drag = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                tool_id: tool("cron-explainer"),
                pointer: PointerPosition::new(0, 0),
            },
        );

        assert_eq!(
            focus,
            Err(ReducerError::WindowMinimized(tool("cron-explainer")))
        );
        assert_eq!(
            drag,
            Err(ReducerError::WindowMinimized(tool("cron-explainer")))
        );
        assert_eq!(state, before);
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn actions_on_missing_windows_report_not_found() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for action in [
            DesktopAction::CloseTool {
                tool_id: tool("sql-formatter"),
            },
            DesktopAction::MinimizeTool {
                tool_id: tool("sql-formatter"),
            },
            DesktopAction::FocusTool {
                tool_id: tool("sql-formatter"),
            },
            DesktopAction::UpdateGeometry {
                tool_id: tool("sql-formatter"),
                patch: GeometryPatch::position(WindowPosition::new(1, 1)),
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::WindowNotFound(tool("sql-formatter")))
            );
        }
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn closing_active_window_clears_active_pointer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "diff-viewer");
        open(&mut state, &mut interaction, "markdown-preview");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseTool {
                tool_id: tool("markdown-preview"),
            },
        )
        .expect("close");

        assert_eq!(state.active_tool, None);
        assert!(state.contains(&tool("diff-viewer")));
    }

    #[test]
    fn closing_background_window_keeps_active_pointer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "diff-viewer");
        open(&mut state, &mut interaction, "markdown-preview");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseTool {
                tool_id: tool("diff-viewer"),
            },
        )
        .expect("close");

        assert_eq!(state.active_tool, Some(tool("markdown-preview")));
    }

    #[test]
    fn minimizing_background_window_clears_active_pointer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "diff-viewer");
        open(&mut state, &mut interaction, "markdown-preview");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeTool {
                tool_id: tool("diff-viewer"),
            },
        )
        .expect("minimize");

        assert_eq!(state.active_tool, None);
        assert_eq!(
            state.entry(&tool("markdown-preview")).map(|e| e.minimized),
            Some(false)
        );
    }

    #[test]
    fn update_geometry_merges_size_without_clamping() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "color-converter");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateGeometry {
                tool_id: tool("color-converter"),
                patch: GeometryPatch {
                    position: Some(WindowPosition::new(-400, 5000)),
                    size: Some(WindowSize::new(320, 240)),
                },
            },
        )
        .expect("update geometry");

        let entry = state.entry(&tool("color-converter")).expect("entry");
        assert_eq!(entry.position, WindowPosition::new(-400, 5000));
        assert_eq!(entry.size, WindowSize::new(320, 240));
    }

    #[test]
    fn begin_drag_raises_background_window_and_replaces_stale_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "base64-codec");
        open(&mut state, &mut interaction, "http-status-lookup");
        interaction.drag = DragState::Dragging(DragSession {
            tool_id: tool("http-status-lookup"),
            pointer_start: PointerPosition::new(9, 9),
            position_start: WindowPosition::new(80, 80),
        });

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                tool_id: tool("base64-codec"),
                pointer: PointerPosition::new(200, 10),
            },
        )
        .expect("begin drag");

        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowContent(tool("base64-codec"))]
        );
        assert_eq!(state.active_tool, Some(tool("base64-codec")));
        assert_eq!(
            interaction.drag,
            DragState::Dragging(DragSession {
                tool_id: tool("base64-codec"),
                pointer_start: PointerPosition::new(200, 10),
                position_start: WindowPosition::new(50, 50),
            })
        );
    }

    #[test]
    fn drag_moves_are_ignored_while_idle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "base64-codec");
        let before = state.clone();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition::new(500, 500),
            },
        )
        .expect("update drag");

        assert_eq!(state, before);
    }

    #[test]
    fn closing_dragged_window_ends_the_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "base64-codec");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                tool_id: tool("base64-codec"),
                pointer: PointerPosition::new(10, 10),
            },
        )
        .expect("begin drag");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseTool {
                tool_id: tool("base64-codec"),
            },
        )
        .expect("close");

        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn drag_session_for_vanished_window_ends_on_next_move() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        interaction.drag = DragState::Dragging(DragSession {
            tool_id: tool("uuid-generator"),
            pointer_start: PointerPosition::new(0, 0),
            position_start: WindowPosition::new(50, 50),
        });

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateDrag {
                pointer: PointerPosition::new(4, 4),
            },
        )
        .expect("update drag");

        assert_eq!(interaction.drag, DragState::Idle);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn dragging_the_active_window_emits_no_focus_effect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "regex-sandbox");
        let z_counter = state.z_counter;

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginDrag {
                tool_id: tool("regex-sandbox"),
                pointer: PointerPosition::new(60, 60),
            },
        )
        .expect("begin drag");

        assert!(effects.is_empty());
        assert_eq!(state.z_counter, z_counter);
        assert!(interaction.drag.is_dragging());
    }

    #[test]
    fn exhausted_z_counter_rejects_raises_without_repeating_values() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "jwt-decoder");
        state.z_counter = u64::MAX - 1;

        let top = open(&mut state, &mut interaction, "sql-formatter");
        assert_eq!(top.z_index, u64::MAX);
        let before = state.clone();

        for action in [
            DesktopAction::OpenTool {
                tool_id: tool("diff-viewer"),
            },
            DesktopAction::FocusTool {
                tool_id: tool("jwt-decoder"),
            },
            DesktopAction::BeginDrag {
                tool_id: tool("jwt-decoder"),
                pointer: PointerPosition::new(0, 0),
            },
        ] {
            assert_eq!(
                reduce_desktop(&mut state, &mut interaction, action),
                Err(ReducerError::ZOrderExhausted)
            );
        }
        assert_eq!(state, before);
        assert_eq!(interaction.drag, DragState::Idle);
    }
}
