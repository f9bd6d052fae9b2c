//! Desktop shell UI composition and interaction surfaces.

pub(crate) mod a11y;
mod dock;
mod taskbar;
mod window;

use desktop_tool_contract::{ToolDescriptor, ToolId};
use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWindowLayer, IconName};

use self::{a11y::focus_element_by_id, dock::ToolDock, taskbar::MinimizedTaskbar, window::DesktopWindow};

use crate::{model::PointerPosition, reducer::DesktopAction};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DESKTOP_ROOT_ID: &str = "desktop-shell-root";

/// DOM id of the window frame rendered for `tool_id`.
pub(crate) fn window_dom_id(tool_id: &ToolId) -> String {
    format!("desktop-window-{tool_id}")
}

/// Window title for a tool, falling back to the raw id when the catalog does not know it.
fn tool_title(tool_id: &ToolId, descriptor: Option<&ToolDescriptor>) -> String {
    descriptor
        .map(|descriptor| descriptor.display_name.clone())
        .unwrap_or_else(|| tool_id.to_string())
}

fn tool_icon(descriptor: Option<&ToolDescriptor>) -> IconName {
    descriptor
        .map(|descriptor| IconName::from_token_or_default(&descriptor.icon))
        .unwrap_or(IconName::Warning)
}

#[component]
/// Renders the desktop surface: tool dock, open windows, and the minimized-window taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Drag input is observed on the window so fast pointer motion cannot outrun the titlebar.
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if runtime
            .interaction
            .with_untracked(|interaction| interaction.drag.is_dragging())
        {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        end_active_drag(runtime);
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_drag(runtime);
    });
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if end_active_drag(runtime) {
            ev.prevent_default();
            let _ = focus_element_by_id(DESKTOP_ROOT_ID);
        }
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
        escape_listener.remove();
    });

    let dragging = Signal::derive(move || {
        runtime
            .interaction
            .with(|interaction| interaction.drag.is_dragging())
    });

    view! {
        <DesktopRoot id=DESKTOP_ROOT_ID tabindex=-1 dragging>
            <DesktopBackdrop>
                <ToolDock />
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.open_windows())
                        key=|entry| entry.id.clone()
                        let:entry
                    >
                        <DesktopWindow tool_id=entry.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <MinimizedTaskbar />
        </DesktopRoot>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Ends the current drag session, returning whether one was active.
fn end_active_drag(runtime: DesktopRuntimeContext) -> bool {
    let dragging = runtime
        .interaction
        .with_untracked(|interaction| interaction.drag.is_dragging());
    if dragging {
        runtime.dispatch_action(DesktopAction::EndDrag);
    }
    dragging
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(icon: &str) -> ToolDescriptor {
        ToolDescriptor {
            id: ToolId::trusted("regex-sandbox"),
            display_name: "Regex Sandbox".to_string(),
            icon: icon.to_string(),
            category: "Text".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn window_dom_ids_are_derived_from_tool_ids() {
        assert_eq!(
            window_dom_id(&ToolId::trusted("jwt-decoder")),
            "desktop-window-jwt-decoder"
        );
    }

    #[test]
    fn chrome_falls_back_for_tools_missing_from_catalog() {
        let tool_id = ToolId::trusted("ghost-tool");
        assert_eq!(tool_title(&tool_id, None), "ghost-tool");
        assert_eq!(tool_icon(None), IconName::Warning);

        let known = descriptor("code");
        assert_eq!(tool_title(&known.id, Some(&known)), "Regex Sandbox");
        assert_eq!(tool_icon(Some(&known)), IconName::Code);
        assert_eq!(tool_icon(Some(&descriptor("no-such-icon"))), IconName::Launcher);
    }
}
