use desktop_tool_contract::{ToolDescriptor, ToolMountContext};
use system_ui::{
    ErrorState, Icon, IconName, IconSize, LoadingState, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

use super::*;
use crate::model::WindowEntry;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline placement for a window frame.
pub(super) fn window_style(entry: &WindowEntry) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        entry.position.x, entry.position.y, entry.size.width, entry.size.height, entry.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(tool_id: ToolId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = runtime
        .catalog
        .with_value(|catalog| catalog.get(&tool_id).cloned());
    let title = tool_title(&tool_id, descriptor.as_ref());
    let icon = tool_icon(descriptor.as_ref());
    let dom_id = window_dom_id(&tool_id);
    let tool = store_value(tool_id.clone());

    let style = Signal::derive(move || {
        tool.with_value(|tool_id| {
            runtime
                .state
                .with(|desktop| desktop.entry(tool_id).map(window_style))
                .unwrap_or_default()
        })
    });
    let focused = Signal::derive(move || {
        tool.with_value(|tool_id| runtime.state.with(|desktop| desktop.is_active(tool_id)))
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusTool {
                tool_id: tool.get_value(),
            });
        }
    });
    let begin_drag = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            tool_id: tool.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let minimize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::MinimizeTool {
            tool_id: tool.get_value(),
        });
    });
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseTool {
            tool_id: tool.get_value(),
        });
    });

    view! {
        <WindowFrame
            id=dom_id
            style
            aria_label=title.clone()
            focused
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_drag>
                <WindowTitle>
                    <Icon icon size=IconSize::Sm />
                    <span>{title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize window" on_click=minimize>
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContent tool_id descriptor />
            </WindowBody>
        </WindowFrame>
    }
}

#[component]
fn WindowContent(tool_id: ToolId, descriptor: Option<ToolDescriptor>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let loading_label = format!("Loading {}", tool_title(&tool_id, descriptor.as_ref()));
    let module = create_local_resource(
        || (),
        {
            let tool_id = tool_id.clone();
            move |_| runtime.registry.with_value(|registry| registry.resolve(&tool_id))
        },
    );
    let mount_context = store_value(ToolMountContext {
        tool_id,
        descriptor,
    });

    view! {
        <Suspense fallback=move || view! { <LoadingState label=loading_label.clone() /> }>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <ErrorState title="Tool unavailable">
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </ErrorState>
                }
            }>
                {move || {
                    module
                        .get()
                        .map(|resolved| resolved.map(|module| module.mount(mount_context.get_value())))
                }}
            </ErrorBoundary>
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowPosition, WindowSize};

    #[test]
    fn window_style_places_frame_from_entry_geometry() {
        let entry = WindowEntry {
            id: ToolId::trusted("regex-sandbox"),
            position: WindowPosition::new(-12, 80),
            size: WindowSize::new(800, 600),
            z_index: 12,
            minimized: false,
        };

        assert_eq!(
            window_style(&entry),
            "left:-12px;top:80px;width:800px;height:600px;z-index:12;"
        );
    }
}
