use desktop_tool_contract::ToolCatalog;
use system_ui::{Dock, DockButton, Icon, IconSize};

use super::{a11y::handle_roving_keydown, *};
use crate::model::DesktopState;

const DOCK_ID: &str = "desktop-tool-dock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct DockStatus {
    /// Tool has an entry in the registry, open or minimized.
    pub running: bool,
    pub minimized: bool,
    pub active: bool,
}

pub(super) fn dock_status(state: &DesktopState, tool_id: &ToolId) -> DockStatus {
    match state.entry(tool_id) {
        Some(entry) => DockStatus {
            running: true,
            minimized: entry.minimized,
            active: state.is_active(tool_id),
        },
        None => DockStatus::default(),
    }
}

/// One launcher per catalog tool, in catalog order.
pub(super) fn dock_entries(catalog: &ToolCatalog) -> Vec<ToolDescriptor> {
    catalog.iter().cloned().collect()
}

fn dock_button_label(display_name: &str, status: DockStatus) -> String {
    if status.minimized {
        format!("Restore {display_name}")
    } else if status.running {
        format!("Raise {display_name}")
    } else {
        format!("Open {display_name}")
    }
}

#[component]
pub(super) fn ToolDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let tools = runtime.catalog.with_value(dock_entries);

    view! {
        <Dock
            id=DOCK_ID
            aria_label="Tools"
            on_keydown=Callback::new(|ev: web_sys::KeyboardEvent| {
                let _ = handle_roving_keydown(&ev, DOCK_ID, r#"[data-ui-slot="dock-button"]"#);
            })
        >
            <For each=move || tools.clone() key=|tool| tool.id.clone() let:tool>
                {{
                    let tool_id = store_value(tool.id.clone());
                    let status = create_memo(move |_| {
                        tool_id.with_value(|tool_id| state.with(|desktop| dock_status(desktop, tool_id)))
                    });
                    let display_name = tool.display_name.clone();
                    let label = Signal::derive(move || dock_button_label(&display_name, status.get()));
                    let icon = IconName::from_token_or_default(&tool.icon);
                    view! {
                        <DockButton
                            title=label
                            aria_label=label
                            data_tool=tool.id.to_string()
                            running=Signal::derive(move || status.get().running)
                            active=Signal::derive(move || status.get().active)
                            on_click=Callback::new(move |_| runtime.open_tool(tool_id.get_value()))
                        >
                            <Icon icon size=IconSize::Md />
                            <span data-ui-slot="dock-label">{tool.display_name}</span>
                        </DockButton>
                    }
                }}
            </For>
        </Dock>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::builtin_tool_catalog;
    use crate::model::InteractionState;
    use crate::reducer::reduce_desktop;

    fn open(state: &mut DesktopState, id: &str) {
        reduce_desktop(
            state,
            &mut InteractionState::default(),
            DesktopAction::OpenTool {
                tool_id: ToolId::trusted(id),
            },
        )
        .expect("open");
    }

    #[test]
    fn dock_status_tracks_lifecycle() {
        let mut state = DesktopState::default();
        let tool_id = ToolId::trusted("sql-formatter");
        assert_eq!(dock_status(&state, &tool_id), DockStatus::default());

        open(&mut state, "sql-formatter");
        assert_eq!(
            dock_status(&state, &tool_id),
            DockStatus {
                running: true,
                minimized: false,
                active: true,
            }
        );

        open(&mut state, "diff-viewer");
        assert_eq!(
            dock_status(&state, &tool_id),
            DockStatus {
                running: true,
                minimized: false,
                active: false,
            }
        );
    }

    #[test]
    fn dock_labels_describe_the_click_outcome() {
        let idle = DockStatus::default();
        let minimized = DockStatus {
            running: true,
            minimized: true,
            active: false,
        };
        let running = DockStatus {
            running: true,
            ..DockStatus::default()
        };

        assert_eq!(dock_button_label("Diff Viewer", idle), "Open Diff Viewer");
        assert_eq!(dock_button_label("Diff Viewer", minimized), "Restore Diff Viewer");
        assert_eq!(dock_button_label("Diff Viewer", running), "Raise Diff Viewer");
    }

    #[test]
    fn every_catalog_tool_gets_a_dock_entry() {
        let catalog = builtin_tool_catalog();
        let docked = dock_entries(&catalog)
            .into_iter()
            .map(|tool| tool.id)
            .collect::<Vec<_>>();
        let catalog_ids = catalog.iter().map(|tool| tool.id.clone()).collect::<Vec<_>>();

        assert_eq!(docked.len(), catalog.len());
        assert_eq!(docked, catalog_ids);
        assert!(docked.contains(&ToolId::trusted("http-status-lookup")));
    }
}
