use desktop_tool_contract::ToolCatalog;
use system_ui::{Icon, IconSize, Taskbar, TaskbarButton, TaskbarSection};

use super::*;
use crate::model::DesktopState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TaskbarItem {
    pub tool_id: ToolId,
    pub label: String,
    pub icon: IconName,
}

/// Minimized windows joined with catalog metadata, in ascending z order.
pub(super) fn taskbar_items(state: &DesktopState, catalog: &ToolCatalog) -> Vec<TaskbarItem> {
    state
        .minimized_windows()
        .into_iter()
        .map(|entry| {
            let descriptor = catalog.get(&entry.id);
            TaskbarItem {
                label: tool_title(&entry.id, descriptor),
                icon: tool_icon(descriptor),
                tool_id: entry.id,
            }
        })
        .collect()
}

fn taskbar_button_dom_id(tool_id: &ToolId) -> String {
    format!("taskbar-restore-{tool_id}")
}

fn open_count_label(count: usize) -> String {
    match count {
        0 => "No open windows".to_string(),
        1 => "1 open window".to_string(),
        n => format!("{n} open windows"),
    }
}

#[component]
pub(super) fn MinimizedTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let items = create_memo(move |_| {
        runtime
            .catalog
            .with_value(|catalog| state.with(|desktop| taskbar_items(desktop, catalog)))
    });
    let open_count = create_memo(move |_| state.with(DesktopState::open_window_count));

    view! {
        <Taskbar aria_label="Desktop taskbar">
            <TaskbarSection ui_slot="minimized-windows" aria_label="Minimized windows">
                <For each=move || items.get() key=|item| item.tool_id.clone() let:item>
                    {{
                        let tool_id = item.tool_id.clone();
                        let aria_label = format!("Restore {}", item.label);
                        view! {
                            <TaskbarButton
                                id=taskbar_button_dom_id(&item.tool_id)
                                aria_label=aria_label.clone()
                                title=aria_label
                                data_tool=item.tool_id.to_string()
                                on_click=Callback::new(move |_| runtime.open_tool(tool_id.clone()))
                            >
                                <Icon icon=item.icon size=IconSize::Sm />
                                <span>{item.label}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
                <Show when=move || items.with(Vec::is_empty)>
                    <span data-ui-slot="taskbar-empty">"No minimized tools"</span>
                </Show>
            </TaskbarSection>
            <TaskbarSection ui_slot="status">
                <span role="status" aria-live="polite">
                    {move || open_count_label(open_count.get())}
                </span>
            </TaskbarSection>
        </Taskbar>
    }
}

#[cfg(test)]
mod tests {
    use desktop_tool_contract::ToolDescriptor;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowEntry, WindowPosition, WindowSize};

    fn catalog() -> ToolCatalog {
        ToolCatalog::from_descriptors(vec![ToolDescriptor {
            id: ToolId::trusted("jwt-decoder"),
            display_name: "JWT Decoder".to_string(),
            icon: "document-text".to_string(),
            category: "Data".to_string(),
            description: String::new(),
        }])
        .expect("catalog")
    }

    fn insert(state: &mut DesktopState, id: &str, z_index: u64, minimized: bool) {
        let tool_id = ToolId::trusted(id);
        state.windows.insert(
            tool_id.clone(),
            WindowEntry {
                id: tool_id,
                position: WindowPosition::default(),
                size: WindowSize::default(),
                z_index,
                minimized,
            },
        );
    }

    #[test]
    fn taskbar_lists_only_minimized_windows_in_z_order() {
        let mut state = DesktopState::default();
        insert(&mut state, "zz-unknown", 13, true);
        insert(&mut state, "jwt-decoder", 12, true);
        insert(&mut state, "regex-sandbox", 14, false);

        assert_eq!(
            taskbar_items(&state, &catalog()),
            vec![
                TaskbarItem {
                    tool_id: ToolId::trusted("jwt-decoder"),
                    label: "JWT Decoder".to_string(),
                    icon: IconName::DocumentText,
                },
                TaskbarItem {
                    tool_id: ToolId::trusted("zz-unknown"),
                    label: "zz-unknown".to_string(),
                    icon: IconName::Warning,
                },
            ]
        );
    }

    #[test]
    fn open_count_label_pluralizes() {
        assert_eq!(open_count_label(0), "No open windows");
        assert_eq!(open_count_label(1), "1 open window");
        assert_eq!(open_count_label(3), "3 open windows");
    }
}
