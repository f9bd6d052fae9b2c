//! Command palette that elects a tool to open inside the desktop.

use desktop_runtime::use_desktop_runtime;
use desktop_tool_contract::{ToolCatalog, ToolDescriptor, ToolId};
use leptos::wasm_bindgen::JsCast;
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};
use system_ui::{Button, ButtonVariant, EmptyState, Icon, IconName, IconSize, TextField};

use crate::web_app::tool_route;

const PALETTE_INPUT_ID: &str = "command-palette-input";

fn match_rank(tool: &ToolDescriptor, needle: &str) -> Option<u8> {
    let id = tool.id.as_str();
    let name = tool.display_name.to_lowercase();
    let category = tool.category.to_lowercase();

    let prefix = id.starts_with(needle)
        || name.starts_with(needle)
        || name.split_whitespace().any(|word| word.starts_with(needle));
    if prefix {
        Some(0)
    } else if id.contains(needle) || name.contains(needle) || category.contains(needle) {
        Some(1)
    } else {
        None
    }
}

/// Catalog entries matching `query`, prefix matches first, catalog order within a rank.
///
/// Matching is case-insensitive over the id, display name, and category. A blank query lists the
/// whole catalog.
pub fn filter_catalog(catalog: &ToolCatalog, query: &str) -> Vec<ToolDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().cloned().collect();
    }

    let mut ranked: Vec<(u8, &ToolDescriptor)> = catalog
        .iter()
        .filter_map(|tool| match_rank(tool, &needle).map(|rank| (rank, tool)))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, tool)| tool.clone()).collect()
}

fn step_selection(current: usize, len: usize, forward: bool) -> usize {
    match (len, forward) {
        (0, _) => 0,
        (_, true) => (current + 1) % len,
        (_, false) => (current + len - 1) % len,
    }
}

#[component]
/// Ctrl+K / Cmd+K overlay listing catalog tools; choosing one routes to `/tools/<id>`.
pub fn CommandPalette() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let navigate = use_navigate();
    let location = use_location();
    let open = create_rw_signal(false);
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(0usize);
    let matches = create_memo(move |_| {
        query.with(|query| {
            runtime
                .catalog
                .with_value(|catalog| filter_catalog(catalog, query))
        })
    });

    let close = move || {
        open.set(false);
        query.set(String::new());
        selected.set(0);
    };

    let choose = store_value(move |tool_id: ToolId| {
        close();
        let route = tool_route(tool_id.as_str());
        if location.pathname.get_untracked() == route {
            // Same route: the location signal will not change, so open directly.
            runtime.open_tool(tool_id);
        } else {
            navigate(&route, NavigateOptions::default());
        }
    });

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        let toggle = (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k");
        if toggle {
            ev.prevent_default();
            if open.get_untracked() {
                close();
            } else {
                open.set(true);
                request_animation_frame(|| {
                    if let Some(input) = document().get_element_by_id(PALETTE_INPUT_ID) {
                        if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                            let _ = input.focus();
                        }
                    }
                });
            }
        } else if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            close();
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let on_keydown = Callback::new(move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" | "ArrowUp" => {
            ev.prevent_default();
            let len = matches.with(Vec::len);
            selected.update(|index| *index = step_selection(*index, len, ev.key() == "ArrowDown"));
        }
        "Enter" => {
            ev.prevent_default();
            let chosen = matches.with(|tools| {
                tools
                    .get(selected.get_untracked())
                    .map(|tool| tool.id.clone())
            });
            if let Some(tool_id) = chosen {
                choose.with_value(|choose| choose(tool_id));
            }
        }
        _ => {}
    });

    view! {
        <Show when=move || open.get()>
            <div class="command-palette" role="dialog" aria-modal="true" aria-label="Open a tool">
                <TextField
                    id=PALETTE_INPUT_ID
                    ui_slot="palette-query"
                    aria_label="Search tools"
                    placeholder="Search tools by name or category"
                    value=Signal::derive(move || query.get())
                    on_input=Callback::new(move |ev| {
                        query.set(event_target_value(&ev));
                        selected.set(0);
                    })
                    on_keydown
                />
                <Show
                    when=move || !matches.with(Vec::is_empty)
                    fallback=|| view! { <EmptyState>"No matching tools"</EmptyState> }
                >
                    <ul role="listbox">
                        {move || {
                            matches
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, tool)| {
                                    let tool_id = tool.id.clone();
                                    let is_selected = move || selected.get() == index;
                                    view! {
                                        <li role="option" aria-selected=move || is_selected().to_string()>
                                            <Button
                                                variant=ButtonVariant::Quiet
                                                data_tool=tool.id.to_string()
                                                selected=Signal::derive(is_selected)
                                                on_click=Callback::new(move |_| {
                                                    choose.with_value(|choose| choose(tool_id.clone()));
                                                })
                                            >
                                                <Icon
                                                    icon=IconName::from_token_or_default(&tool.icon)
                                                    size=IconSize::Sm
                                                />
                                                <span>{tool.display_name}</span>
                                                <small>{tool.category}</small>
                                            </Button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
