//! Generic tool view used for catalog entries without a dedicated implementation.

use desktop_tool_contract::ToolMountContext;
use leptos::*;
use system_ui::{Button, ButtonVariant, EmptyState, IconName, TextArea};

/// Mounts the placeholder view for any catalog tool.
pub(super) fn mount_tool_placeholder(context: ToolMountContext) -> View {
    view! { <ToolPlaceholder context=context /> }.into_view()
}

fn draft_summary(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return "Nothing to run yet.".to_string();
    }
    let lines = trimmed.lines().count();
    let chars = trimmed.chars().count();
    format!(
        "Captured {chars} character(s) across {lines} line(s). No generation backend is connected."
    )
}

#[component]
fn ToolPlaceholder(context: ToolMountContext) -> impl IntoView {
    let prompt = create_rw_signal(String::new());
    let status = create_rw_signal::<Option<String>>(None);

    let (title, description) = match context.descriptor {
        Some(descriptor) => (descriptor.display_name, descriptor.description),
        None => (context.tool_id.to_string(), String::new()),
    };
    let input_id = format!("tool-input-{}", context.tool_id);

    view! {
        <div class="tool-shell" data-tool=context.tool_id.to_string()>
            <header class="tool-header">
                <h2>{title}</h2>
                {(!description.is_empty())
                    .then(|| view! { <p class="tool-description">{description}</p> })}
            </header>
            <label for=input_id.clone()>"Input"</label>
            <TextArea
                id=input_id
                ui_slot="tool-input"
                placeholder="Paste input for this tool"
                value=Signal::derive(move || prompt.get())
                on_input=Callback::new(move |ev| prompt.set(event_target_value(&ev)))
            />
            <div class="tool-actions">
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Sparkle
                    on_click=Callback::new(move |_| {
                        status.set(Some(prompt.with_untracked(|value| draft_summary(value))));
                    })
                >
                    "Run"
                </Button>
                <Button on_click=Callback::new(move |_| {
                    prompt.set(String::new());
                    status.set(None);
                })>
                    "Clear"
                </Button>
            </div>
            {move || match status.get() {
                Some(message) => view! { <p class="tool-status" role="status">{message}</p> }.into_view(),
                None => view! { <EmptyState>"Results appear here."</EmptyState> }.into_view(),
            }}
        </div>
    }
}
