use super::*;

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}

#[component]
/// Uniform loading placeholder shown while tool content resolves.
pub fn LoadingState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());
    view! {
        <div
            class=merge_layout_class("ui-loading-state", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="loading-state"
        >
            <span data-ui-slot="spinner" aria-hidden="true"></span>
            <span>{label}</span>
        </div>
    }
}

#[component]
/// Contained, non-fatal error block.
pub fn ErrorState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-error-state", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="error-state"
        >
            <Icon icon=IconName::Warning size=IconSize::Md />
            <strong>{title}</strong>
            {children()}
        </div>
    }
}
