//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the tool catalog,
//! and the component registry. UI composition stays in [`crate::components`].

use desktop_tool_contract::{ComponentRegistry, ToolCatalog, ToolId};
use leptos::*;

use crate::{
    catalog::{builtin_tool_catalog, window_manager_config},
    effect_executor,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    tools::builtin_component_registry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Tool metadata used by the dock, taskbar, and window chrome.
    pub catalog: StoredValue<ToolCatalog>,
    /// Lazily-resolved tool content.
    pub registry: StoredValue<ComponentRegistry>,
    /// Reactive window registry signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens `tool_id`, restoring and raising an existing window.
    pub fn open_tool(&self, tool_id: ToolId) {
        self.dispatch_action(DesktopAction::OpenTool { tool_id });
    }
}

fn open_initial_tool(runtime: DesktopRuntimeContext, initial_tool: MaybeSignal<Option<String>>) {
    create_effect(move |_| {
        let Some(raw) = initial_tool.get() else {
            return;
        };
        match ToolId::new(raw.trim()) {
            Ok(tool_id) => {
                if !runtime.catalog.with_value(|catalog| catalog.contains(&tool_id)) {
                    logging::warn!("opening tool `{tool_id}` which is not in the catalog");
                }
                runtime.open_tool(tool_id);
            }
            Err(err) => logging::warn!("ignoring initial tool `{raw}`: {err}"),
        }
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Tool to open once mounted, and again whenever the signal changes to a new id.
    #[prop(optional, into)]
    initial_tool: MaybeSignal<Option<String>>,
    /// Catalog override; defaults to the build-time manifest catalog.
    #[prop(optional)]
    catalog: Option<ToolCatalog>,
    /// Registry override; defaults to one placeholder loader per catalog tool.
    #[prop(optional)]
    registry: Option<ComponentRegistry>,
    children: Children,
) -> impl IntoView {
    let catalog = catalog.unwrap_or_else(builtin_tool_catalog);
    let registry = registry.unwrap_or_else(|| builtin_component_registry(&catalog));
    let catalog = store_value(catalog);
    let registry = store_value(registry);
    let state = create_rw_signal(DesktopState::with_config(window_manager_config()));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| *previous != desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|previous| *previous != ui) {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        catalog,
        registry,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    open_initial_tool(runtime, initial_tool);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
