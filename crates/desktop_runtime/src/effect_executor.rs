//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    components::{a11y::focus_element_by_id, window_dom_id},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowContent(tool_id) => {
            let dom_id = window_dom_id(&tool_id);
            // The window may mount in the same tick; wait for the next frame.
            request_animation_frame(move || {
                if !focus_element_by_id(&dom_id) {
                    logging::log!("focus target `{dom_id}` is not mounted");
                }
            });
        }
    }
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(effect);
        }
    });
}
