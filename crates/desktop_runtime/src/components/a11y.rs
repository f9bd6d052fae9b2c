//! DOM focus and roving-keyboard helpers for desktop shell widgets.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn active_html_element() -> Option<web_sys::HtmlElement> {
    document()
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

fn roving_items(container_id: &str, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(container) = document().and_then(|document| document.get_element_by_id(container_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = container.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| item.get_attribute("disabled").is_none())
        .collect()
}

/// Index reached from `current` after a roving key press, wrapping at both ends.
pub(super) fn roving_target(current: Option<usize>, len: usize, key: &str) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0).min(len - 1);
    match key {
        "ArrowRight" | "ArrowDown" => Some((current + 1) % len),
        "ArrowLeft" | "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

/// Moves focus across the items of a toolbar-like container. Returns `true` when handled.
pub(super) fn handle_roving_keydown(
    ev: &web_sys::KeyboardEvent,
    container_id: &str,
    selector: &str,
) -> bool {
    let items = roving_items(container_id, selector);
    let active = active_html_element();
    let current = active
        .as_ref()
        .and_then(|active| items.iter().position(|item| item == active));
    let Some(target) = roving_target(current, items.len(), ev.key().as_str()) else {
        return false;
    };

    let _ = items[target].focus();
    ev.prevent_default();
    ev.stop_propagation();
    true
}
