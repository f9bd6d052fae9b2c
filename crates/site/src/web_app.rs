use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::palette::CommandPalette;

const TOOL_ROUTE_PREFIX: &str = "/tools/";

/// Route that deep-links a tool into the desktop.
pub(crate) fn tool_route(tool_id: &str) -> String {
    format!("{TOOL_ROUTE_PREFIX}{tool_id}")
}

/// Tool requested by the current location: `/tools/<id>` wins over `?tool=<id>`.
pub(crate) fn requested_tool(pathname: &str, query_tool: Option<&str>) -> Option<String> {
    let from_path = pathname
        .trim_end_matches('/')
        .strip_prefix(TOOL_ROUTE_PREFIX)
        .filter(|segment| !segment.is_empty() && !segment.contains('/'));

    from_path
        .or(query_tool)
        .map(str::trim)
        .filter(|tool_id| !tool_id.is_empty())
        .map(str::to_string)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Tool Desktop" />
        <Meta name="description" content="Developer tools arranged as windows on a virtual desktop." />

        <Router>
            <main class="site-root">
                <Routes>
                    // One route for every path keeps the desktop mounted across deep links.
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let location = use_location();
    let initial_tool = Signal::derive(move || {
        location.query.with(|query| {
            location
                .pathname
                .with(|pathname| requested_tool(pathname, query.get("tool").map(String::as_str)))
        })
    });

    view! {
        <DesktopProvider initial_tool>
            <DesktopShell />
            <CommandPalette />
        </DesktopProvider>
    }
}
