//! Centralized Fluent UI System Icon abstraction for the desktop shell.
//!
//! Shell components and tool descriptors refer to icons by semantic name or by string token;
//! this module owns the single SVG renderer. Paths follow the regular 24px Fluent set.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components and tool descriptors.
pub enum IconName {
    /// Source code brackets.
    Code,
    /// AI / generative sparkle.
    Sparkle,
    /// Text document.
    DocumentText,
    /// Terminal / developer console.
    Terminal,
    /// Settings gear.
    Settings,
    /// Network / API connection.
    Connect,
    /// Checkmark, used for validators.
    Checkmark,
    /// Dock launcher glyph and generic tool fallback.
    Launcher,
    /// Taskbar multi-window glyph.
    WindowMultiple,
    /// Minimized-window status glyph.
    DesktopArrowDown,
    /// Window minimize control.
    WindowMinimize,
    /// Dismiss/close control.
    Dismiss,
    /// Warning triangle for inline errors.
    Warning,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [IconName; 13] = [
        Self::Code,
        Self::Sparkle,
        Self::DocumentText,
        Self::Terminal,
        Self::Settings,
        Self::Connect,
        Self::Checkmark,
        Self::Launcher,
        Self::WindowMultiple,
        Self::DesktopArrowDown,
        Self::WindowMinimize,
        Self::Dismiss,
        Self::Warning,
    ];

    /// Stable token used for CSS hooks, manifests and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Sparkle => "sparkle",
            Self::DocumentText => "document-text",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
            Self::Connect => "connect",
            Self::Checkmark => "checkmark",
            Self::Launcher => "launcher",
            Self::WindowMultiple => "window-multiple",
            Self::DesktopArrowDown => "desktop-arrow-down",
            Self::WindowMinimize => "window-minimize",
            Self::Dismiss => "dismiss",
            Self::Warning => "warning",
        }
    }

    /// Parses a manifest icon token.
    pub fn from_token(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == raw.trim())
    }

    /// Parses a manifest icon token, falling back to [`IconName::Launcher`].
    pub fn from_token_or_default(raw: &str) -> Self {
        Self::from_token(raw).unwrap_or(Self::Launcher)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Code => {
                r#"<path d="M8.06 6.5a.75.75 0 0 1 .02 1.06L3.8 12l4.28 4.44a.75.75 0 0 1-1.08 1.04l-4.78-4.96a.75.75 0 0 1 0-1.04l4.78-4.96a.75.75 0 0 1 1.06-.02Zm7.88 0a.75.75 0 0 1 1.06.02l4.78 4.96c.28.29.28.75 0 1.04L17 17.48a.75.75 0 1 1-1.08-1.04L20.2 12l-4.28-4.44a.75.75 0 0 1 .02-1.06Z"/>"#
            }
            Self::Sparkle => {
                r#"<path d="M8.66 15.66a2.87 2.87 0 0 1 .69 1.11l.45 1.38a.54.54 0 0 0 1.02 0l.45-1.38a2.84 2.84 0 0 1 1.8-1.8l1.38-.44a.54.54 0 0 0 0-1.03h-.03l-1.38-.45a2.84 2.84 0 0 1-1.8-1.8l-.45-1.38a.54.54 0 0 0-1.03 0l-.45 1.38-.01.03a2.84 2.84 0 0 1-1.76 1.77l-1.38.44a.54.54 0 0 0 0 1.03l1.38.45c.42.14.8.37 1.11.69Zm8.12 4.55-.76-.25a1.58 1.58 0 0 1-1-1l-.25-.76a.3.3 0 0 0-.57 0l-.25.77a1.58 1.58 0 0 1-.98 1l-.77.24a.3.3 0 0 0 0 .57l.77.25a1.58 1.58 0 0 1 1 1l.24.77a.3.3 0 0 0 .58 0l.24-.77a1.58 1.58 0 0 1 1-1l.77-.24a.3.3 0 0 0 0-.57h-.02ZM18.78 2.21l-.76-.25a1.58 1.58 0 0 1-1-1L16.77.2a.3.3 0 0 0-.57 0l-.25.77a1.58 1.58 0 0 1-.98 1l-.77.24a.3.3 0 0 0 0 .57l.77.25a1.58 1.58 0 0 1 1 1l.24.77a.3.3 0 0 0 .58 0l.24-.77a1.58 1.58 0 0 1 1-1l.77-.24a.3.3 0 0 0 0-.57h-.02Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM4.5 8.5v9.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V8.5h-15Zm15-1.5v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7h15Zm-8.72 4.28-2.47 2.47 2.47 2.47a.75.75 0 1 1-1.06 1.06l-3-3a.75.75 0 0 1 0-1.06l3-3a.75.75 0 1 1 1.06 1.06Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-1 6a3 3 0 1 0 0 6 3 3 0 0 0 0-6Z"/>"#
            }
            Self::Connect => {
                r#"<path d="M19.49 5.57a5.97 5.97 0 0 1-1.9 8.96c-.64.35-1.42.14-1.94-.38l-5.8-5.8c-.52-.52-.73-1.3-.38-1.95a6 6 0 0 1 8.96-1.89l2.29-2.29a.75.75 0 1 1 1.06 1.06l-2.29 2.3ZM3.28 21.78l2.3-2.29a5.97 5.97 0 0 0 8.95-1.9c.35-.64.14-1.42-.38-1.94l-5.8-5.8c-.52-.52-1.3-.73-1.95-.38a6 6 0 0 0-1.89 8.96l-2.29 2.29a.75.75 0 1 0 1.06 1.06Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75V7h-15v-.75Zm0 2.25h15v9.25c0 .97-.78 1.75-1.75 1.75H6.25c-.97 0-1.75-.78-1.75-1.75V8.5Z"/>"#
            }
            Self::WindowMultiple => {
                r#"<path d="M19 6.01c1.68.13 3 1.53 3 3.24v8A4.75 4.75 0 0 1 17.25 22h-8a3.25 3.25 0 0 1-3.24-3h1.51c.12.85.85 1.5 1.73 1.5h8c1.8 0 3.25-1.46 3.25-3.25v-8c0-.88-.65-1.6-1.5-1.73V6.01ZM14.75 2C16.55 2 18 3.46 18 5.25v9.5c0 1.8-1.46 3.25-3.25 3.25h-9.5A3.25 3.25 0 0 1 2 14.75v-9.5C2 3.45 3.46 2 5.25 2h9.5ZM3.5 14.75c0 .97.78 1.75 1.75 1.75h9.5c.97 0 1.75-.78 1.75-1.75V7.5h-13v7.25ZM5.25 3.5c-.97 0-1.75.78-1.75 1.75V6h13v-.75c0-.97-.78-1.75-1.75-1.75h-9.5Z"/>"#
            }
            Self::DesktopArrowDown => {
                r#"<path d="M23 6.5a5.5 5.5 0 1 1-11 0 5.5 5.5 0 0 1 11 0Zm-5-3a.5.5 0 0 0-1 0v4.8l-1.65-1.65a.5.5 0 0 0-.7.7l2.5 2.5c.2.2.5.2.7 0l2.5-2.5a.5.5 0 0 0-.7-.7L18 8.29V3.5Zm2.5 12.25v-3.48a6.52 6.52 0 0 0 1.5-1.08v4.56c0 1.2-.93 2.17-2.1 2.25h-4.4v2.5h1.75a.75.75 0 0 1 .1 1.5H6.75a.75.75 0 0 1-.1-1.5H8.5V18H4.25c-1.2 0-2.17-.92-2.24-2.1L2 15.76V5.25c0-1.2.93-2.17 2.1-2.25h7.92c-.3.46-.53.97-.7 1.5H4.24c-.38 0-.7.28-.74.65l-.01.1v10.5c0 .38.28.7.65.74l.1.01h15.5c.38 0 .7-.28.74-.65v-.1ZM14 18h-4v2.5h4V18Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M10.91 2.78a1.25 1.25 0 0 1 2.18 0l8.7 15.38A1.25 1.25 0 0 1 20.7 20H3.3a1.25 1.25 0 0 1-1.09-1.84l8.7-15.38ZM12 4.1 3.72 18.5h16.56L12 4.1Zm0 10.9a1 1 0 1 1 0 2 1 1 0 0 1 0-2Zm0-6.5c.41 0 .75.34.75.75v4.5a.75.75 0 0 1-1.5 0v-4.5c0-.41.34-.75.75-.75Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 16px standard icon (titlebars/taskbar).
    #[default]
    Sm,
    /// 20px medium icon.
    Md,
    /// 24px large icon (dock launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized shell icon catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
