use crate::config::config;
use crate::dom::{DocumentHost, platform_host};
use crate::prefs::{PreferenceStore, platform_store};
use crate::types::ThemeMode;
use dioxus::prelude::*;
use std::rc::Rc;

pub struct ThemeDefinition {
    pub toggle_class: &'static str,
    pub toggle_glyph: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            toggle_class: "theme-toggle theme-toggle-dark",
            toggle_glyph: "\u{2600}",
        },
        ThemeMode::Light => ThemeDefinition {
            toggle_class: "theme-toggle",
            toggle_glyph: "\u{263E}",
        },
    }
}

/// Picks the boot theme: stored choice, then the OS scheme, then light.
pub fn resolve_initial(stored: Option<ThemeMode>, prefers_dark: Option<bool>) -> ThemeMode {
    stored
        .or_else(|| prefers_dark.map(|dark| if dark { ThemeMode::Dark } else { ThemeMode::Light }))
        .unwrap_or_default()
}

/// Owns the current theme and keeps the root attribute and the preference
/// store in step with it.
pub struct ThemeController {
    mode: ThemeMode,
    store: Rc<dyn PreferenceStore>,
    host: Rc<dyn DocumentHost>,
}

impl ThemeController {
    pub fn boot(store: Rc<dyn PreferenceStore>, host: Rc<dyn DocumentHost>) -> Self {
        let stored = store.read();
        let mode = resolve_initial(stored, host.prefers_dark());
        host.set_theme_attribute(mode);
        tracing::debug!(%mode, from_storage = stored.is_some(), "theme booted");
        Self { mode, store, host }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip light/dark, apply the attribute, then persist.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.host.set_theme_attribute(self.mode);
        self.store.write(self.mode);
        tracing::info!(mode = %self.mode, "theme toggled");
        self.mode
    }
}

/// Shared handle to the app's theme, provided once at the root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.controller.read().mode()
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.controller.write().toggle()
    }
}

pub fn use_theme_provider() -> ThemeContext {
    use_context_provider(|| {
        let store = platform_store(&config().theme_key);
        ThemeContext {
            controller: Signal::new(ThemeController::boot(store, platform_host())),
        }
    })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

pub const PALETTE_CSS: &str = r#"
:root,
:root[data-theme="light"] {
    --background: #ffffff;
    --background-raised: #f8f9fa;
    --foreground: #111111;
    --foreground-muted: #3f3f46;
    --text-strong: #000000;
    --border: #d4d4d8;
    --muted: #f4f4f5;
    --ring: #a1a1aa;
    --link: #1d4ed8;
    --code-bg: #ffffff;
    --code-stripe: #f3f4f6;
    --quote-border: #a1a1aa;
    color-scheme: light;
}
:root[data-theme="dark"] {
    --background: #0b0b0c;
    --background-raised: #18181b;
    --foreground: #e4e4e7;
    --foreground-muted: #d4d4d8;
    --text-strong: #ffffff;
    --border: #3f3f46;
    --muted: #27272a;
    --ring: #71717a;
    --link: #93c5fd;
    --code-bg: #18181b;
    --code-stripe: #1f1f23;
    --quote-border: #71717a;
    color-scheme: dark;
}
body { background: var(--background); color: var(--foreground); }
"#;
