use crate::theme::{theme_definition, use_theme};
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let definition = theme_definition(theme.mode());

    rsx! {
        button {
            class: definition.toggle_class,
            r#type: "button",
            aria_label: "Toggle theme",
            title: "Toggle theme",
            onclick: move |_| {
                theme.toggle();
            },
            span { class: "theme-toggle-glyph", aria_hidden: "true", "{definition.toggle_glyph}" }
        }
    }
}
