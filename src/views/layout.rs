use crate::routes::Route;
use dioxus::prelude::*;

/// Content column shared by every page below the site header.
#[component]
pub fn PageLayout(
    #[props(default)] show_back_link: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: format_args!("page-layout {}", class),
            if show_back_link {
                Link { to: Route::Home {}, class: "back-link",
                    strong { "Back to Home" }
                }
            }
            {children}
        }
    }
}

/// Catch-all for paths outside the route table. Renders nothing.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");
    rsx! {}
}
