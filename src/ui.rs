use crate::config::config;
use crate::dom::platform_host;
use crate::routes::{NavigationObserver, Route};
use crate::theme::{PALETTE_CSS, use_theme_provider};
use crate::views::ThemeToggle;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const FOLIO_CSS: Asset = asset!("/assets/folio.css");

const AUTHOR: &str = "Ming Jie Wong";
const LICENSE_URL: &str = "https://creativecommons.org/licenses/by/4.0/";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/ming-jie-wong/";
const HUGGINGFACE_URL: &str = "https://huggingface.co/mjwong";
const GITHUB_URL: &str = "https://github.com/mingjiewong";

#[component]
pub fn App() -> Element {
    use_theme_provider();

    rsx! {
        ThemeStyles {}
        Router::<Route> {}
    }
}

#[component]
fn ThemeStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FOLIO_CSS }
        document::Meta { name: "author", content: AUTHOR }
        style { dangerous_inner_html: PALETTE_CSS }
    }
}

/// Layout wrapped around every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        RouteEffects {}
        div { class: "site",
            div { class: "site-column",
                SiteHeader {}
                main { class: "site-main", Outlet::<Route> {} }
                SiteFooter {}
            }
        }
    }
}

/// Applies the page head and resets the window scroll position on mount and
/// on every route change.
#[component]
fn RouteEffects() -> Element {
    let route = use_route::<Route>();
    let observer = use_hook(|| Rc::new(RefCell::new(NavigationObserver::default())));
    let host = use_hook(platform_host);

    use_effect(use_reactive!(|route| {
        observer.borrow_mut().observe(&route, host.as_ref());
    }));

    rsx! {}
}

#[component]
fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            ThemeToggle {}
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let year = time::OffsetDateTime::now_utc().year();
    let resume = config().asset_url("resume.pdf");

    rsx! {
        footer { class: "site-footer",
            p { class: "footer-license",
                "© {year}, {AUTHOR}. "
                a { href: LICENSE_URL, target: "_blank", rel: "noreferrer", "CC BY 4.0." }
            }
            nav { class: "footer-links",
                a { href: resume, target: "_blank", rel: "noreferrer", aria_label: "Resume", "Resume" }
                a { href: LINKEDIN_URL, target: "_blank", rel: "noreferrer", aria_label: "LinkedIn", "LinkedIn" }
                a { href: HUGGINGFACE_URL, target: "_blank", rel: "noreferrer", aria_label: "HuggingFace", "HuggingFace" }
                a { href: GITHUB_URL, target: "_blank", rel: "noreferrer", aria_label: "GitHub", "GitHub" }
            }
        }
    }
}
