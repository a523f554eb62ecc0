//! Document-level side effects: the root theme attribute, the page title and
//! description, the OS colour scheme query and window scrolling.

use crate::types::{PageHead, ThemeMode};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Attribute on `<html>` that the palette CSS keys on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

const DESCRIPTION_SELECTOR: &str = "meta[name=\"description\"]";

pub trait DocumentHost {
    fn set_theme_attribute(&self, mode: ThemeMode);

    /// Replace the document title and the content of the one description
    /// meta, creating that meta if the page has none.
    fn set_head(&self, head: &PageHead);

    /// `Some(true)` when the OS reports a dark colour scheme, `None` when
    /// the platform cannot tell.
    fn prefers_dark(&self) -> Option<bool>;

    /// Best-effort scroll to the top-left corner.
    fn scroll_to_origin(&self);
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
impl DocumentHost for BrowserHost {
    fn set_theme_attribute(&self, mode: ThemeMode) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        match root {
            Some(root) => {
                if root.set_attribute(THEME_ATTRIBUTE, mode.as_str()).is_err() {
                    tracing::warn!(%mode, "failed to set theme attribute");
                }
            }
            None => tracing::warn!("no document element to theme"),
        }
    }

    fn set_head(&self, head: &PageHead) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        document.set_title(&head.title);

        let meta = match document.query_selector(DESCRIPTION_SELECTOR) {
            Ok(Some(meta)) => Some(meta),
            _ => document.create_element("meta").ok().and_then(|meta| {
                meta.set_attribute("name", "description").ok()?;
                document.head()?.append_child(&meta).ok()?;
                Some(meta)
            }),
        };
        let applied = meta
            .is_some_and(|meta| meta.set_attribute("content", &head.description).is_ok());
        if !applied {
            tracing::warn!(title = %head.title, "failed to update description meta");
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
    }

    fn scroll_to_origin(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Desktop and mobile renderers run inside a webview; side effects are sent
/// as scripts. The colour scheme query is asynchronous there, so it reports
/// unknown.
#[cfg(not(target_arch = "wasm32"))]
pub struct WebviewHost;

#[cfg(not(target_arch = "wasm32"))]
impl DocumentHost for WebviewHost {
    fn set_theme_attribute(&self, mode: ThemeMode) {
        let _ = dioxus::document::eval(&format!(
            "document.documentElement.setAttribute('{}', '{}');",
            THEME_ATTRIBUTE,
            mode.as_str()
        ));
    }

    fn set_head(&self, head: &PageHead) {
        let (Ok(title), Ok(description)) = (
            serde_json::to_string(&head.title),
            serde_json::to_string(&head.description),
        ) else {
            return;
        };
        let _ = dioxus::document::eval(&format!(
            r#"
document.title = {title};
let meta = document.querySelector('{selector}');
if (!meta) {{
    meta = document.createElement('meta');
    meta.setAttribute('name', 'description');
    document.head.appendChild(meta);
}}
meta.setAttribute('content', {description});
"#,
            title = title,
            description = description,
            selector = DESCRIPTION_SELECTOR,
        ));
    }

    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn scroll_to_origin(&self) {
        let _ = dioxus::document::eval("window.scrollTo(0, 0);");
    }
}

/// Host with no document behind it. Records what would have been applied.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    prefers_dark: Option<bool>,
    attribute: RefCell<Option<ThemeMode>>,
    head: RefCell<Option<PageHead>>,
    scrolls: Cell<usize>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_os_preference(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Some(prefers_dark),
            ..Self::default()
        }
    }

    pub fn theme_attribute(&self) -> Option<ThemeMode> {
        *self.attribute.borrow()
    }

    pub fn page_head(&self) -> Option<PageHead> {
        self.head.borrow().clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.get()
    }
}

impl DocumentHost for HeadlessHost {
    fn set_theme_attribute(&self, mode: ThemeMode) {
        *self.attribute.borrow_mut() = Some(mode);
    }

    fn set_head(&self, head: &PageHead) {
        *self.head.borrow_mut() = Some(head.clone());
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn scroll_to_origin(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

/// The document host for the current platform.
pub fn platform_host() -> Rc<dyn DocumentHost> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserHost)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(WebviewHost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_host_records_effects() {
        let host = HeadlessHost::with_os_preference(true);
        assert_eq!(host.prefers_dark(), Some(true));
        assert_eq!(host.theme_attribute(), None);

        host.set_theme_attribute(ThemeMode::Dark);
        host.scroll_to_origin();
        host.scroll_to_origin();

        assert_eq!(host.theme_attribute(), Some(ThemeMode::Dark));
        assert_eq!(host.scroll_count(), 2);
    }

    #[test]
    fn test_headless_host_default_has_no_os_preference() {
        assert_eq!(HeadlessHost::new().prefers_dark(), None);
    }
}
