//! Background fix-up for rendered mermaid diagrams.
//!
//! Mermaid draws its SVGs asynchronously and may redraw them, so the article
//! page watches the document for subtree mutations and re-applies a fixed
//! background to every `.mermaid svg` after each one. The watch belongs to
//! the page: it is acquired on mount and disconnected on unmount or drop.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub const DIAGRAM_BACKGROUND: &str = "#f8f9fa";
pub const DIAGRAM_SELECTOR: &str = ".mermaid svg";

pub trait MutationWatch {
    fn disconnect(&mut self);
}

/// A document that can keep its diagrams restyled.
pub trait DiagramSurface: 'static {
    type Watch: MutationWatch;

    /// Re-apply `background` to every diagram after each subtree mutation
    /// until the returned watch is disconnected.
    fn watch_diagrams(&self, background: &str) -> Self::Watch;
}

pub struct DiagramWatch<S: DiagramSurface> {
    watch: Option<S::Watch>,
}

impl<S: DiagramSurface> DiagramWatch<S> {
    pub fn start(surface: S) -> Self {
        let watch = surface.watch_diagrams(DIAGRAM_BACKGROUND);
        tracing::debug!("diagram watch started");
        Self { watch: Some(watch) }
    }

    /// Disconnect the watch. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(mut watch) = self.watch.take() {
            watch.disconnect();
            tracing::debug!("diagram watch disposed");
        }
    }
}

impl<S: DiagramSurface> Drop for DiagramWatch<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Hold a diagram watch for as long as the calling component is mounted.
pub fn use_diagram_watch<S: DiagramSurface>(surface: impl FnOnce() -> S) {
    let watch = use_hook(|| Rc::new(RefCell::new(DiagramWatch::start(surface()))));
    use_drop(move || watch.borrow_mut().dispose());
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{DIAGRAM_SELECTOR, DiagramSurface, MutationWatch};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserSurface;

    pub struct BrowserWatch {
        observer: Option<web_sys::MutationObserver>,
        _callback: Option<Closure<dyn FnMut()>>,
    }

    impl MutationWatch for BrowserWatch {
        fn disconnect(&mut self) {
            if let Some(observer) = self.observer.take() {
                observer.disconnect();
            }
            self._callback = None;
        }
    }

    fn restyle(background: &str) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(DIAGRAM_SELECTOR) else {
            return;
        };
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            if let Ok(svg) = node.dyn_into::<web_sys::SvgElement>() {
                let _ = svg.style().set_property("background-color", background);
            }
        }
    }

    impl DiagramSurface for BrowserSurface {
        type Watch = BrowserWatch;

        fn watch_diagrams(&self, background: &str) -> BrowserWatch {
            let background = background.to_string();
            let closure = Closure::<dyn FnMut()>::new(move || restyle(&background));
            let body = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body());
            let observer = body.and_then(|body| {
                let observer =
                    web_sys::MutationObserver::new(closure.as_ref().unchecked_ref()).ok()?;
                let init = web_sys::MutationObserverInit::new();
                init.set_child_list(true);
                init.set_subtree(true);
                observer.observe_with_options(&body, &init).ok()?;
                Some(observer)
            });
            if observer.is_none() {
                tracing::warn!("could not observe document body for diagram updates");
            }
            BrowserWatch {
                observer,
                _callback: Some(closure),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use super::{DIAGRAM_SELECTOR, DiagramSurface, MutationWatch};

    /// Webview renderers cannot call back into Rust from a DOM observer, so
    /// the observer and its restyle step run as an injected script and are
    /// torn down the same way.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WebviewSurface;

    pub struct WebviewWatch {
        connected: bool,
    }

    impl MutationWatch for WebviewWatch {
        fn disconnect(&mut self) {
            if std::mem::take(&mut self.connected) {
                let _ = dioxus::document::eval(
                    "if (window.__folioDiagramWatch) { window.__folioDiagramWatch.disconnect(); window.__folioDiagramWatch = null; }",
                );
            }
        }
    }

    pub(super) fn watch_script(background: &str) -> String {
        format!(
            r#"
if (window.__folioDiagramWatch) {{ window.__folioDiagramWatch.disconnect(); }}
window.__folioDiagramWatch = new MutationObserver(() => {{
    document.querySelectorAll('{selector}').forEach((svg) => {{
        svg.style.backgroundColor = '{background}';
    }});
}});
window.__folioDiagramWatch.observe(document.body, {{ childList: true, subtree: true }});
"#,
            selector = DIAGRAM_SELECTOR,
            background = background,
        )
    }

    impl DiagramSurface for WebviewSurface {
        type Watch = WebviewWatch;

        fn watch_diagrams(&self, background: &str) -> WebviewWatch {
            let _ = dioxus::document::eval(&watch_script(background));
            WebviewWatch { connected: true }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserSurface as PlatformSurface, BrowserWatch};
#[cfg(not(target_arch = "wasm32"))]
pub use webview::{WebviewSurface as PlatformSurface, WebviewWatch};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Weak;

    #[derive(Default)]
    struct Page {
        listeners: RefCell<Vec<(usize, Rc<dyn Fn()>)>>,
        next_id: Cell<usize>,
        restyles: Cell<usize>,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<Page>);

    impl PartialEq for FakeSurface {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    struct FakeWatch {
        page: Rc<Page>,
        id: usize,
    }

    impl MutationWatch for FakeWatch {
        fn disconnect(&mut self) {
            self.page
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }

    impl DiagramSurface for FakeSurface {
        type Watch = FakeWatch;

        fn watch_diagrams(&self, background: &str) -> FakeWatch {
            assert_eq!(background, DIAGRAM_BACKGROUND);
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            let page: Weak<Page> = Rc::downgrade(&self.0);
            self.0.listeners.borrow_mut().push((
                id,
                Rc::new(move || {
                    if let Some(page) = page.upgrade() {
                        page.restyles.set(page.restyles.get() + 1);
                    }
                }),
            ));
            FakeWatch {
                page: self.0.clone(),
                id,
            }
        }
    }

    impl FakeSurface {
        fn mutate(&self) {
            let listeners: Vec<_> = self
                .0
                .listeners
                .borrow()
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect();
            for listener in listeners {
                listener();
            }
        }

        fn restyles(&self) -> usize {
            self.0.restyles.get()
        }

        fn listener_count(&self) -> usize {
            self.0.listeners.borrow().len()
        }
    }

    #[test]
    fn test_mutation_restyles_while_active() {
        let surface = FakeSurface::default();
        let _watch = DiagramWatch::start(surface.clone());
        surface.mutate();
        surface.mutate();
        assert_eq!(surface.restyles(), 2);
    }

    #[test]
    fn test_dispose_stops_restyling() {
        let surface = FakeSurface::default();
        let mut watch = DiagramWatch::start(surface.clone());
        watch.dispose();
        watch.dispose();
        surface.mutate();
        assert_eq!(surface.restyles(), 0);
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_drop_disconnects() {
        let surface = FakeSurface::default();
        {
            let _watch = DiagramWatch::start(surface.clone());
            surface.mutate();
        }
        surface.mutate();
        assert_eq!(surface.restyles(), 1);
        assert_eq!(surface.listener_count(), 0);
    }

    #[derive(Props, Clone, PartialEq)]
    struct DiagramPageProps {
        surface: FakeSurface,
    }

    #[allow(non_snake_case)]
    fn DiagramPage(props: DiagramPageProps) -> Element {
        let surface = props.surface.clone();
        use_diagram_watch(move || surface);
        rsx! {
            pre { class: "mermaid", "graph TD" }
        }
    }

    #[test]
    fn test_watch_lives_as_long_as_the_page() {
        let surface = FakeSurface::default();
        let mut dom = VirtualDom::new_with_props(
            DiagramPage,
            DiagramPageProps {
                surface: surface.clone(),
            },
        );
        dom.rebuild_in_place();

        assert_eq!(surface.listener_count(), 1, "acquired on mount");
        surface.mutate();
        assert_eq!(surface.restyles(), 1);

        drop(dom);

        assert_eq!(surface.listener_count(), 0, "released on unmount");
        surface.mutate();
        assert_eq!(surface.restyles(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_webview_script_restyles_in_page() {
        let script = webview::watch_script(DIAGRAM_BACKGROUND);
        assert!(script.contains("new MutationObserver"));
        assert!(script.contains(DIAGRAM_SELECTOR));
        assert!(script.contains(DIAGRAM_BACKGROUND));
    }
}
