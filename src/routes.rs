use crate::content::page_head;
use crate::dom::DocumentHost;
use crate::ui::Shell;
use crate::views::{EcologistPost, Home, NotFound};
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/blog/ecologist-ai")]
        EcologistPost {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Exact lookup against the static route table; `None` when only the
    /// catch-all would match.
    pub fn from_path(path: &str) -> Option<Route> {
        match path.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => None,
            Ok(route) => Some(route),
        }
    }
}

/// Applies the page head and scrolls to the top on mount and whenever the
/// route changes. Seeing the same route again (a re-render without
/// navigation) does nothing.
#[derive(Debug, Default)]
pub struct NavigationObserver {
    last_route: Option<Route>,
}

impl NavigationObserver {
    pub fn observe(&mut self, route: &Route, host: &dyn DocumentHost) {
        if self.last_route.as_ref() == Some(route) {
            return;
        }
        tracing::debug!(
            from = ?self.last_route.as_ref().map(Route::to_string),
            to = %route,
            "route changed"
        );
        self.last_route = Some(route.clone());
        host.set_head(&page_head(route));
        host.scroll_to_origin();
    }
}
