//! Integration tests for the folio site
//!
//! Covers theme persistence, routing, page heads and the content registry

use folio::dom::HeadlessHost;
use folio::prefs::{FileStore, MemoryStore, PreferenceStore};
use folio::routes::{NavigationObserver, Route};
use folio::theme::ThemeController;
use folio::types::ThemeMode;
use std::rc::Rc;

mod storage_tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::at(dir.path().join("nested").join("theme"));

        assert_eq!(store.read(), None);
        store.write(ThemeMode::Dark);
        assert_eq!(store.read(), Some(ThemeMode::Dark));
        store.write(ThemeMode::Light);
        assert_eq!(store.read(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_file_store_ignores_corrupt_value() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("theme");
        std::fs::write(&path, "sepia").expect("Failed to seed file");

        assert_eq!(FileStore::at(&path).read(), None);
    }

    #[test]
    fn test_file_store_tolerates_whitespace() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("theme");
        std::fs::write(&path, "dark\n").expect("Failed to seed file");

        assert_eq!(FileStore::at(&path).read(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_rejected_write_keeps_previous_value() {
        let store = MemoryStore::rejecting();
        store.write(ThemeMode::Dark);
        assert_eq!(store.read(), None);
    }
}

mod theme_tests {
    use super::*;

    #[test]
    fn test_theme_survives_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("theme");

        let host = Rc::new(HeadlessHost::new());
        let mut controller = ThemeController::boot(Rc::new(FileStore::at(&path)), host.clone());
        assert_eq!(controller.mode(), ThemeMode::Light);
        controller.toggle();

        // Fresh session with an OS preference that disagrees.
        let host = Rc::new(HeadlessHost::with_os_preference(false));
        let controller = ThemeController::boot(Rc::new(FileStore::at(&path)), host.clone());
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert_eq!(host.theme_attribute(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_toggle_parity() {
        let store = Rc::new(MemoryStore::new());
        let host = Rc::new(HeadlessHost::with_os_preference(true));
        let mut controller = ThemeController::boot(store.clone(), host.clone());
        assert_eq!(controller.mode(), ThemeMode::Dark);

        for _ in 0..4 {
            controller.toggle();
        }
        assert_eq!(controller.mode(), ThemeMode::Dark);
        controller.toggle();
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(store.raw().as_deref(), Some("light"));
        assert_eq!(host.theme_attribute(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_toggle_still_applies_when_storage_rejects() {
        let store = Rc::new(MemoryStore::rejecting());
        let host = Rc::new(HeadlessHost::new());
        let mut controller = ThemeController::boot(store, host.clone());

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(host.theme_attribute(), Some(ThemeMode::Dark));
    }
}

mod routing_tests {
    use super::*;
    use folio::content;

    #[test]
    fn test_known_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Home {}));
        assert_eq!(
            Route::from_path("/blog/ecologist-ai"),
            Some(Route::EcologistPost {})
        );
        assert_eq!(Route::from_path("/blog/unknown"), None);
    }

    #[test]
    fn test_navigation_scrolls_to_top() {
        let host = HeadlessHost::new();
        let mut observer = NavigationObserver::default();

        observer.observe(&Route::Home {}, &host);
        observer.observe(&Route::EcologistPost {}, &host);
        observer.observe(&Route::EcologistPost {}, &host);
        observer.observe(&Route::Home {}, &host);

        assert_eq!(host.scroll_count(), 3);
    }

    #[test]
    fn test_back_to_home_restores_site_head() {
        let host = HeadlessHost::new();
        let mut observer = NavigationObserver::default();

        observer.observe(&Route::Home {}, &host);
        observer.observe(&Route::EcologistPost {}, &host);
        let article = host.page_head().expect("head applied");
        assert_eq!(article.title, content::ECOLOGIST_TITLE);

        observer.observe(&Route::Home {}, &host);
        let home = host.page_head().expect("head applied");
        assert_eq!(home.title, content::SITE_TITLE);
        assert_eq!(home.description, content::SITE_DESCRIPTION);
    }
}

mod content_tests {
    use folio::content::{self, GREETINGS};
    use folio::routes::Route;
    use folio::views::home::post_entries;

    #[test]
    fn test_greeting_is_one_of_the_list() {
        assert!(GREETINGS.contains(&content::greeting()));
        assert_eq!(content::greeting(), content::greeting());
    }

    #[test]
    fn test_home_lists_every_post() {
        let entries = post_entries(content::posts());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].route, Route::EcologistPost {});
        assert_eq!(entries[0].href, "/blog/ecologist-ai");
        assert!(entries[0].summary.ends_with("[...]"));
    }
}
