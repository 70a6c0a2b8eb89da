//! Locale of the page being rendered.
//!
//! Canonical routes are English. Prefixed paths land on `Route::Localized`, whose path
//! carries the locale, so the active locale is derived from the current route instead of
//! being stored.

use dioxus::prelude::*;

use crate::{
    client::router::Route,
    i18n::{self, Locale},
};

/// Locale of a route.
pub fn route_locale(route: &Route) -> Locale {
    match route {
        Route::Localized { segments } => i18n::resolve(&format!("/{}", segments.join("/")))
            .map(|(locale, _)| locale)
            .unwrap_or_default(),
        _ => Locale::default(),
    }
}

/// Locale of the current page.
pub fn use_locale() -> Locale {
    let route = use_route::<Route>();
    route_locale(&route)
}

/// Canonical path of a route, used to switch the locale of the current page.
pub fn canonical_path(route: &Route) -> String {
    match route {
        Route::Localized { segments } => i18n::resolve(&format!("/{}", segments.join("/")))
            .map(|(_, path)| path)
            .unwrap_or_else(|| "/".to_string()),
        route => route.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localized(path: &str) -> Route {
        Route::Localized {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    #[test]
    fn canonical_routes_are_english() {
        let route = Route::DatasetDetail { id: "61".to_string() };

        assert_eq!(route_locale(&route), Locale::En);
        assert_eq!(canonical_path(&route), "/datasets/61");
    }

    #[test]
    fn prefixed_route_carries_its_locale() {
        let route = localized("/de/aufgaben/31");

        assert_eq!(route_locale(&route), Locale::De);
        assert_eq!(canonical_path(&route), "/tasks/31");
    }

    #[test]
    fn unknown_path_falls_back_to_home_in_default_locale() {
        let route = localized("/xx/nothing");

        assert_eq!(route_locale(&route), Locale::En);
        assert_eq!(canonical_path(&route), "/");
    }
}
