//! Pages under a locale prefix (`/fr/jeux-de-donnees/61`).
//!
//! The path is mapped back onto its canonical route, whose page is rendered in place so
//! the localized address stays in the location bar.

use dioxus::prelude::*;

use crate::{
    client::{
        component::LoginGuard,
        route::{
            auth::{ConfirmEmail, ForgotPassword, Login, Register, ResetPassword},
            catalog::*,
            Dashboard, Home, NotFound,
        },
        router::Route,
    },
    i18n,
};

/// Canonical route of a localized path, `None` for unknown or unprefixed paths.
pub fn canonical_route(segments: &[String]) -> Option<Route> {
    let (locale, canonical) = i18n::resolve(&format!("/{}", segments.join("/")))?;

    // Default locale paths are canonical routes already; reaching here means unknown.
    if locale.is_default() {
        return None;
    }

    match canonical.parse::<Route>() {
        Ok(Route::Localized { .. }) | Err(_) => None,
        Ok(route) => Some(route),
    }
}

#[component]
pub fn Localized(segments: Vec<String>) -> Element {
    let Some(route) = canonical_route(&segments) else {
        return rsx! { NotFound {} };
    };

    match route {
        Route::Home {} => rsx! { Home {} },
        Route::DatasetSearch {} => rsx! { DatasetSearch {} },
        Route::DatasetDetail { id } => rsx! { DatasetDetail { id } },
        Route::TaskSearch {} => rsx! { TaskSearch {} },
        Route::TaskDetail { id } => rsx! { TaskDetail { id } },
        Route::FlowSearch {} => rsx! { FlowSearch {} },
        Route::FlowDetail { id } => rsx! { FlowDetail { id } },
        Route::RunSearch {} => rsx! { RunSearch {} },
        Route::RunDetail { id } => rsx! { RunDetail { id } },
        Route::CollectionSearch {} => rsx! { CollectionSearch {} },
        Route::CollectionDetail { id } => rsx! { CollectionDetail { id } },
        Route::BenchmarkSearch {} => rsx! { BenchmarkSearch {} },
        Route::BenchmarkDetail { id } => rsx! { BenchmarkDetail { id } },
        Route::MeasureSearch {} => rsx! { MeasureSearch {} },
        Route::MeasureDetail { id } => rsx! { MeasureDetail { id } },
        Route::UserSearch {} => rsx! { UserSearch {} },
        Route::UserProfile { id } => rsx! { UserProfile { id } },
        Route::Login {} => rsx! { Login {} },
        Route::Register {} => rsx! { Register {} },
        Route::ForgotPassword {} => rsx! { ForgotPassword {} },
        Route::ResetPassword { token } => rsx! { ResetPassword { token } },
        Route::ConfirmEmail { token } => rsx! { ConfirmEmail { token } },
        Route::Dashboard {} => rsx! { LoginGuard { Dashboard {} } },
        Route::Localized { .. } => rsx! { NotFound {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &str) -> Vec<String> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn translated_path_maps_to_canonical_route() {
        assert_eq!(
            canonical_route(&segments("/fr/jeux-de-donnees/61")),
            Some(Route::DatasetDetail { id: "61".to_string() })
        );
        assert_eq!(
            canonical_route(&segments("/nl/wachtwoord-herstellen/abc")),
            Some(Route::ResetPassword { token: "abc".to_string() })
        );
    }

    #[test]
    fn locale_root_is_home() {
        assert_eq!(canonical_route(&segments("/de")), Some(Route::Home {}));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(canonical_route(&segments("/fr/datasets")), None);
        assert_eq!(canonical_route(&segments("/nothing/here")), None);
        assert_eq!(canonical_route(&segments("/fr/jeux-de-donnees/61/extra")), None);
    }
}
