//! Locale-aware page routing shared by the client router and the server.
//!
//! English is the default locale and is served without a prefix (`/datasets/61`). Every
//! other locale is served under its code with a translated first path segment
//! (`/fr/jeux-de-donnees/61`). Segments after the first one (ids, tokens) are never
//! translated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Nl,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Nl, Locale::Fr, Locale::De];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Nl => "Nederlands",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::default()
    }

    fn column(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Nl => 1,
            Locale::Fr => 2,
            Locale::De => 3,
        }
    }
}

/// Canonical first segment followed by its translation per locale, in `Locale::ALL` order.
const SEGMENTS: &[[&str; 4]] = &[
    ["datasets", "datasets", "jeux-de-donnees", "datensaetze"],
    ["tasks", "taken", "taches", "aufgaben"],
    ["flows", "flows", "flux", "ablaeufe"],
    ["runs", "runs", "executions", "laeufe"],
    ["collections", "collecties", "collections", "sammlungen"],
    ["benchmarks", "benchmarks", "referentiels", "benchmarks"],
    ["measures", "maatstaven", "mesures", "metriken"],
    ["users", "gebruikers", "utilisateurs", "benutzer"],
    ["login", "inloggen", "connexion", "anmelden"],
    ["register", "registreren", "inscription", "registrieren"],
    [
        "forgot-password",
        "wachtwoord-vergeten",
        "mot-de-passe-oublie",
        "passwort-vergessen",
    ],
    [
        "reset-password",
        "wachtwoord-herstellen",
        "reinitialiser-mot-de-passe",
        "passwort-zuruecksetzen",
    ],
    [
        "confirm-email",
        "email-bevestigen",
        "confirmer-email",
        "email-bestaetigen",
    ],
    ["dashboard", "dashboard", "tableau-de-bord", "uebersicht"],
];

fn split(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Resolves a public path into its locale and canonical (English, unprefixed) path.
///
/// Returns `None` when the first page segment is not known in the path's locale.
pub fn resolve(path: &str) -> Option<(Locale, String)> {
    let segments = split(path);

    let (locale, rest) = match segments.first().and_then(|s| Locale::from_code(s)) {
        Some(locale) if !locale.is_default() => (locale, &segments[1..]),
        _ => (Locale::default(), &segments[..]),
    };

    let Some((first, tail)) = rest.split_first() else {
        return Some((locale, "/".to_string()));
    };

    let canonical = SEGMENTS
        .iter()
        .find(|row| row[locale.column()] == *first)
        .map(|row| row[0])?;

    let mut path = format!("/{}", canonical);
    for segment in tail {
        path.push('/');
        path.push_str(segment);
    }

    Some((locale, path))
}

/// Builds the public path of a canonical path in the given locale.
///
/// Unknown first segments are kept untranslated.
pub fn localize(canonical: &str, locale: Locale) -> String {
    let segments = split(canonical);

    let mut path = String::new();
    if !locale.is_default() {
        path.push('/');
        path.push_str(locale.code());
    }

    for (i, segment) in segments.iter().enumerate() {
        path.push('/');
        if i == 0 {
            let translated = SEGMENTS
                .iter()
                .find(|row| row[0] == *segment)
                .map(|row| row[locale.column()])
                .unwrap_or(segment);
            path.push_str(translated);
        } else {
            path.push_str(segment);
        }
    }

    if path.is_empty() {
        path.push('/');
    }

    path
}

/// Interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Datasets,
    Tasks,
    Flows,
    Runs,
    Collections,
    Benchmarks,
    Measures,
    Users,
    Login,
    Logout,
    Register,
    Dashboard,
    Search,
    UnderConstruction,
}

impl Text {
    pub fn get(&self, locale: Locale) -> &'static str {
        use Locale::*;
        use Text::*;

        match (self, locale) {
            (Datasets, En) => "Datasets",
            (Datasets, Nl) => "Datasets",
            (Datasets, Fr) => "Jeux de données",
            (Datasets, De) => "Datensätze",
            (Tasks, En) => "Tasks",
            (Tasks, Nl) => "Taken",
            (Tasks, Fr) => "Tâches",
            (Tasks, De) => "Aufgaben",
            (Flows, En) | (Flows, Nl) => "Flows",
            (Flows, Fr) => "Flux",
            (Flows, De) => "Abläufe",
            (Runs, En) | (Runs, Nl) => "Runs",
            (Runs, Fr) => "Exécutions",
            (Runs, De) => "Läufe",
            (Collections, En) | (Collections, Fr) => "Collections",
            (Collections, Nl) => "Collecties",
            (Collections, De) => "Sammlungen",
            (Benchmarks, Fr) => "Référentiels",
            (Benchmarks, _) => "Benchmarks",
            (Measures, En) => "Measures",
            (Measures, Nl) => "Maatstaven",
            (Measures, Fr) => "Mesures",
            (Measures, De) => "Metriken",
            (Users, En) => "Users",
            (Users, Nl) => "Gebruikers",
            (Users, Fr) => "Utilisateurs",
            (Users, De) => "Benutzer",
            (Login, En) => "Sign in",
            (Login, Nl) => "Inloggen",
            (Login, Fr) => "Connexion",
            (Login, De) => "Anmelden",
            (Logout, En) => "Sign out",
            (Logout, Nl) => "Uitloggen",
            (Logout, Fr) => "Déconnexion",
            (Logout, De) => "Abmelden",
            (Register, En) => "Create account",
            (Register, Nl) => "Account aanmaken",
            (Register, Fr) => "Créer un compte",
            (Register, De) => "Konto erstellen",
            (Dashboard, Fr) => "Tableau de bord",
            (Dashboard, De) => "Übersicht",
            (Dashboard, _) => "Dashboard",
            (Search, En) => "Search",
            (Search, Nl) => "Zoeken",
            (Search, Fr) => "Rechercher",
            (Search, De) => "Suchen",
            (UnderConstruction, En) => "This page is under construction.",
            (UnderConstruction, Nl) => "Deze pagina is in aanbouw.",
            (UnderConstruction, Fr) => "Cette page est en construction.",
            (UnderConstruction, De) => "Diese Seite befindet sich im Aufbau.",
        }
    }
}
