use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    auth::{ConfirmEmail, ForgotPassword, Login, Register, ResetPassword},
    catalog::{
        BenchmarkDetail, BenchmarkSearch, CollectionDetail, CollectionSearch, DatasetDetail,
        DatasetSearch, FlowDetail, FlowSearch, MeasureDetail, MeasureSearch, RunDetail,
        RunSearch, TaskDetail, TaskSearch, UserProfile, UserSearch,
    },
    Dashboard, Home, Localized,
};

/// Canonical (English, unprefixed) routes.
///
/// Paths of other locales fall through to `Localized`, which maps them back onto
/// these routes.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/datasets")]
    DatasetSearch {},
    #[route("/datasets/:id")]
    DatasetDetail { id: String },

    #[route("/tasks")]
    TaskSearch {},
    #[route("/tasks/:id")]
    TaskDetail { id: String },

    #[route("/flows")]
    FlowSearch {},
    #[route("/flows/:id")]
    FlowDetail { id: String },

    #[route("/runs")]
    RunSearch {},
    #[route("/runs/:id")]
    RunDetail { id: String },

    #[route("/collections")]
    CollectionSearch {},
    #[route("/collections/:id")]
    CollectionDetail { id: String },

    #[route("/benchmarks")]
    BenchmarkSearch {},
    #[route("/benchmarks/:id")]
    BenchmarkDetail { id: String },

    #[route("/measures")]
    MeasureSearch {},
    #[route("/measures/:id")]
    MeasureDetail { id: String },

    #[route("/users")]
    UserSearch {},
    #[route("/users/:id")]
    UserProfile { id: String },

    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[route("/confirm-email/:token")]
    ConfirmEmail { token: String },

    #[layout(RequiresLoggedIn)]
    #[route("/dashboard")]
    Dashboard {},
    #[end_layout]

    #[route("/:..segments")]
    Localized { segments: Vec<String> },
}
