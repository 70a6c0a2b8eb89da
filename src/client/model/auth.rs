use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Session state of the visitor, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// Stores the user returned by a login or profile update.
    pub fn login(&mut self, user: UserDto) {
        self.inner.set(AuthState::Authenticated(user));
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Whether the session check has finished, successfully or not.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
