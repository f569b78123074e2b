//! Field accessors over the state tree

use crate::domain::entities::AppState;

pub fn select_email(state: &AppState) -> &str {
    &state.settings.email
}

pub fn select_password(state: &AppState) -> &str {
    &state.settings.password
}

pub fn select_pseudo(state: &AppState) -> Option<&str> {
    state.settings.pseudo.as_deref()
}
