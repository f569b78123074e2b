use crate::domain::entities::{AppState, Command};

/// The state-update stage at the end of the middleware chain
pub trait Reducer: Send + Sync {
    /// Apply a committed command to the state tree
    fn reduce(&self, state: &mut AppState, command: &Command);
}
