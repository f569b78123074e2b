//! Domain entities - Core business objects with no external dependencies

pub mod auth;
pub mod command;
pub mod message;
pub mod state;

pub use auth::{AuthData, AuthOutcome, AuthResponse};
pub use command::{Command, SettingsField};
pub use message::Message;
pub use state::{AppState, Chat, Settings};
