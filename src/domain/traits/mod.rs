//! Domain traits - Abstractions for infrastructure implementations

pub mod auth;
pub mod reducer;
pub mod transport;

pub use auth::Authenticator;
pub use reducer::Reducer;
pub use transport::{Emitter, Session, Transport, SEND_MESSAGE_EVENT};
