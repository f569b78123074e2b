//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Command, Message, AppState)
//! - Traits: Abstractions for infrastructure (Authenticator, Transport, Reducer)

pub mod entities;
pub mod traits;
