//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Messaging: Middleware chain, store, input parsing
//! - Interceptors: Login and realtime connection workflows
//! - Store: Default state-update stage and selectors

pub mod errors;
pub mod interceptors;
pub mod messaging;
pub mod store;
