//! Command pipeline for a realtime chat client.
//!
//! Commands from the front end pass through an ordered middleware chain
//! before reaching the state-update stage. Two interceptors own the side
//! effects: [`AuthMiddleware`](application::interceptors::AuthMiddleware)
//! runs the login exchange, and
//! [`ConnectionMiddleware`](application::interceptors::ConnectionMiddleware)
//! owns the realtime session and relays chat messages.

pub mod application;
pub mod domain;
pub mod infrastructure;
