//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Auth: HTTP login client
//! - Transport: WebSocket chat sessions
//! - Adapters: Console front end

pub mod adapters;
pub mod auth;
pub mod config;
pub mod transport;
