//! Interceptors that own the side-effecting workflows

pub mod auth;
pub mod connection;

pub use auth::AuthMiddleware;
pub use connection::ConnectionMiddleware;
