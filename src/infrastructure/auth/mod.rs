//! Authentication adapters

pub mod http;

pub use http::HttpAuthenticator;
