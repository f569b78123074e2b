//! Realtime transport adapters

pub mod frame;
pub mod websocket;

pub use websocket::WebSocketTransport;
