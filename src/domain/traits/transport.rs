use async_trait::async_trait;
use tokio::sync::mpsc;
use crate::domain::entities::Message;
use crate::application::errors::TransportError;

/// Event name used for chat messages in both directions
pub const SEND_MESSAGE_EVENT: &str = "send_message";

/// Outbound half of an open session
#[async_trait]
pub trait Emitter: Send {
    async fn emit(&mut self, event: &str, message: &Message) -> Result<(), TransportError>;
}

/// An open realtime session.
///
/// `inbound` yields every `send_message` event delivered by the peer and
/// closes when the session ends.
pub struct Session {
    pub emitter: Box<dyn Emitter>,
    pub inbound: mpsc::UnboundedReceiver<Message>,
}

/// Transport trait - opens persistent bidirectional sessions
#[async_trait]
pub trait Transport: Send + Sync {
    async fn connect(&self) -> Result<Session, TransportError>;
}
