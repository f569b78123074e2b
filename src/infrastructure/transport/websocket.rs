//! WebSocket transport

use async_trait::async_trait;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::application::errors::TransportError;
use crate::domain::entities::Message;
use crate::domain::traits::{Emitter, Session, Transport};
use super::frame;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, WsMessage>;

/// Opens chat sessions over a WebSocket
pub struct WebSocketTransport {
    url: String,
}

impl WebSocketTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Transport for WebSocketTransport {
    async fn connect(&self) -> Result<Session, TransportError> {
        let (stream, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| TransportError::Connect(format!("{}: {}", self.url, e)))?;
        let (sink, mut reader) = stream.split();
        let (inbound_tx, inbound) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(incoming) = reader.next().await {
                match incoming {
                    Ok(WsMessage::Text(text)) => match frame::decode_message(&text) {
                        Ok(Some(message)) => {
                            if inbound_tx.send(message).is_err() {
                                break;
                            }
                        }
                        Ok(None) => tracing::debug!("Ignoring event: {}", text),
                        Err(e) => tracing::warn!("Undecodable frame: {}", e),
                    },
                    Ok(WsMessage::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!("WebSocket read failed: {}", e);
                        break;
                    }
                }
            }
        });

        Ok(Session {
            emitter: Box::new(WebSocketEmitter { sink }),
            inbound,
        })
    }
}

struct WebSocketEmitter {
    sink: WsSink,
}

#[async_trait]
impl Emitter for WebSocketEmitter {
    async fn emit(&mut self, event: &str, message: &Message) -> Result<(), TransportError> {
        let text = frame::encode(event, message)
            .map_err(|e| TransportError::Send(e.to_string()))?;
        self.sink
            .send(WsMessage::Text(text))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }
}
