//! Realtime connection interceptor

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use crate::application::messaging::{Context, Dispatcher, Middleware, MiddlewareError, MiddlewareResult, Next};
use crate::application::store::select_pseudo;
use crate::domain::entities::{Command, Message};
use crate::domain::traits::{Session, Transport, SEND_MESSAGE_EVENT};

/// Outbound side of the session task; closed once the session ends
struct ConnectionHandle {
    outbound: mpsc::UnboundedSender<Message>,
}

impl ConnectionHandle {
    fn is_alive(&self) -> bool {
        !self.outbound.is_closed()
    }
}

/// Owns the realtime session and relays chat messages.
///
/// `SocketConnect` and `SocketSendMessage` are swallowed; every other
/// command is forwarded untouched.
pub struct ConnectionMiddleware {
    transport: Arc<dyn Transport>,
    handle: Mutex<Option<ConnectionHandle>>,
}

impl ConnectionMiddleware {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            handle: Mutex::new(None),
        }
    }

    fn connect(&self, ctx: &Context) -> MiddlewareResult {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| MiddlewareError::Internal(format!("No async runtime for connect: {}", e)))?;
        let mut handle = self.handle.lock()
            .map_err(|_| MiddlewareError::Internal("Lock poisoned".to_string()))?;

        if handle.as_ref().is_some_and(ConnectionHandle::is_alive) {
            tracing::info!("Already connected, ignoring connect");
            return Ok(());
        }

        let (outbound, queued) = mpsc::unbounded_channel();
        runtime.spawn(run_session(
            Arc::clone(&self.transport),
            queued,
            ctx.dispatcher().clone(),
        ));
        *handle = Some(ConnectionHandle { outbound });

        Ok(())
    }

    fn send(&self, ctx: &Context, text: String) -> MiddlewareResult {
        let guard = self.handle.lock()
            .map_err(|_| MiddlewareError::Internal("Lock poisoned".to_string()))?;
        let handle = guard.as_ref().ok_or(MiddlewareError::TransportUnavailable)?;

        let author = ctx.state().read(|state| select_pseudo(state).map(str::to_string))
            .ok_or(MiddlewareError::NotAuthenticated)?;

        let message = Message::new(text, author);
        tracing::debug!("Sending {}: {:?}", SEND_MESSAGE_EVENT, message);

        handle
            .outbound
            .send(message)
            .map_err(|_| MiddlewareError::TransportUnavailable)
    }
}

impl Middleware for ConnectionMiddleware {
    fn process(&self, ctx: &Context, command: Command, next: Next<'_>) -> MiddlewareResult {
        match command {
            Command::SocketConnect => self.connect(ctx),
            Command::SocketSendMessage(text) => self.send(ctx, text),
            other => next.run(ctx, other),
        }
    }
}

/// Open the session, then pump queued sends out and inbound messages back in
async fn run_session(
    transport: Arc<dyn Transport>,
    mut queued: mpsc::UnboundedReceiver<Message>,
    dispatcher: Dispatcher,
) {
    let Session { mut emitter, mut inbound } = match transport.connect().await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Connection failed: {}", e);
            drop_unsent(&mut queued);
            return;
        }
    };
    tracing::info!("Connected");

    loop {
        tokio::select! {
            outgoing = queued.recv() => match outgoing {
                Some(message) => {
                    if let Err(e) = emitter.emit(SEND_MESSAGE_EVENT, &message).await {
                        tracing::error!("Failed to send message: {}", e);
                    }
                }
                None => break,
            },
            incoming = inbound.recv() => match incoming {
                Some(message) => {
                    tracing::debug!("Received {}: {:?}", SEND_MESSAGE_EVENT, message);
                    dispatcher.dispatch(Command::AddMessage(message));
                }
                None => {
                    tracing::warn!("Session closed by peer");
                    break;
                }
            },
        }
    }
}

/// Close the send queue and discard what it still holds; later sends fail as unavailable
pub(super) fn drop_unsent(queued: &mut mpsc::UnboundedReceiver<Message>) -> usize {
    queued.close();

    let mut dropped = 0;
    while let Ok(message) = queued.try_recv() {
        tracing::warn!("Dropping unsent message: {:?}", message);
        dropped += 1;
    }
    dropped
}
