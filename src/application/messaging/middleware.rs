//! Middleware system for the command dispatch pipeline

use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::{mpsc, watch};
use crate::domain::entities::{AppState, Command};
use crate::domain::traits::Reducer;

/// Read access to the store's state tree
#[derive(Debug, Clone)]
pub struct StateHandle {
    inner: Arc<RwLock<AppState>>,
}

impl StateHandle {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Snapshot of the current state
    pub fn get_state(&self) -> AppState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn apply(&self, reducer: &dyn Reducer, command: &Command) -> AppState {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        reducer.reduce(&mut state, command);
        state.clone()
    }
}

/// Queues commands into the chain's entry point.
///
/// Every queued command later runs as a fresh pass through the full chain,
/// never inside the pass that queued it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<Command>,
}

impl Dispatcher {
    pub(crate) fn new(sender: mpsc::UnboundedSender<Command>) -> Self {
        Self { sender }
    }

    pub fn dispatch(&self, command: Command) {
        let kind = command.kind();
        if self.sender.send(command).is_err() {
            tracing::warn!("[{}] Store is gone, command dropped", kind);
        }
    }

    /// True once the store has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Context passed through middleware chain
#[derive(Debug, Clone)]
pub struct Context {
    state: StateHandle,
    dispatcher: Dispatcher,
}

impl Context {
    pub fn new(state: StateHandle, dispatcher: Dispatcher) -> Self {
        Self { state, dispatcher }
    }

    pub fn get_state(&self) -> AppState {
        self.state.get_state()
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    /// Queue a new top-level command
    pub fn dispatch(&self, command: Command) {
        self.dispatcher.dispatch(command);
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

/// Middleware trait - interceptors that may forward, transform, swallow or emit commands
pub trait Middleware: Send + Sync {
    /// Handle one command. Calling `next.run` zero or more times decides
    /// what reaches the state-update stage.
    fn process(&self, ctx: &Context, command: Command, next: Next<'_>) -> MiddlewareResult;
}

/// Result of middleware processing
pub type MiddlewareResult = Result<(), MiddlewareError>;

/// Middleware errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlewareError {
    /// A send was attempted with no connection
    TransportUnavailable,
    /// A send was attempted before login
    NotAuthenticated,
    /// Internal error
    Internal(String),
}

impl std::fmt::Display for MiddlewareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MiddlewareError::TransportUnavailable => write!(f, "Transport unavailable: no open connection"),
            MiddlewareError::NotAuthenticated => write!(f, "Not authenticated: no pseudo to send as"),
            MiddlewareError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MiddlewareError {}

/// The end of the chain: applies commands to the state tree
pub(crate) struct Commit {
    state: StateHandle,
    reducer: Arc<dyn Reducer>,
    changes: watch::Sender<AppState>,
}

impl Commit {
    pub(crate) fn new(state: StateHandle, reducer: Arc<dyn Reducer>) -> Self {
        let (changes, _) = watch::channel(state.get_state());
        Self {
            state,
            reducer,
            changes,
        }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<AppState> {
        self.changes.subscribe()
    }

    fn apply(&self, command: &Command) {
        let next_state = self.state.apply(self.reducer.as_ref(), command);
        self.changes.send_replace(next_state);
    }
}

/// Next middleware in chain
#[derive(Clone, Copy)]
pub struct Next<'a> {
    remaining: &'a [Arc<dyn Middleware>],
    commit: &'a Commit,
}

impl<'a> Next<'a> {
    pub(crate) fn new(middlewares: &'a [Arc<dyn Middleware>], commit: &'a Commit) -> Self {
        Self {
            remaining: middlewares,
            commit,
        }
    }

    /// Process remaining middleware, then the state-update stage
    pub fn run(self, ctx: &Context, command: Command) -> MiddlewareResult {
        if let Some((first, rest)) = self.remaining.split_first() {
            let next = Next::new(rest, self.commit);
            first.process(ctx, command, next)
        } else {
            self.commit.apply(&command);
            Ok(())
        }
    }
}

/// Middleware chain builder
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Vec<Arc<dyn Middleware>> {
        self.middlewares
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Logging middleware for debugging
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn process(&self, ctx: &Context, command: Command, next: Next<'_>) -> MiddlewareResult {
        let kind = command.kind();
        tracing::debug!("[{}] dispatching", kind);

        let result = next.run(ctx, command);

        if let Err(e) = &result {
            tracing::warn!("[{}] Error: {}", kind, e);
        }

        result
    }
}
