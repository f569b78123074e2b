//! Store - Routes commands through middleware to the state-update stage

use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use crate::application::store::AppReducer;
use crate::domain::entities::{AppState, Command};
use crate::domain::traits::Reducer;
use super::middleware::{
    Commit, Context, Dispatcher, Middleware, MiddlewareChain, MiddlewareResult, Next, StateHandle,
};

/// Builds a [`Store`]; middleware runs in the order it is added
pub struct StoreBuilder {
    state: AppState,
    reducer: Arc<dyn Reducer>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            reducer: Arc::new(AppReducer),
            middleware: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = state;
        self
    }

    pub fn with_reducer<R: Reducer + 'static>(mut self, reducer: R) -> Self {
        self.reducer = Arc::new(reducer);
        self
    }

    /// Add middleware to the chain
    pub fn with_middleware<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Append a prebuilt chain
    pub fn with_chain(mut self, chain: MiddlewareChain) -> Self {
        self.middleware.extend(chain.build());
        self
    }

    pub fn build(self) -> Store {
        let (sender, receiver) = mpsc::unbounded_channel();
        let state = StateHandle::new(self.state);
        let commit = Commit::new(state.clone(), self.reducer);
        let ctx = Context::new(state, Dispatcher::new(sender));

        Store {
            middleware: self.middleware,
            commit,
            ctx,
            receiver,
        }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the state tree and the middleware chain wrapped around `dispatch`
pub struct Store {
    middleware: Vec<Arc<dyn Middleware>>,
    commit: Commit,
    ctx: Context,
    receiver: mpsc::UnboundedReceiver<Command>,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Run one pass of `command` through the chain
    pub fn dispatch(&self, command: Command) -> MiddlewareResult {
        Next::new(&self.middleware, &self.commit).run(&self.ctx, command)
    }

    /// Handle for queueing commands from outside the current pass
    pub fn dispatcher(&self) -> Dispatcher {
        self.ctx.dispatcher().clone()
    }

    pub fn state(&self) -> StateHandle {
        self.ctx.state().clone()
    }

    pub fn get_state(&self) -> AppState {
        self.ctx.get_state()
    }

    /// Receives the new state after every committed command
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.commit.subscribe()
    }

    /// Wait for the next queued command and dispatch it
    pub async fn next_queued(&mut self) -> Option<MiddlewareResult> {
        let command = self.receiver.recv().await?;
        Some(self.dispatch(command))
    }

    /// Dispatch every command queued so far without waiting for more
    pub fn drain_queued(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(command) = self.receiver.try_recv() {
            if let Err(e) = self.dispatch(command) {
                tracing::debug!("Queued command failed: {}", e);
            }
            processed += 1;
        }
        processed
    }

    /// Process queued commands until `shutdown` completes
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Store shutting down");
                    break;
                }
                Some(result) = self.next_queued() => {
                    if let Err(e) = result {
                        tracing::debug!("Queued command failed: {}", e);
                    }
                }
            }
        }
    }
}
