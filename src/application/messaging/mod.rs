//! Command handling - Middleware pipeline around the store

pub mod dispatcher;
pub mod middleware;
pub mod parser;

pub use dispatcher::{Store, StoreBuilder};
pub use middleware::{
    Context, Dispatcher, LoggingMiddleware, Middleware, MiddlewareChain, MiddlewareError,
    MiddlewareResult, Next, StateHandle,
};
pub use parser::{Input, InputParser};
