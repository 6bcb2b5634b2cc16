//! HTTP API: server, routing, and request/response mapping.

pub mod app;
pub mod context;

pub use app::build_app;
pub use context::AppContext;
