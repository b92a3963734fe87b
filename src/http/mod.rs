//! HTTP server module.
//!
//! Serves the router over plain HTTP with graceful shutdown on SIGTERM/SIGINT.
//! The service is expected to run behind a reverse proxy or in a container,
//! so TLS termination happens upstream.

mod server;
mod shutdown;

pub use server::start_server;
