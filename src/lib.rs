//! Greeting service library.
//!
//! Exposes configuration loading, router construction, and shutdown
//! handling, shared by the `greeting-service` binary and the integration
//! tests.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod shutdown;
