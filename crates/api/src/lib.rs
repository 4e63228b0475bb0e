//! hookgate API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! forwarding) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod forward;
pub mod router;
pub mod routes;
pub mod state;
