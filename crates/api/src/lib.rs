//! Portfolio API server library.
//!
//! Exposes the building blocks (config, state, error handling, project
//! operations, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod actions;
pub mod config;
pub mod error;
pub mod handlers;
pub mod listing_cache;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
