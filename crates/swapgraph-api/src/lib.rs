//! swapgraph-api: HTTP API layer for SwapGraph
//!
//! Exposes the resolver operations as JSON endpoints for the swap frontend.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{AppState, StateError};
