//! HTTP API and WebSocket session channel
//!
//! This module provides the service surface:
//! - GET /sessions/stream - WebSocket duplex channel for one session
//! - GET /sessions - List active session ids
//! - GET /sessions/:id - Query session statistics
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;
mod ws;

pub use routes::create_router;
pub use state::AppState;
