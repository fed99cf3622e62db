//! Core: configuration, state and the HTTP server
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared handler state
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, DataSourceKind};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
