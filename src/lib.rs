//! Falling blocks (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the runner's
//! environment configuration and event log.

pub mod config;
pub mod event_log;

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;

pub use config::GameConfig;
pub use event_log::EventLog;
