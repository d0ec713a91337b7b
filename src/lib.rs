//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `blockfall::{core,input,term,types}` and
//! hosts the pieces that glue them into a game: configuration and the
//! per-frame loop.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod runner;

pub use config::Config;
pub use runner::{finish_session, Flow, Runner};
