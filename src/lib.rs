//! Playrange - inspect buffered media ranges from the command line
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod snapshot;
