//! Library surface of the clipflow CLI.
//!
//! The binary in `main.rs` is a thin wrapper over these modules; exposing
//! them as a library lets the integration tests drive the command
//! implementations directly.

pub mod cli;
pub mod commands;
pub mod output;
