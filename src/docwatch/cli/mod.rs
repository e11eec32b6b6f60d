//! # CLI Layer
//!
//! This module is **one possible UI client** for docwatch, not the application
//! itself. It is the only place that:
//! - parses arguments (clap)
//! - writes to stdout/stderr and decides exit codes
//! - asks for interactive confirmation
//! - installs the tracing subscriber
//!
//! Running `docwatch` with no subcommand lists documents.
//!
//! ## Module Structure
//!
//! - `setup`: Argument definitions
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Tables, status badges and messages
//! - `logging`: tracing-subscriber wiring for `-v`/`RUST_LOG`

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
