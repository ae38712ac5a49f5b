//! CLI integration tests for deflist.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (render, parse)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Config discovery

mod common;
mod parse;
mod render;
