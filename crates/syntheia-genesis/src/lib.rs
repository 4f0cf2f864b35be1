#![deny(unsafe_code)]
//! # syntheia-genesis
//!
//! Startup banner rendering. Turns the identity record and system
//! configuration into the fixed line sequence written to standard output
//! when the system boots.
//!
//! All renderers are writer-generic so tests can capture output; write
//! failures propagate unhandled.

pub mod banner;

pub use banner::{
    render_boot_only, render_closing, render_genesis_block, render_startup, render_system_banner,
};
