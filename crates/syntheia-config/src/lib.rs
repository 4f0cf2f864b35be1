#![deny(unsafe_code)]
//! # syntheia-config
//!
//! Configuration data for the SENTINELLA system:
//!
//! - input source taxonomy and the accept/block lists
//! - the watcher roster
//! - self-development rules
//! - harmonic parameters
//!
//! This crate carries configuration only. Nothing here scores, enforces, or
//! rejects anything; the lists and thresholds are data consumed elsewhere.

pub mod config;
pub mod source;
pub mod watcher;

pub use config::SyntheiaConfig;
pub use source::InputSource;
pub use watcher::Watcher;
