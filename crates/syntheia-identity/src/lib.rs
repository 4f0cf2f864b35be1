#![deny(unsafe_code)]
//! # syntheia-identity
//!
//! The SENTINELLA identity record: the immutable aggregate of name, version,
//! and purpose strings the system reports about itself at startup.
//!
//! The record is constructed once per run from literal constants, passed by
//! value to whoever renders it, and never mutated.

pub mod identity;

pub use identity::{Identity, Purpose};
