#![deny(unsafe_code)]
//! SYNTHEIA console entry point.
//!
//! Prints the startup sequence to standard output and exits 0.
//! The process reads no arguments and no environment variables for
//! behavior; `RUST_LOG` only tunes stderr diagnostics and never touches
//! stdout.

mod error;

use error::CliResult;
use std::io::Write;
use syntheia_config::SyntheiaConfig;
use syntheia_genesis::render_startup;
use syntheia_identity::Identity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("syntheia: {}", e);
        std::process::exit(1);
    }
}

// Diagnostics go to stderr; stdout carries only the banner.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run() -> CliResult<()> {
    let identity = Identity::sentinella();
    let config = SyntheiaConfig::default();
    tracing::debug!(identity = %identity, "rendering startup sequence");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_startup(&mut out, &identity, &config)?;
    out.flush()?;
    Ok(())
}
