// ABOUTME: Tracing subscriber installation for the CLI
// ABOUTME: Env-filter driven, stderr output, safe to call more than once

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup.
//!
//! `RUST_LOG` controls verbosity through the standard env-filter syntax;
//! without it the crate logs at `info`. Diagnostics go to stderr so that
//! stdout stays clean for row output.

use tracing_subscriber::{fmt, EnvFilter};

/// Default directive when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. A second call is a no-op rather than an
/// error, so tests and embedding callers can both run `init` freely.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
