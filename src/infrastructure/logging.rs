// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Structured logging setup.
//!
//! Thin wrapper over `tracing-subscriber`: log level comes from `RUST_LOG`
//! when set, otherwise from the verbose flag. Verbose mode also makes the
//! tool adapters mirror the external programs' output into the log.

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when present (including per-module directives such as
/// `RUST_LOG=picel::infrastructure=debug`); otherwise `--verbose` selects
/// `debug` and the default is `info`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_ansi(true))
        .init();
}
