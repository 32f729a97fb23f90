// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logging bootstrap for binaries and tests embedding Bildwerk.

use tracing_subscriber::EnvFilter;

/// Install a formatted `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. `"info"`)
/// is used. Calling this more than once is harmless: later calls leave the
/// first subscriber in place.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A global subscriber may already be installed by the host application.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
