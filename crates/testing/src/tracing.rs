// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

/// Install a test subscriber rendering resolver traces to stderr.
///
/// The filter honors `RUST_LOG` (e.g. `RUST_LOG=nestql_engine=trace` to
/// watch every resolution step); installing twice is a no-op so any test
/// may call this first.
pub fn init() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}
