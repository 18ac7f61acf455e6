// ABOUTME: Logging configuration and structured logging setup for the binary
// ABOUTME: EnvFilter-driven tracing subscriber with a sensible default level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Logging initialization.
//!
//! The library only emits `tracing` events; the binary decides how they are
//! rendered. `RUST_LOG` takes precedence over the requested default level.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error when a subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
