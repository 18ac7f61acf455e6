// ABOUTME: Shared HTTP client used for all candidate endpoint requests
// ABOUTME: Built once per process with the service-configured timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use crate::config::ServiceConfig;

/// Shared HTTP client; one per process, connection-pooled
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Build the shared client for the configured endpoints
///
/// Call once at process start, before the first query. When skipped, the
/// first use of [`shared_client`] builds one from the config defaults.
pub fn initialize_shared_client(config: &ServiceConfig) {
    let _ = SHARED_CLIENT.set(build_client(config));
}

/// The process-wide HTTP client for candidate endpoint requests
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| build_client(&ServiceConfig::default()))
}

fn build_client(config: &ServiceConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_then_reuse_is_stable() {
        let config = ServiceConfig::default();
        initialize_shared_client(&config);
        // A second init is a no-op and later lookups reuse the same client
        initialize_shared_client(&config);
        let first = std::ptr::from_ref(shared_client());
        let second = std::ptr::from_ref(shared_client());
        assert_eq!(first, second);
    }
}
