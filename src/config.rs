// ABOUTME: Environment-based service configuration for the meal lookup pipeline
// ABOUTME: Institution identifiers, endpoint list, timeouts, and the allergy table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Service configuration.
//!
//! One immutable structure built at process start and passed by reference
//! through the pipeline. Values come from the environment with typed
//! defaults; invalid values log a warning and fall back rather than abort.

use std::env;

use tracing::warn;

use crate::constants::api;
use crate::models::AllergyTable;
use crate::providers::ProxyEndpoint;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Immutable pipeline configuration, constructed once at process start
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upstream meal service base URL
    pub base_url: String,
    /// Education office code (first institution identifier)
    pub office_code: String,
    /// School code (second institution identifier)
    pub school_code: String,
    /// Candidate endpoints in trial priority order
    pub proxies: Vec<ProxyEndpoint>,
    /// Per-request timeout for candidate endpoint calls
    pub request_timeout_secs: u64,
    /// Connection timeout for candidate endpoint calls
    pub connect_timeout_secs: u64,
    /// Code-to-allergen lookup table, never mutated after construction
    pub allergy_table: AllergyTable,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_owned(),
            office_code: api::DEFAULT_OFFICE_CODE.to_owned(),
            school_code: api::DEFAULT_SCHOOL_CODE.to_owned(),
            proxies: ProxyEndpoint::default_candidates(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            allergy_table: AllergyTable::standard(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment
    ///
    /// Recognized variables:
    /// - `DOSIRAK_BASE_URL`: upstream endpoint override
    /// - `DOSIRAK_OFFICE_CODE` / `DOSIRAK_SCHOOL_CODE`: institution identifiers
    /// - `DOSIRAK_REQUEST_TIMEOUT_SECS` / `DOSIRAK_CONNECT_TIMEOUT_SECS`
    ///
    /// Unset variables keep their defaults; unparseable numeric values warn
    /// and keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = env::var("DOSIRAK_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = env::var("DOSIRAK_OFFICE_CODE") {
            config.office_code = value;
        }
        if let Ok(value) = env::var("DOSIRAK_SCHOOL_CODE") {
            config.school_code = value;
        }
        config.request_timeout_secs =
            env_u64("DOSIRAK_REQUEST_TIMEOUT_SECS", config.request_timeout_secs);
        config.connect_timeout_secs =
            env_u64("DOSIRAK_CONNECT_TIMEOUT_SECS", config.connect_timeout_secs);

        config
    }
}

/// Read a u64 environment variable, keeping the default on absence or parse failure
fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Err(_) => default,
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "ignoring unparseable numeric environment value");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_upstream_contract() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, api::BASE_URL);
        assert_eq!(config.office_code, "J10");
        assert_eq!(config.school_code, "7530478");
        assert_eq!(config.proxies.len(), 3);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_env_u64_default_when_absent() {
        assert_eq!(env_u64("DOSIRAK_TEST_UNSET_VARIABLE", 42), 42);
    }

    #[test]
    fn test_env_overrides_applied() {
        env::set_var("DOSIRAK_BASE_URL", "https://example.test/meals");
        env::set_var("DOSIRAK_OFFICE_CODE", "B10");
        env::set_var("DOSIRAK_SCHOOL_CODE", "1234567");
        env::set_var("DOSIRAK_REQUEST_TIMEOUT_SECS", "5");
        env::set_var("DOSIRAK_CONNECT_TIMEOUT_SECS", "not-a-number");

        let config = ServiceConfig::from_env();

        env::remove_var("DOSIRAK_BASE_URL");
        env::remove_var("DOSIRAK_OFFICE_CODE");
        env::remove_var("DOSIRAK_SCHOOL_CODE");
        env::remove_var("DOSIRAK_REQUEST_TIMEOUT_SECS");
        env::remove_var("DOSIRAK_CONNECT_TIMEOUT_SECS");

        assert_eq!(config.base_url, "https://example.test/meals");
        assert_eq!(config.office_code, "B10");
        assert_eq!(config.school_code, "1234567");
        assert_eq!(config.request_timeout_secs, 5);
        // Unparseable numeric keeps the default
        assert_eq!(config.connect_timeout_secs, 10);
    }
}
