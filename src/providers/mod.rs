// ABOUTME: HTTP transport seam and candidate proxy endpoints for meal payload fetching
// ABOUTME: Defines the MealTransport trait and its reqwest-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Transport abstractions for reaching the upstream meal API.
//!
//! The orchestrator in [`fetch`] never talks to the network directly; it
//! drives a [`MealTransport`], which keeps the sequential-fallback logic a
//! pure ordered iteration that tests can exercise with a fake transport.

use async_trait::async_trait;

use crate::constants::proxies;
use crate::errors::TransportError;

/// Sequential-fallback fetch orchestration
pub mod fetch;
/// Shared HTTP client with configured timeouts
pub mod http_client;

pub use fetch::{build_query_url, fetch_meal_payload};

/// Maximum response-body length kept in a status-failure detail
const STATUS_BODY_SNIPPET_LEN: usize = 200;

/// One GET request, one text body
///
/// Implementations must not retry internally: retry-by-priority across
/// candidates is the orchestrator's job, and a candidate that failed is never
/// tried again.
#[async_trait]
pub trait MealTransport: Send + Sync {
    /// Issue a single GET request and return the response body text
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Connection`] when the request fails below
    /// the HTTP layer and [`TransportError::Status`] for a non-success status.
    async fn get_text(&self, url: &str) -> Result<String, TransportError>;
}

/// Production transport backed by the shared reqwest client
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    /// Create a new transport over the shared client
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MealTransport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String, TransportError> {
        let response = http_client::shared_client()
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_snippet(&body, STATUS_BODY_SNIPPET_LEN),
            });
        }

        response.text().await.map_err(|e| TransportError::Connection {
            detail: e.to_string(),
        })
    }
}

/// An intermediary endpoint that wraps the canonical upstream URL
///
/// Candidates are tried in list order; each one either percent-encodes the
/// target into a query parameter or appends it verbatim to its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    /// Short name used in logs
    pub name: &'static str,
    prefix: &'static str,
    encode_target: bool,
}

impl ProxyEndpoint {
    /// Create a candidate endpoint
    #[must_use]
    pub const fn new(name: &'static str, prefix: &'static str, encode_target: bool) -> Self {
        Self {
            name,
            prefix,
            encode_target,
        }
    }

    /// The fixed candidate list, in trial priority order
    #[must_use]
    pub fn default_candidates() -> Vec<Self> {
        vec![
            Self::new("allorigins", proxies::ALLORIGINS_PREFIX, true),
            Self::new("corsproxy", proxies::CORSPROXY_PREFIX, true),
            Self::new("cors-anywhere", proxies::CORS_ANYWHERE_PREFIX, false),
        ]
    }

    /// Wrap the canonical target URL for this endpoint
    #[must_use]
    pub fn wrap(&self, target: &str) -> String {
        if self.encode_target {
            format!("{}{}", self.prefix, urlencoding::encode(target))
        } else {
            format!("{}{target}", self.prefix)
        }
    }
}

/// Truncate a body to a diagnostic snippet without splitting a character
fn truncate_snippet(body: &str, max_len: usize) -> String {
    if body.len() <= max_len {
        return body.to_owned();
    }
    let mut end = max_len;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
