// ABOUTME: Error taxonomy for the meal lookup pipeline
// ABOUTME: Transport, fetch-exhaustion, and parse errors with structured context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! # Pipeline Error Types
//!
//! The taxonomy mirrors how failures surface to the caller:
//!
//! - [`TransportError`]: one candidate endpoint failed; recovered internally
//!   by advancing to the next candidate, never surfaced on its own.
//! - [`FetchError`]: every candidate failed; terminal, carries the last
//!   observed detail.
//! - [`ParseError`]: the fetched body is not a well-formed meal payload.
//!   Distinct from the upstream "no data for this date" answer, which is a
//!   valid empty result, not an error.
//! - [`MealServiceError`]: umbrella type returned by the pipeline entry
//!   point.
//!
//! An unrecognized allergy code is never an error: the annotator degrades to
//! the raw numeric label.

/// Fallback detail used when exhaustion happens without a captured error
pub const UNKNOWN_ERROR_DETAIL: &str = "unknown error";

/// Failure of a single candidate endpoint request
///
/// Recovered locally by the fetch orchestrator, which advances to the next
/// candidate. Only the last one's rendered detail survives into
/// [`FetchError::AllEndpointsFailed`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// The request failed below the HTTP layer (DNS, connect, timeout, body read)
    #[error("transport failure: {detail}")]
    Connection {
        /// Human-readable description of the underlying failure
        detail: String,
    },

    /// The endpoint answered, but with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Truncated response body for diagnostics
        body: String,
    },
}

/// Terminal fetch failure
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Every candidate endpoint was tried in order and all of them failed
    #[error("all candidate endpoints failed; last error: {detail}")]
    AllEndpointsFailed {
        /// Detail of the most recent candidate failure
        detail: String,
    },
}

impl FetchError {
    /// Build the exhaustion error from the last captured candidate failure,
    /// falling back to a generic marker when nothing was captured.
    #[must_use]
    pub fn exhausted(last: Option<TransportError>) -> Self {
        Self::AllEndpointsFailed {
            detail: last.map_or_else(|| UNKNOWN_ERROR_DETAIL.to_owned(), |e| e.to_string()),
        }
    }
}

/// Failure to interpret a fetched body as a meal payload
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The document could not be read as well-formed XML
    #[error("malformed meal payload: {reason}")]
    Malformed {
        /// Description of the well-formedness violation
        reason: String,
    },
}

/// Umbrella error returned by the pipeline entry point
#[derive(Debug, Clone, thiserror::Error)]
pub enum MealServiceError {
    /// All candidate endpoints were exhausted
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched payload was malformed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_carries_last_detail() {
        let err = FetchError::exhausted(Some(TransportError::Status {
            status: 503,
            body: "unavailable".to_owned(),
        }));
        let FetchError::AllEndpointsFailed { detail } = err;
        assert_eq!(detail, "unexpected status 503: unavailable");
    }

    #[test]
    fn test_exhausted_without_detail_uses_generic_marker() {
        let FetchError::AllEndpointsFailed { detail } = FetchError::exhausted(None);
        assert_eq!(detail, UNKNOWN_ERROR_DETAIL);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Malformed {
            reason: "unexpected end of document".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "malformed meal payload: unexpected end of document"
        );
    }
}
