// ABOUTME: Sequential-fallback fetch orchestration for the daily meal payload
// ABOUTME: Builds the canonical upstream query URL and tries candidate endpoints in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Fetch orchestrator.
//!
//! One query, one canonical upstream URL, an ordered list of candidate
//! endpoints wrapping it. Candidates are tried strictly one after another;
//! the first usable body short-circuits the trial. This is
//! trial-by-priority, not a race: a later candidate is only attempted after
//! an earlier one has conclusively failed, so at most one request is in
//! flight at any time.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::constants::api;
use crate::errors::{FetchError, TransportError};
use crate::formatters::format_request_date;
use crate::providers::MealTransport;

/// Build the canonical upstream query URL for one date
///
/// Fixed institution identifiers, XML response format, and a single page
/// sized to hold all of a day's records. The key parameter is sent blank;
/// key management is outside this tool's scope.
#[must_use]
pub fn build_query_url(config: &ServiceConfig, date: NaiveDate) -> String {
    format!(
        "{}?KEY=&Type={}&pIndex={}&pSize={}&ATPT_OFCDC_SC_CODE={}&SD_SCHUL_CODE={}&MLSV_YMD={}",
        config.base_url,
        api::RESPONSE_TYPE,
        api::PAGE_INDEX,
        api::PAGE_SIZE,
        config.office_code,
        config.school_code,
        format_request_date(date),
    )
}

/// Fetch the raw meal payload for one date
///
/// Tries each configured candidate endpoint in order, returning the first
/// successful response body. A failed candidate is never retried; there is
/// no backoff and no parallelism.
///
/// # Errors
///
/// Returns [`FetchError::AllEndpointsFailed`] carrying the most recent
/// candidate failure detail once the list is exhausted.
pub async fn fetch_meal_payload<T: MealTransport>(
    transport: &T,
    config: &ServiceConfig,
    date: NaiveDate,
) -> Result<String, FetchError> {
    let target = build_query_url(config, date);
    debug!(url = %target, "fetching meal payload");

    let mut last_failure: Option<TransportError> = None;

    for candidate in &config.proxies {
        let url = candidate.wrap(&target);
        match transport.get_text(&url).await {
            Ok(body) => {
                debug!(candidate = candidate.name, "candidate endpoint succeeded");
                return Ok(body);
            }
            Err(failure) => {
                warn!(candidate = candidate.name, %failure, "candidate endpoint failed");
                last_failure = Some(failure);
            }
        }
    }

    Err(FetchError::exhausted(last_failure))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_shape() {
        let config = ServiceConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");
        let url = build_query_url(&config, date);
        assert!(url.starts_with("https://open.neis.go.kr/hub/mealServiceDietInfo?KEY=&Type=xml"));
        assert!(url.contains("pIndex=1"));
        assert!(url.contains("pSize=100"));
        assert!(url.contains("ATPT_OFCDC_SC_CODE=J10"));
        assert!(url.contains("SD_SCHUL_CODE=7530478"));
        assert!(url.ends_with("MLSV_YMD=20250305"));
    }

    #[test]
    fn test_query_url_uses_configured_institution() {
        let config = ServiceConfig {
            office_code: "B10".to_owned(),
            school_code: "1234567".to_owned(),
            ..ServiceConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 12, 24).expect("valid date");
        let url = build_query_url(&config, date);
        assert!(url.contains("ATPT_OFCDC_SC_CODE=B10"));
        assert!(url.contains("SD_SCHUL_CODE=1234567"));
        assert!(url.ends_with("MLSV_YMD=20241224"));
    }
}
