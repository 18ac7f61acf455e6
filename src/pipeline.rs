// ABOUTME: Pipeline entry point composing fetch, parse, and render
// ABOUTME: One calendar date in, one markup document or categorized failure out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Pipeline entry point.
//!
//! The single function the presentation layer calls. Stateless across
//! invocations: every query fetches, parses, and renders from scratch, and
//! nothing is cached or persisted. The no-data answer flows through as an
//! empty record list and still renders the normal report panel.

use chrono::NaiveDate;
use tracing::info;

use crate::config::ServiceConfig;
use crate::errors::MealServiceError;
use crate::parser::parse_meal_response;
use crate::providers::{fetch_meal_payload, MealTransport};
use crate::render::render_report;

/// Run one meal query: fetch the payload, parse it, render the report
///
/// # Errors
///
/// Returns [`MealServiceError::Fetch`] when every candidate endpoint failed
/// and [`MealServiceError::Parse`] when the fetched body is malformed. The
/// upstream "no data for this date" answer is not an error and renders as an
/// informational notice.
pub async fn run_query<T: MealTransport>(
    transport: &T,
    config: &ServiceConfig,
    date: NaiveDate,
) -> Result<String, MealServiceError> {
    let body = fetch_meal_payload(transport, config, date).await?;
    let records = parse_meal_response(&body)?;
    info!(%date, records = records.len(), "meal query complete");
    Ok(render_report(&records, date, &config.allergy_table))
}
