// ABOUTME: Main library entry point for the dosirak meal lookup client
// ABOUTME: Wires fetch, parse, annotate, and render stages into one pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

#![deny(unsafe_code)]

//! # Dosirak
//!
//! A client pipeline for the NEIS school meal API: given one calendar date it
//! fetches the day's meal-plan XML through an ordered list of fallback
//! endpoints, parses it into meal records, resolves inline allergy-code
//! markers, and renders a localized HTML report.
//!
//! ## Architecture
//!
//! The pipeline is stateless across invocations; each query is independent:
//!
//! - **providers**: HTTP transport seam and the sequential-fallback fetch
//!   orchestrator
//! - **parser**: XML payload to [`models::MealRecord`]s, with no-data
//!   detection distinct from malformed input
//! - **annotate**: allergy-marker extraction from raw menu text
//! - **render**: HTML report assembly
//! - **pipeline**: the single date-in, markup-out entry point the
//!   presentation layer calls
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use dosirak::config::ServiceConfig;
//! use dosirak::providers::ReqwestTransport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dosirak::errors::MealServiceError> {
//!     let config = ServiceConfig::from_env();
//!     let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
//!     let markup = dosirak::pipeline::run_query(&ReqwestTransport::new(), &config, date).await?;
//!     println!("{markup}");
//!     Ok(())
//! }
//! ```

// Re-export dosirak-core modules so pipeline code can use `crate::errors::*` etc.
pub use dosirak_core::constants;
pub use dosirak_core::errors;
pub use dosirak_core::formatters;
pub use dosirak_core::models;

/// Allergy-marker extraction from raw menu-item text
pub mod annotate;
/// Environment-based service configuration
pub mod config;
/// Logging initialization for the binary
pub mod logging;
/// XML response parsing into meal records
pub mod parser;
/// Fetch-parse-render pipeline entry point
pub mod pipeline;
/// HTTP transport and sequential-fallback fetch orchestration
pub mod providers;
/// HTML report rendering
pub mod render;

pub use annotate::annotate;
pub use config::ServiceConfig;
pub use parser::parse_meal_response;
pub use pipeline::run_query;
pub use providers::{fetch_meal_payload, MealTransport, ProxyEndpoint, ReqwestTransport};
pub use render::render_report;
