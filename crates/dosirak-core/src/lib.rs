// ABOUTME: Core types and constants for the dosirak meal lookup client
// ABOUTME: Foundation crate with error handling, domain models, constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

#![deny(unsafe_code)]

//! # Dosirak Core
//!
//! Foundation crate providing shared types and constants for the dosirak
//! meal lookup pipeline. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Error taxonomy for the fetch/parse pipeline
//! - **constants**: Upstream API parameters, proxy prefixes, allergy labels, calendar names
//! - **models**: Domain models (`MealRecord`, `AnnotatedMenuItem`, `AllergyTable`)
//! - **formatters**: Localized date display and compact request-date formatting

/// Error taxonomy for the fetch/parse pipeline
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core domain models
pub mod models;

/// Date formatting (localized display form and compact request form)
pub mod formatters;

pub use errors::{FetchError, MealServiceError, ParseError, TransportError};
pub use models::{AllergyTable, AnnotatedMenuItem, MarkerToken, MealRecord};
