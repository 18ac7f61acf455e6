// ABOUTME: Core domain models for the meal lookup pipeline
// ABOUTME: Meal records, annotated menu items, marker tokens, and the allergy table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Core data models shared across the pipeline stages.
//!
//! All models are immutable after creation: the parser builds [`MealRecord`]s
//! once per row, the annotator derives ephemeral [`AnnotatedMenuItem`]s during
//! rendering, and nothing is persisted between queries.

use serde::{Deserialize, Serialize};

use crate::constants::allergy;

/// One meal serving parsed from a single upstream data row
///
/// Invariant: a record always holds at least one non-empty menu item. Rows
/// that yield none after cleaning are dropped by the parser and never reach
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Free-text meal-type label (e.g. lunch); generic label when absent upstream
    pub meal_type: String,
    /// Ordered raw menu-item strings, already split and whitespace-filtered
    pub menu_items: Vec<String>,
    /// Optional calorie free text; empty string when absent
    pub calorie_info: String,
    /// Optional nutrition free text; empty string when absent
    pub nutrition_info: String,
}

/// A menu item with its embedded allergy markers extracted
///
/// Derived and consumed entirely within rendering; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedMenuItem {
    /// Menu text with every numeric marker removed and surrounding whitespace trimmed
    pub display_text: String,
    /// Resolved allergen labels in order of appearance; duplicates preserved
    pub allergy_labels: Vec<String>,
}

/// One allergy-code marker found in raw menu text
///
/// Produced by the scanning pass, consumed by the removal and lookup passes.
/// Keeping the span separate from the digits lets extraction and cleanup be
/// tested independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerToken {
    /// Byte offset of the first digit in the source text
    pub start: usize,
    /// Byte offset one past the trailing period
    pub end: usize,
    /// Marker digits with the trailing period stripped
    pub digits: String,
}

/// Immutable code-to-allergen lookup table
///
/// Constructed once at process start and passed by reference into the
/// annotator; never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct AllergyTable {
    entries: &'static [(u8, &'static str)],
}

impl AllergyTable {
    /// The standard upstream table (codes 1..=19)
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: &allergy::LABELS,
        }
    }

    /// Look up the allergen label for a numeric code
    #[must_use]
    pub fn label(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Resolve raw marker digits to a display label
    ///
    /// Unrecognized or unparseable codes degrade to the raw digit string, so
    /// resolution never fails.
    #[must_use]
    pub fn resolve(&self, digits: &str) -> String {
        digits
            .parse::<u8>()
            .ok()
            .and_then(|code| self.label(code))
            .map_or_else(|| digits.to_owned(), ToOwned::to_owned)
    }
}

impl Default for AllergyTable {
    fn default() -> Self {
        Self::standard()
    }
}
