// ABOUTME: Allergy-marker extraction from raw menu-item text
// ABOUTME: Separate scanning and removal passes feeding the code-to-label lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Menu item annotator.
//!
//! Menu text embeds allergy codes as `digits "."` markers ("13.White rice"),
//! zero or more per item, anywhere in the string. Extraction
//! ([`scan_markers`]) and cleanup ([`strip_markers`]) are separate passes
//! over the same token list so each is testable on its own; [`annotate`]
//! composes them with the label lookup.
//!
//! Pure functions throughout: no I/O, deterministic for identical input, and
//! never failing: an unrecognized code degrades to its raw digits.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{AllergyTable, AnnotatedMenuItem, MarkerToken};

/// Marker shape: one or more digits followed by a period
const MARKER_PATTERN: &str = r"\d+\.";

static MARKER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn marker_regex() -> Option<&'static Regex> {
    MARKER_REGEX
        .get_or_init(|| Regex::new(MARKER_PATTERN).ok())
        .as_ref()
}

/// Scan raw menu text for allergy-code markers
///
/// Returns one token per marker in order of appearance, each carrying its
/// byte span and the digits with the trailing period stripped.
#[must_use]
pub fn scan_markers(text: &str) -> Vec<MarkerToken> {
    let Some(regex) = marker_regex() else {
        return Vec::new();
    };
    regex
        .find_iter(text)
        .map(|found| MarkerToken {
            start: found.start(),
            end: found.end(),
            digits: found.as_str().trim_end_matches('.').to_owned(),
        })
        .collect()
}

/// Remove the given marker spans from the text and trim the result
///
/// Tokens must be in ascending, non-overlapping order, as produced by
/// [`scan_markers`].
#[must_use]
pub fn strip_markers(text: &str, markers: &[MarkerToken]) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut cursor = 0;
    for marker in markers {
        cleaned.push_str(&text[cursor..marker.start]);
        cursor = marker.end;
    }
    cleaned.push_str(&text[cursor..]);
    cleaned.trim().to_owned()
}

/// Annotate one raw menu item
///
/// Display text has every marker removed and surrounding whitespace trimmed;
/// labels resolve through the table in marker order, duplicates preserved,
/// unrecognized codes kept as their raw digits.
#[must_use]
pub fn annotate(raw: &str, table: &AllergyTable) -> AnnotatedMenuItem {
    let markers = scan_markers(raw);
    let allergy_labels = markers
        .iter()
        .map(|marker| table.resolve(&marker.digits))
        .collect();
    let display_text = strip_markers(raw, &markers);

    AnnotatedMenuItem {
        display_text,
        allergy_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_pattern_compiles() {
        assert!(marker_regex().is_some());
    }

    #[test]
    fn test_scan_finds_markers_in_order() {
        let tokens = scan_markers("13.White rice 2.Soybean soup");
        let digits: Vec<&str> = tokens.iter().map(|t| t.digits.as_str()).collect();
        assert_eq!(digits, ["13", "2"]);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, 3);
    }

    #[test]
    fn test_scan_empty_for_plain_text() {
        assert!(scan_markers("Plain salad").is_empty());
    }

    #[test]
    fn test_strip_removes_exact_spans() {
        let text = "13.White rice 2.Soybean soup";
        let tokens = scan_markers(text);
        assert_eq!(strip_markers(text, &tokens), "White rice Soybean soup");
    }

    #[test]
    fn test_strip_with_no_markers_trims_only() {
        assert_eq!(strip_markers("  Plain salad  ", &[]), "Plain salad");
    }

    #[test]
    fn test_suffix_and_interspersed_markers() {
        let tokens = scan_markers("Bulgogi 10.16. with sauce 5.");
        let digits: Vec<&str> = tokens.iter().map(|t| t.digits.as_str()).collect();
        assert_eq!(digits, ["10", "16", "5"]);
    }
}
