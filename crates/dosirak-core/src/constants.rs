// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Upstream API parameters, proxy prefixes, allergy labels, and calendar names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Constants module
//!
//! Application constants grouped by domain. Values that originate from the
//! upstream NEIS API contract (field names, no-data phrases, the allergy
//! numbering) live here so the rest of the codebase stays free of magic
//! strings.

/// Upstream NEIS API parameters
pub mod api {
    /// Base URL of the NEIS meal service endpoint
    pub const BASE_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";

    /// Requested response format
    pub const RESPONSE_TYPE: &str = "xml";

    /// Page index; the whole day fits in the first page
    pub const PAGE_INDEX: u32 = 1;

    /// Page size; upper bound comfortably above one day's record count
    pub const PAGE_SIZE: u32 = 100;

    /// Default education office code (regional institution identifier)
    pub const DEFAULT_OFFICE_CODE: &str = "J10";

    /// Default school code (institution identifier)
    pub const DEFAULT_SCHOOL_CODE: &str = "7530478";
}

/// Candidate proxy endpoint prefixes, in trial priority order
pub mod proxies {
    /// allorigins raw passthrough; target URL is percent-encoded into the query
    pub const ALLORIGINS_PREFIX: &str = "https://api.allorigins.win/raw?url=";

    /// corsproxy.io passthrough; target URL is percent-encoded into the query
    pub const CORSPROXY_PREFIX: &str = "https://corsproxy.io/?";

    /// cors-anywhere passthrough; target URL is appended verbatim to the path
    pub const CORS_ANYWHERE_PREFIX: &str = "https://cors-anywhere.herokuapp.com/";
}

/// Upstream response field names and embedded markers
pub mod fields {
    /// Repeated data-row element
    pub const ROW: &str = "row";

    /// Result/message element carrying upstream status text
    pub const MESSAGE: &str = "MESSAGE";

    /// Meal-type label field (e.g. lunch)
    pub const MEAL_TYPE: &str = "MMEAL_SC_NM";

    /// Dish-name field; items separated by the embedded break marker
    pub const DISH_NAMES: &str = "DDISH_NM";

    /// Calorie text field
    pub const CALORIES: &str = "CAL_INFO";

    /// Nutrition text field
    pub const NUTRITION: &str = "NTR_INFO";

    /// Break marker separating menu items inside the dish-name text
    pub const MENU_ITEM_SEPARATOR: &str = "<br/>";

    /// Upstream message phrases that signal "no records for this date".
    /// The API emits these in Korean regardless of caller locale.
    pub const NO_DATA_PHRASES: [&str; 2] = ["해당하는 데이터가 없습니다", "데이터가 없습니다"];
}

/// Calendar naming used by the date formatter
pub mod calendar {
    /// Weekday display names indexed Sunday-first, matching the upstream
    /// locale's calendar table order
    pub const WEEKDAY_NAMES: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
}

/// Display labels used by the parser and renderer
pub mod labels {
    /// Generic meal-type label used when the upstream field is absent
    pub const GENERIC_MEAL: &str = "meal";

    /// Report card heading
    pub const REPORT_TITLE: &str = "Meal Information";

    /// Notice shown when the date has no records
    pub const NO_DATA_NOTICE: &str = "No meal information is available for this date.";

    /// Prefix for the allergy label list on a menu item
    pub const ALLERGY_PREFIX: &str = "Allergy: ";

    /// Label for the optional calorie line
    pub const CALORIES_LABEL: &str = "Calories:";

    /// Label for the optional nutrition line
    pub const NUTRITION_LABEL: &str = "Nutrition:";
}

/// Allergy code numbering from the upstream contract
pub mod allergy {
    /// Fixed code-to-allergen table; codes are a small closed set (1..=19)
    pub const LABELS: [(u8, &str); 19] = [
        (1, "egg"),
        (2, "milk"),
        (3, "buckwheat"),
        (4, "peanut"),
        (5, "soybean"),
        (6, "wheat"),
        (7, "mackerel"),
        (8, "crab"),
        (9, "shrimp"),
        (10, "pork"),
        (11, "peach"),
        (12, "tomato"),
        (13, "sulfites"),
        (14, "walnut"),
        (15, "chicken"),
        (16, "beef"),
        (17, "squid"),
        (18, "shellfish"),
        (19, "pine nut"),
    ];
}
