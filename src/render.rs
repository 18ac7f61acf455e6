// ABOUTME: HTML report rendering for parsed meal records
// ABOUTME: Emits the meal card with date line, per-meal sections, and allergy annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Report renderer.
//!
//! Produces the display markup for one query: a meal card with a heading,
//! the localized date line, and either a no-data notice or one section per
//! meal record in input order. All dynamic text is HTML-escaped; the
//! upstream payload is not trusted markup.

use chrono::NaiveDate;
use html_escape::encode_text;

use crate::annotate::annotate;
use crate::constants::labels;
use crate::formatters::format_display_date;
use crate::models::{AllergyTable, MealRecord};

/// Render the meal report for one query date
///
/// An empty record slice yields the no-data notice; the failure panel is
/// never rendered here. Section order mirrors input order, items whose
/// cleaned text is empty are skipped, and the allergy span appears only when
/// at least one label resolved.
#[must_use]
pub fn render_report(records: &[MealRecord], date: NaiveDate, table: &AllergyTable) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"meal-card\">\n");
    html.push_str(&format!("  <h2>{}</h2>\n", labels::REPORT_TITLE));
    html.push_str(&format!(
        "  <div class=\"date-info\">{}</div>\n",
        encode_text(&format_display_date(date))
    ));

    if records.is_empty() {
        html.push_str(&format!(
            "  <p class=\"instruction\">{}</p>\n",
            labels::NO_DATA_NOTICE
        ));
    } else {
        for record in records {
            render_meal_section(&mut html, record, table);
        }
    }

    html.push_str("</div>\n");
    html
}

/// Render one meal record: heading, item list, optional trailing fields
fn render_meal_section(html: &mut String, record: &MealRecord, table: &AllergyTable) {
    html.push_str(&format!("  <h3>{}</h3>\n", encode_text(&record.meal_type)));
    html.push_str("  <ul class=\"meal-list\">\n");

    for raw_item in &record.menu_items {
        let item = annotate(raw_item, table);
        if item.display_text.is_empty() {
            continue;
        }
        if item.allergy_labels.is_empty() {
            html.push_str(&format!("    <li>{}</li>\n", encode_text(&item.display_text)));
        } else {
            html.push_str(&format!(
                "    <li>{} <span class=\"allergy-info\">({}{})</span></li>\n",
                encode_text(&item.display_text),
                labels::ALLERGY_PREFIX,
                encode_text(&item.allergy_labels.join(", "))
            ));
        }
    }

    html.push_str("  </ul>\n");

    if !record.calorie_info.is_empty() {
        html.push_str(&format!(
            "  <p><strong>{}</strong> {}</p>\n",
            labels::CALORIES_LABEL,
            encode_text(&record.calorie_info)
        ));
    }
    if !record.nutrition_info.is_empty() {
        html.push_str(&format!(
            "  <p><strong>{}</strong> {}</p>\n",
            labels::NUTRITION_LABEL,
            encode_text(&record.nutrition_info)
        ));
    }
}
