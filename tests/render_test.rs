// ABOUTME: Integration tests for the report renderer
// ABOUTME: No-data notice, section ordering, allergy spans, optional fields, and escaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

use chrono::NaiveDate;
use dosirak::models::{AllergyTable, MealRecord};
use dosirak::render::render_report;

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date")
}

fn lunch_record() -> MealRecord {
    MealRecord {
        meal_type: "lunch".to_owned(),
        menu_items: vec!["13.White rice".to_owned(), "Plain salad".to_owned()],
        calorie_info: "850.2 kcal".to_owned(),
        nutrition_info: String::new(),
    }
}

#[test]
fn test_empty_records_render_no_data_notice_with_date() {
    let html = render_report(&[], wednesday(), &AllergyTable::standard());
    assert!(html.contains("No meal information is available for this date."));
    assert!(html.contains("2025 year 3 month 5 day (Wednesday)"));
    assert!(html.contains("<h2>Meal Information</h2>"));
}

#[test]
fn test_sections_follow_record_order() {
    let records = vec![
        MealRecord {
            meal_type: "breakfast".to_owned(),
            menu_items: vec!["Toast".to_owned()],
            calorie_info: String::new(),
            nutrition_info: String::new(),
        },
        lunch_record(),
    ];
    let html = render_report(&records, wednesday(), &AllergyTable::standard());
    let breakfast = html.find("<h3>breakfast</h3>").expect("breakfast heading");
    let lunch = html.find("<h3>lunch</h3>").expect("lunch heading");
    assert!(breakfast < lunch);
}

#[test]
fn test_allergy_span_only_when_labels_present() {
    let html = render_report(&[lunch_record()], wednesday(), &AllergyTable::standard());
    assert!(html.contains("<li>White rice <span class=\"allergy-info\">(Allergy: sulfites)</span></li>"));
    assert!(html.contains("<li>Plain salad</li>"));
}

#[test]
fn test_optional_lines_omitted_when_empty() {
    let html = render_report(&[lunch_record()], wednesday(), &AllergyTable::standard());
    assert!(html.contains("<strong>Calories:</strong> 850.2 kcal"));
    assert!(!html.contains("Nutrition:"));
}

#[test]
fn test_item_with_only_markers_is_skipped() {
    let record = MealRecord {
        meal_type: "lunch".to_owned(),
        menu_items: vec!["1.2.".to_owned(), "Rice".to_owned()],
        calorie_info: String::new(),
        nutrition_info: String::new(),
    };
    let html = render_report(&[record], wednesday(), &AllergyTable::standard());
    assert!(html.contains("<li>Rice</li>"));
    assert_eq!(html.matches("<li>").count(), 1);
}

#[test]
fn test_dynamic_text_is_escaped() {
    let record = MealRecord {
        meal_type: "<script>alert(1)</script>".to_owned(),
        menu_items: vec!["Rice & beans".to_owned()],
        calorie_info: String::new(),
        nutrition_info: String::new(),
    };
    let html = render_report(&[record], wednesday(), &AllergyTable::standard());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Rice &amp; beans"));
}

#[test]
fn test_unrecognized_code_rendered_as_raw_digits() {
    let record = MealRecord {
        meal_type: "lunch".to_owned(),
        menu_items: vec!["99.Mystery dish".to_owned()],
        calorie_info: String::new(),
        nutrition_info: String::new(),
    };
    let html = render_report(&[record], wednesday(), &AllergyTable::standard());
    assert!(html.contains("(Allergy: 99)"));
}
