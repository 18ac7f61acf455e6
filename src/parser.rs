// ABOUTME: XML response parsing for the upstream meal service payload
// ABOUTME: Produces meal records, detecting the no-data answer distinctly from malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Response parser.
//!
//! The upstream answers with an XML document carrying either a top-level
//! result message ("no matching data" is a valid, non-error outcome) or
//! repeated `<row>` elements, one per meal service. Dish names arrive as a
//! single text field with items separated by an embedded `<br/>` marker.
//!
//! Ordering follows the document; rows whose dish text yields no non-empty
//! items are excluded entirely.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::constants::{fields, labels};
use crate::errors::ParseError;
use crate::models::MealRecord;

/// Field accumulator for one `<row>` element
#[derive(Debug, Default)]
struct RowFields {
    meal_type: String,
    dish_names: String,
    calories: String,
    nutrition: String,
}

impl RowFields {
    fn capture(&mut self, field: &str, value: &str) {
        match field {
            fields::MEAL_TYPE => self.meal_type.push_str(value),
            fields::DISH_NAMES => self.dish_names.push_str(value),
            fields::CALORIES => self.calories.push_str(value),
            fields::NUTRITION => self.nutrition.push_str(value),
            _ => {}
        }
    }

    /// Finalize the row; `None` when no menu item survives cleaning
    fn into_record(self) -> Option<MealRecord> {
        let menu_items: Vec<String> = self
            .dish_names
            .split(fields::MENU_ITEM_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        if menu_items.is_empty() {
            return None;
        }

        let meal_type = if self.meal_type.trim().is_empty() {
            labels::GENERIC_MEAL.to_owned()
        } else {
            self.meal_type.trim().to_owned()
        };

        Some(MealRecord {
            meal_type,
            menu_items,
            calorie_info: self.calories.trim().to_owned(),
            nutrition_info: self.nutrition.trim().to_owned(),
        })
    }
}

/// Parse a raw upstream payload into meal records
///
/// Returns an empty sequence when the upstream message states that no
/// records exist for the date; that is a valid outcome, not a failure.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] when the text is not a well-formed XML
/// document (including truncated documents and mismatched tags).
pub fn parse_meal_response(raw: &str) -> Result<Vec<MealRecord>, ParseError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut records: Vec<MealRecord> = Vec::new();
    let mut depth: usize = 0;
    let mut saw_element = false;
    let mut message_text = String::new();
    let mut in_message = false;
    let mut row: Option<RowFields> = None;
    let mut current_field: Option<String> = None;

    loop {
        match reader.read_event() {
            Err(e) => {
                return Err(ParseError::Malformed {
                    reason: e.to_string(),
                })
            }
            Ok(Event::Start(start)) => {
                depth += 1;
                saw_element = true;
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if name == fields::ROW {
                    row = Some(RowFields::default());
                } else if row.is_some() {
                    current_field = Some(name);
                } else if name == fields::MESSAGE {
                    in_message = true;
                }
            }
            Ok(Event::Empty(_)) => {
                // Self-closing element carries no text; nothing to capture
                saw_element = true;
            }
            Ok(Event::Text(text)) => {
                let value = text.unescape().map_err(|e| ParseError::Malformed {
                    reason: e.to_string(),
                })?;
                if let (Some(fields_acc), Some(field)) = (row.as_mut(), current_field.as_deref()) {
                    fields_acc.capture(field, &value);
                } else if in_message {
                    message_text.push_str(&value);
                }
            }
            Ok(Event::CData(cdata)) => {
                let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let (Some(fields_acc), Some(field)) = (row.as_mut(), current_field.as_deref()) {
                    fields_acc.capture(field, &value);
                } else if in_message {
                    message_text.push_str(&value);
                }
            }
            Ok(Event::End(end)) => {
                depth = depth.checked_sub(1).ok_or_else(|| ParseError::Malformed {
                    reason: "unbalanced closing tag".to_owned(),
                })?;
                let name = String::from_utf8_lossy(end.local_name().as_ref()).into_owned();
                if name == fields::ROW {
                    if let Some(finished) = row.take() {
                        match finished.into_record() {
                            Some(record) => records.push(record),
                            None => debug!("dropping row with no non-empty menu items"),
                        }
                    }
                    current_field = None;
                } else if row.is_some() {
                    current_field = None;
                } else if name == fields::MESSAGE {
                    in_message = false;
                }
            }
            Ok(Event::Eof) => {
                if depth != 0 {
                    return Err(ParseError::Malformed {
                        reason: "unexpected end of document".to_owned(),
                    });
                }
                break;
            }
            Ok(_) => {}
        }
    }

    if !saw_element {
        return Err(ParseError::Malformed {
            reason: "no root element".to_owned(),
        });
    }

    if fields::NO_DATA_PHRASES
        .iter()
        .any(|phrase| message_text.contains(phrase))
    {
        debug!("upstream reports no records for this date");
        return Ok(Vec::new());
    }

    Ok(records)
}
