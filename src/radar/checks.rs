//! Structural checks over a raw radar document.
//!
//! Each check returns `Ok(())` or the first [`RadarError`] it hits. Checks are
//! independent: a failure in one never prevents another from running. The
//! only state carried between entries lives in [`EntryValidator`].

use std::collections::{BTreeSet, HashSet};

use serde_json::Value;

use crate::error::RadarError;
use crate::radar::document::RadarDocument;
use crate::radar::{is_allowed_quadrant, ALLOWED_QUADRANTS};

const REQUIRED_STRING_FIELDS: [&str; 4] = ["id", "title", "quadrant", "description"];
const TIMELINE_STRING_FIELDS: [&str; 2] = ["ringId", "date"];

/// Exactly four quadrants whose ids are unique and equal the allowed set.
pub fn validate_quadrants(document: &RadarDocument) -> Result<(), RadarError> {
    let quadrants = document
        .quadrants()
        .and_then(Value::as_array)
        .ok_or_else(|| RadarError::schema("quadrants", "must be an array"))?;

    let mut ids = Vec::with_capacity(quadrants.len());
    for (index, quadrant) in quadrants.iter().enumerate() {
        let id = quadrant
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| RadarError::schema(format!("quadrants[{index}].id"), "must be a string"))?;
        ids.push(id);
    }

    if ids.len() != ALLOWED_QUADRANTS.len() {
        return Err(RadarError::schema(
            "quadrants",
            format!(
                "must declare exactly {} quadrants (found {})",
                ALLOWED_QUADRANTS.len(),
                ids.len()
            ),
        ));
    }

    let mut seen = BTreeSet::new();
    for id in &ids {
        if !seen.insert(*id) {
            return Err(RadarError::Duplicate {
                field: "quadrant id".to_string(),
                value: id.to_string(),
            });
        }
    }

    // Four distinct allowed ids cover the whole allowed set.
    if let Some((index, unknown)) = ids
        .iter()
        .enumerate()
        .find(|(_, id)| !is_allowed_quadrant(id))
    {
        return Err(RadarError::InvalidReference {
            path: format!("quadrants[{index}].id"),
            value: unknown.to_string(),
        });
    }

    Ok(())
}

/// The `entries` member is a non-empty array.
pub fn validate_entries_present(document: &RadarDocument) -> Result<&[Value], RadarError> {
    let entries = document
        .entries()
        .and_then(Value::as_array)
        .ok_or_else(|| RadarError::schema("entries", "must be an array"))?;
    if entries.is_empty() {
        return Err(RadarError::EmptyCollection {
            path: "entries".to_string(),
        });
    }
    Ok(entries.as_slice())
}

/// `id`, `title`, `quadrant` and `description` are strings; `timeline` is an array.
pub fn check_required_fields(index: usize, entry: &Value) -> Result<(), RadarError> {
    if !entry.is_object() {
        return Err(RadarError::schema(
            format!("entries[{index}]"),
            "must be an object",
        ));
    }
    for field in REQUIRED_STRING_FIELDS {
        if !entry.get(field).is_some_and(Value::is_string) {
            return Err(RadarError::schema(
                format!("entries[{index}].{field}"),
                "is required and must be a string",
            ));
        }
    }
    if !entry.get("timeline").is_some_and(Value::is_array) {
        return Err(RadarError::schema(
            format!("entries[{index}].timeline"),
            "is required and must be an array",
        ));
    }
    Ok(())
}

/// `quadrant` names one of the allowed quadrants.
pub fn check_quadrant(index: usize, entry: &Value) -> Result<(), RadarError> {
    let path = format!("entries[{index}].quadrant");
    let quadrant = entry
        .get("quadrant")
        .and_then(Value::as_str)
        .ok_or_else(|| RadarError::schema(path.clone(), "must be a string"))?;
    if !is_allowed_quadrant(quadrant) {
        return Err(RadarError::InvalidReference {
            path,
            value: quadrant.to_string(),
        });
    }
    Ok(())
}

/// `timeline` is non-empty and every item has non-empty `ringId` and `date`.
pub fn check_timeline(index: usize, entry: &Value) -> Result<(), RadarError> {
    let path = format!("entries[{index}].timeline");
    let timeline = entry
        .get("timeline")
        .and_then(Value::as_array)
        .ok_or_else(|| RadarError::schema(path.clone(), "must be an array"))?;
    if timeline.is_empty() {
        return Err(RadarError::EmptyCollection { path });
    }

    for (item_index, item) in timeline.iter().enumerate() {
        for field in TIMELINE_STRING_FIELDS {
            let field_path = format!("{path}[{item_index}].{field}");
            match item.get(field).and_then(Value::as_str) {
                Some(value) if !value.is_empty() => {}
                Some(_) => return Err(RadarError::schema(field_path, "must not be empty")),
                None => {
                    return Err(RadarError::schema(
                        field_path,
                        "is required and must be a string",
                    ))
                }
            }
        }
    }
    Ok(())
}

/// Tracks identifiers seen so far while walking entries in order.
///
/// The first occurrence of an id or key passes; every later one fails.
#[derive(Debug, Default)]
pub struct EntryValidator {
    seen_ids: HashSet<String>,
    seen_keys: HashSet<String>,
}

impl EntryValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `id` has not appeared on an earlier entry.
    pub fn check_unique_id(&mut self, index: usize, entry: &Value) -> Result<(), RadarError> {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| RadarError::schema(format!("entries[{index}].id"), "must be a string"))?;
        if !self.seen_ids.insert(id.to_string()) {
            return Err(RadarError::Duplicate {
                field: "id".to_string(),
                value: id.to_string(),
            });
        }
        Ok(())
    }

    /// `key`, when present and non-empty, has not appeared on an earlier entry.
    pub fn check_unique_key(&mut self, index: usize, entry: &Value) -> Result<(), RadarError> {
        let key = match entry.get("key") {
            None | Some(Value::Null) => return Ok(()),
            Some(Value::String(key)) if key.is_empty() => return Ok(()),
            Some(Value::String(key)) => key,
            Some(_) => {
                return Err(RadarError::schema(
                    format!("entries[{index}].key"),
                    "must be a string when present",
                ))
            }
        };
        if !self.seen_keys.insert(key.clone()) {
            return Err(RadarError::Duplicate {
                field: "key".to_string(),
                value: key.clone(),
            });
        }
        Ok(())
    }

    /// Number of distinct ids recorded so far.
    pub fn id_count(&self) -> usize {
        self.seen_ids.len()
    }
}

/// Label used to attribute per-entry checks, e.g. `entry[3] (rust)`.
pub fn entry_label(index: usize, entry: &Value) -> String {
    match entry.get("id").and_then(Value::as_str) {
        Some(id) => format!("entry[{index}] ({id})"),
        None => format!("entry[{index}] (<no id>)"),
    }
}
