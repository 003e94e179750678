//! Runs every structural check and collects the outcomes.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorCode, RadarError};
use crate::radar::checks::{self, EntryValidator};
use crate::radar::document::RadarDocument;

const QUADRANTS_CHECK: &str = "quadrants: exactly 4 from the allowed set";
const ENTRIES_CHECK: &str = "entries: non-empty array";

/// Outcome of one named check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub error: Option<RadarError>,
}

impl CheckOutcome {
    fn from_result(name: String, result: Result<(), RadarError>) -> Self {
        match result {
            Ok(()) => Self {
                name,
                passed: true,
                kind: None,
                code: None,
                message: None,
                error: None,
            },
            Err(err) => Self {
                name,
                passed: false,
                kind: Some(err.kind()),
                code: Some(err.code()),
                message: Some(err.message()),
                error: Some(err),
            },
        }
    }
}

/// Every check outcome for one dataset, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub passed: usize,
    pub failed: usize,
    pub checks: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            passed: 0,
            failed: 0,
            checks: Vec::new(),
        }
    }

    /// Record the result of a check under `name`.
    pub fn record(&mut self, name: impl Into<String>, result: Result<(), RadarError>) {
        let outcome = CheckOutcome::from_result(name.into(), result);
        if outcome.passed {
            tracing::debug!("[RadarCheck] PASS {}", outcome.name);
            self.passed += 1;
        } else {
            tracing::warn!(
                "[RadarCheck] FAIL {}: {}",
                outcome.name,
                outcome.message.as_deref().unwrap_or_default()
            );
            self.failed += 1;
        }
        self.checks.push(outcome);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Failed checks only, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|outcome| !outcome.passed)
    }

    /// Look up a check outcome by its exact name.
    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.checks.iter().find(|outcome| outcome.name == name)
    }

    pub fn print_json(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing validation report")?;
        println!("{json}");
        Ok(())
    }

    pub fn print_table(&self) {
        println!("Radar dataset            : {}", self.source);
        for outcome in &self.checks {
            if outcome.passed {
                println!("  PASS {}", outcome.name);
            } else {
                println!(
                    "  FAIL {} [{}]: {}",
                    outcome.name,
                    outcome.code.unwrap_or_default(),
                    outcome.message.as_deref().unwrap_or_default()
                );
            }
        }
        println!(
            "Checks passed/failed     : {} / {}",
            self.passed, self.failed
        );
    }
}

/// Run every structural check against `document`.
///
/// The quadrant and entries-present checks run once. Per-entry checks run
/// for every element of `entries` whenever it is an array, even when the
/// entries-present check has failed.
pub fn validate(document: &RadarDocument) -> ValidationReport {
    let mut report = ValidationReport::new(document.source());

    report.record(QUADRANTS_CHECK, checks::validate_quadrants(document));
    report.record(
        ENTRIES_CHECK,
        checks::validate_entries_present(document).map(|_| ()),
    );

    if let Some(entries) = document.entries().and_then(Value::as_array) {
        let mut validator = EntryValidator::new();
        for (index, entry) in entries.iter().enumerate() {
            let label = checks::entry_label(index, entry);
            report.record(
                format!("{label}: required fields"),
                checks::check_required_fields(index, entry),
            );
            report.record(
                format!("{label}: unique id"),
                validator.check_unique_id(index, entry),
            );
            report.record(
                format!("{label}: unique key"),
                validator.check_unique_key(index, entry),
            );
            report.record(
                format!("{label}: valid quadrant"),
                checks::check_quadrant(index, entry),
            );
            report.record(
                format!("{label}: valid timeline"),
                checks::check_timeline(index, entry),
            );
        }
    }

    tracing::info!(
        "[RadarCheck] {}: {} passed, {} failed",
        report.source,
        report.passed,
        report.failed
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_json() -> Value {
        json!({
            "quadrants": [
                {"id": "infrastructure", "name": "Infrastructure"},
                {"id": "frameworks", "name": "Frameworks"},
                {"id": "languages", "name": "Languages"},
                {"id": "process", "name": "Process"}
            ],
            "entries": [
                {
                    "id": "a",
                    "title": "T",
                    "quadrant": "languages",
                    "description": "d",
                    "timeline": [{"ringId": "adopt", "date": "2024-01"}]
                }
            ]
        })
    }

    #[test]
    fn valid_dataset_passes_every_check() {
        let report = validate(&RadarDocument::from_value(valid_json()));
        assert!(report.is_success());
        // 2 document-level checks + 5 per entry
        assert_eq!(report.checks.len(), 7);
        assert_eq!(report.passed, 7);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn duplicate_id_fails_only_second_occurrence() {
        let mut json = valid_json();
        let first = json["entries"][0].clone();
        json["entries"].as_array_mut().unwrap().push(first);
        let report = validate(&RadarDocument::from_value(json));

        assert!(!report.is_success());
        assert_eq!(report.failed, 1);
        assert!(report.outcome("entry[0] (a): unique id").unwrap().passed);
        let failure = report.outcome("entry[1] (a): unique id").unwrap();
        assert!(!failure.passed);
        assert!(matches!(
            failure.error,
            Some(RadarError::Duplicate { ref value, .. }) if value == "a"
        ));
    }

    #[test]
    fn empty_timeline_fails_timeline_check() {
        let mut json = valid_json();
        json["entries"][0]["timeline"] = json!([]);
        let report = validate(&RadarDocument::from_value(json));
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "entry[0] (a): valid timeline");
        assert_eq!(failures[0].kind, Some("empty_collection_error"));
    }

    #[test]
    fn failures_are_isolated_per_check() {
        let mut json = valid_json();
        json["entries"][0]["quadrant"] = json!("tools");
        json["quadrants"].as_array_mut().unwrap().pop();
        let report = validate(&RadarDocument::from_value(json));
        let names: Vec<_> = report.failures().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec![QUADRANTS_CHECK, "entry[0] (a): valid quadrant"]
        );
        assert!(report.outcome(ENTRIES_CHECK).unwrap().passed);
        assert!(report.outcome("entry[0] (a): valid timeline").unwrap().passed);
    }

    #[test]
    fn empty_entries_reports_single_failure() {
        let mut json = valid_json();
        json["entries"] = json!([]);
        let report = validate(&RadarDocument::from_value(json));
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.failed, 1);
        assert!(!report.outcome(ENTRIES_CHECK).unwrap().passed);
    }

    #[test]
    fn non_array_entries_records_document_checks_only() {
        let mut json = valid_json();
        json["entries"] = json!({"a": {}});
        let report = validate(&RadarDocument::from_value(json));
        assert_eq!(report.checks.len(), 2);
        assert!(report.outcome(QUADRANTS_CHECK).unwrap().passed);
        let entries = report.outcome(ENTRIES_CHECK).unwrap();
        assert!(!entries.passed);
        assert_eq!(entries.kind, Some("schema_error"));
    }

    #[test]
    fn report_serializes_failure_details() {
        let mut json = valid_json();
        json["entries"][0]["title"] = Value::Null;
        let report = validate(&RadarDocument::from_value(json));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["failed"], 1);
        let failed = value["checks"]
            .as_array()
            .unwrap()
            .iter()
            .find(|check| check["passed"] == false)
            .unwrap();
        assert_eq!(failed["kind"], "schema_error");
        assert_eq!(failed["code"], 3003);
        assert!(failed.get("error").is_none());
    }
}
