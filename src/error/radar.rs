// Radar validation error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Radar error code constants
///
/// Single source of truth for the numeric codes attached to every failed
/// check, so reports stay stable across releases.
///
/// Error code range: 3001-3006
pub struct RadarErrorCodes {}

impl RadarErrorCodes {
    /// Dataset file could not be read
    pub const READ_FAILED: i32 = 3001;

    /// Dataset is not well-formed JSON
    pub const PARSE: i32 = 3002;

    /// Field is missing or has the wrong JSON type
    pub const SCHEMA: i32 = 3003;

    /// Identifier repeated across entries
    pub const DUPLICATE: i32 = 3004;

    /// Quadrant reference outside the allowed set
    pub const INVALID_REFERENCE: i32 = 3005;

    /// Collection that must hold at least one item is empty
    pub const EMPTY_COLLECTION: i32 = 3006;
}

/// Log a radar error with structured context
///
/// Emits the numeric code and message at error level. The logging is
/// non-blocking and will not panic on failure.
pub fn log_radar_error(err: &RadarError, context: &str) {
    error!(
        "Radar error in {}: code={}, component=RadarValidator, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Radar dataset errors
///
/// Every variant maps onto one failure class of the structural checks.
/// `path` fields use dotted/indexed notation such as `entries[3].timeline[0]`.
///
/// Error code range: 3001-3006
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadarError {
    /// Dataset file could not be read
    ReadFailed { path: String, reason: String },

    /// Dataset is not well-formed JSON
    Parse { reason: String },

    /// Field is missing or has the wrong JSON type
    Schema { path: String, expected: String },

    /// Identifier repeated across entries
    Duplicate { field: String, value: String },

    /// Quadrant reference outside the allowed set
    InvalidReference { path: String, value: String },

    /// Collection that must hold at least one item is empty
    EmptyCollection { path: String },
}

impl RadarError {
    /// Short stable name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            RadarError::ReadFailed { .. } => "read_failed",
            RadarError::Parse { .. } => "parse_error",
            RadarError::Schema { .. } => "schema_error",
            RadarError::Duplicate { .. } => "duplicate_error",
            RadarError::InvalidReference { .. } => "invalid_reference_error",
            RadarError::EmptyCollection { .. } => "empty_collection_error",
        }
    }

    pub(crate) fn schema(path: impl Into<String>, expected: impl Into<String>) -> Self {
        RadarError::Schema {
            path: path.into(),
            expected: expected.into(),
        }
    }
}

impl ErrorCode for RadarError {
    fn code(&self) -> i32 {
        match self {
            RadarError::ReadFailed { .. } => RadarErrorCodes::READ_FAILED,
            RadarError::Parse { .. } => RadarErrorCodes::PARSE,
            RadarError::Schema { .. } => RadarErrorCodes::SCHEMA,
            RadarError::Duplicate { .. } => RadarErrorCodes::DUPLICATE,
            RadarError::InvalidReference { .. } => RadarErrorCodes::INVALID_REFERENCE,
            RadarError::EmptyCollection { .. } => RadarErrorCodes::EMPTY_COLLECTION,
        }
    }

    fn message(&self) -> String {
        match self {
            RadarError::ReadFailed { path, reason } => {
                format!("Failed to read radar file {}: {}", path, reason)
            }
            RadarError::Parse { reason } => {
                format!("Radar file is not valid JSON: {}", reason)
            }
            RadarError::Schema { path, expected } => {
                format!("`{}` {}", path, expected)
            }
            RadarError::Duplicate { field, value } => {
                format!("Duplicate {} `{}`", field, value)
            }
            RadarError::InvalidReference { path, value } => {
                format!(
                    "`{}` references unknown quadrant `{}` (allowed: {})",
                    path,
                    value,
                    crate::radar::ALLOWED_QUADRANTS.join(", ")
                )
            }
            RadarError::EmptyCollection { path } => {
                format!("`{}` must not be empty", path)
            }
        }
    }
}

impl fmt::Display for RadarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RadarError::{} (code {}): {}",
            self.kind(),
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for RadarError {}

impl From<serde_json::Error> for RadarError {
    fn from(err: serde_json::Error) -> Self {
        RadarError::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_error_codes() {
        assert_eq!(
            RadarError::ReadFailed {
                path: "radar.json".to_string(),
                reason: "missing".to_string()
            }
            .code(),
            RadarErrorCodes::READ_FAILED
        );
        assert_eq!(
            RadarError::Parse {
                reason: "eof".to_string()
            }
            .code(),
            RadarErrorCodes::PARSE
        );
        assert_eq!(
            RadarError::schema("entries[0].id", "must be a string").code(),
            RadarErrorCodes::SCHEMA
        );
        assert_eq!(
            RadarError::Duplicate {
                field: "id".to_string(),
                value: "a".to_string()
            }
            .code(),
            RadarErrorCodes::DUPLICATE
        );
        assert_eq!(
            RadarError::InvalidReference {
                path: "entries[0].quadrant".to_string(),
                value: "tools".to_string()
            }
            .code(),
            RadarErrorCodes::INVALID_REFERENCE
        );
        assert_eq!(
            RadarError::EmptyCollection {
                path: "entries".to_string()
            }
            .code(),
            RadarErrorCodes::EMPTY_COLLECTION
        );
    }

    #[test]
    fn test_radar_error_messages() {
        let err = RadarError::schema("entries[2].title", "must be a string");
        assert_eq!(err.message(), "`entries[2].title` must be a string");

        let err = RadarError::Duplicate {
            field: "key".to_string(),
            value: "rust".to_string(),
        };
        assert_eq!(err.message(), "Duplicate key `rust`");

        let err = RadarError::InvalidReference {
            path: "entries[0].quadrant".to_string(),
            value: "tools".to_string(),
        };
        assert!(err.message().contains("tools"));
        assert!(err.message().contains("infrastructure"));

        let err = RadarError::EmptyCollection {
            path: "entries[1].timeline".to_string(),
        };
        assert!(err.message().contains("must not be empty"));
    }

    #[test]
    fn test_radar_error_display() {
        let err = RadarError::EmptyCollection {
            path: "entries".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("RadarError::empty_collection_error"));
        assert!(display.contains(&err.code().to_string()));
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let radar_err: RadarError = json_err.into();
        assert_eq!(radar_err.code(), RadarErrorCodes::PARSE);
        assert_eq!(radar_err.kind(), "parse_error");
    }
}
