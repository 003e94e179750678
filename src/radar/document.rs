//! Raw radar dataset as loaded from disk.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::RadarError;
use crate::radar::model::TechRadar;

const INLINE_SOURCE: &str = "<inline>";

/// Parsed but unvalidated radar dataset.
///
/// Holds the JSON tree as-is. Nothing here checks shape; see
/// [`crate::radar::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadarDocument {
    source: String,
    root: Value,
}

impl RadarDocument {
    /// Read and parse the dataset at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RadarError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|err| RadarError::ReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        // Invalid UTF-8 is malformed JSON, so decoding is left to the parser.
        let mut document = Self::from_slice(&contents)?;
        document.source = path.display().to_string();
        tracing::info!(
            "[RadarDocument] Loaded {} ({} bytes)",
            document.source,
            contents.len()
        );
        Ok(document)
    }

    /// Parse dataset contents from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, RadarError> {
        let root: Value = serde_json::from_str(data)?;
        Ok(Self::from_value(root))
    }

    /// Parse dataset contents from raw bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, RadarError> {
        let root: Value = serde_json::from_slice(data)?;
        Ok(Self::from_value(root))
    }

    /// Wrap an already parsed JSON tree.
    pub fn from_value(root: Value) -> Self {
        Self {
            source: INLINE_SOURCE.to_string(),
            root,
        }
    }

    /// Where the document came from, for reports.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The `quadrants` member, if the root is an object that has one.
    pub fn quadrants(&self) -> Option<&Value> {
        self.root.get("quadrants")
    }

    /// The `entries` member, if the root is an object that has one.
    pub fn entries(&self) -> Option<&Value> {
        self.root.get("entries")
    }

    /// Convert into the typed model.
    ///
    /// Only type-level shape is enforced here; run the structural checks
    /// first to get per-entry diagnostics.
    pub fn to_radar(&self) -> Result<TechRadar, RadarError> {
        TechRadar::deserialize(&self.root)
            .map_err(|err| RadarError::schema(self.source.clone(), err.to_string()))
    }
}
