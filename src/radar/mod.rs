//! Tech radar dataset loading, typed model and structural checks.
//!
//! A dataset is first loaded as a raw JSON tree ([`RadarDocument`]) so the
//! checks can report every malformed entry individually. Once the report is
//! clean the same document converts into the typed [`TechRadar`] model.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

pub mod checks;
pub mod document;
pub mod model;
pub mod report;
pub mod summary;

pub use checks::{
    check_quadrant, check_required_fields, check_timeline, validate_entries_present,
    validate_quadrants, EntryValidator,
};
pub use document::RadarDocument;
pub use model::{Entry, Quadrant, TechRadar, TimelineItem};
pub use report::{validate, CheckOutcome, ValidationReport};
pub use summary::{EntrySummary, QuadrantSummary, RadarSummary};

/// Dataset file name looked up relative to the working directory.
pub const DEFAULT_RADAR_PATH: &str = "platform-tech-radar.json";

/// The only quadrant identifiers a radar may declare or reference.
pub const ALLOWED_QUADRANTS: [&str; 4] = ["infrastructure", "frameworks", "languages", "process"];

static ALLOWED_QUADRANT_SET: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| ALLOWED_QUADRANTS.iter().copied().collect());

/// Returns true when `id` names one of the allowed quadrants.
pub fn is_allowed_quadrant(id: &str) -> bool {
    ALLOWED_QUADRANT_SET.contains(id)
}
