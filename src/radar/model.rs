//! Typed view of a tech radar dataset.

use serde::{Deserialize, Serialize};

/// Complete radar dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechRadar {
    pub quadrants: Vec<Quadrant>,
    pub entries: Vec<Entry>,
}

impl TechRadar {
    /// Return a single quadrant by id, if present.
    pub fn quadrant(&self, id: &str) -> Option<&Quadrant> {
        self.quadrants.iter().find(|quadrant| quadrant.id == id)
    }

    /// Entries filed under the given quadrant, in dataset order.
    pub fn entries_in<'a>(&'a self, quadrant_id: &'a str) -> impl Iterator<Item = &'a Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.quadrant == quadrant_id)
    }
}

/// One of the four technology categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quadrant {
    pub id: String,
    pub name: String,
}

/// Point-in-time placement of an entry in a ring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub ring_id: String,
    pub date: String,
}

/// One tracked technology or practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    pub quadrant: String,
    pub description: String,
    pub timeline: Vec<TimelineItem>,
}

impl Entry {
    /// Most recent placement by `date`; the later item wins a tie.
    pub fn current_placement(&self) -> Option<&TimelineItem> {
        // max_by keeps the last of several equal maxima
        self.timeline.iter().max_by(|a, b| a.date.cmp(&b.date))
    }
}
