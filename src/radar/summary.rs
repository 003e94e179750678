//! Per-quadrant overview of a validated radar.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::radar::model::TechRadar;

/// Entry with its current ring.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntrySummary {
    pub id: String,
    pub title: String,
    pub ring: String,
    pub since: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuadrantSummary {
    pub id: String,
    pub name: String,
    pub entry_count: usize,
    pub entries: Vec<EntrySummary>,
}

/// Quadrants in declaration order, each listing its entries in dataset order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RadarSummary {
    pub total_entries: usize,
    pub quadrants: Vec<QuadrantSummary>,
}

impl RadarSummary {
    pub fn from_radar(radar: &TechRadar) -> Self {
        let quadrants = radar
            .quadrants
            .iter()
            .map(|quadrant| {
                let entries: Vec<EntrySummary> = radar
                    .entries_in(&quadrant.id)
                    .filter_map(|entry| {
                        let current = entry.current_placement()?;
                        Some(EntrySummary {
                            id: entry.id.clone(),
                            title: entry.title.clone(),
                            ring: current.ring_id.clone(),
                            since: current.date.clone(),
                        })
                    })
                    .collect();
                QuadrantSummary {
                    id: quadrant.id.clone(),
                    name: quadrant.name.clone(),
                    entry_count: entries.len(),
                    entries,
                }
            })
            .collect();

        Self {
            total_entries: radar.entries.len(),
            quadrants,
        }
    }

    pub fn print_json(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serializing radar summary")?;
        println!("{json}");
        Ok(())
    }

    pub fn print_table(&self) {
        println!("Radar entries            : {}", self.total_entries);
        for quadrant in &self.quadrants {
            println!("{} ({}) : {} entries", quadrant.name, quadrant.id, quadrant.entry_count);
            for entry in &quadrant.entries {
                println!(
                    "  - {} [{}]: {} since {}",
                    entry.title, entry.id, entry.ring, entry.since
                );
            }
        }
    }
}
