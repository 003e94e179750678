// Tech Radar - structural validation for radar datasets
// Loads a radar JSON document and checks quadrants, entries and timelines

// Module declarations
pub mod config;
pub mod error;
pub mod radar;

// Re-exports for convenience
pub use config::{ReportFormat, ValidatorConfig};
pub use error::{ErrorCode, RadarError};
pub use radar::{validate, RadarDocument, TechRadar, ValidationReport};

/// Install the stderr tracing subscriber.
///
/// `log` records are bridged into the same subscriber. Calling this more than
/// once keeps the first subscriber.
pub fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
