// Error types for the tech radar validator
//
// This module defines the error type raised by dataset loading and by every
// structural check, with stable error codes for reports.

mod radar;

pub use radar::{log_radar_error, RadarError, RadarErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling in reports
/// and logs.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
