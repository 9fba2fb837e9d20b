//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Server response structure
//! - **Progress Types** - Cosmetic progress state
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::{ResponseField, PROGRESS_STEP};

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the upload endpoint.
///
/// Deliberately permissive: both fields are optional and hold raw JSON,
/// because the page renders whatever comes back without schema validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GradeReport {
    /// Grade string, e.g. "A+" (grading deployment).
    pub note: Option<Value>,
    /// Free-text result (transcript deployment).
    pub text: Option<Value>,
}

impl GradeReport {
    /// Text rendered for one response field.
    ///
    /// Missing and null render as empty; non-string scalars render as their
    /// JSON text (the grader historically returned bare numbers).
    pub fn display_value(&self, field: ResponseField) -> String {
        let value = match field {
            ResponseField::Note => &self.note,
            ResponseField::Text => &self.text,
        };
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

// =============================================================================
// Progress Types
// =============================================================================

/// Cosmetic progress value in [0, 100].
///
/// Purely time-driven, with no relationship to bytes on the wire. The
/// ticker advances it in fixed steps; a settled upload forces it to one of
/// the terminal values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressMeter {
    percent: u8,
}

impl ProgressMeter {
    /// Value shown once an upload settles successfully.
    pub const FULL: u8 = 100;

    /// Fresh meter at 0%.
    pub const fn idle() -> Self {
        Self { percent: 0 }
    }

    /// One animation step: +[`PROGRESS_STEP`], clamped at the cap.
    pub fn tick(&mut self) -> u8 {
        self.percent = self.percent.saturating_add(PROGRESS_STEP).min(Self::FULL);
        self.percent
    }

    /// Force 100% (successful settle).
    pub fn complete(&mut self) -> u8 {
        self.percent = Self::FULL;
        self.percent
    }

    /// Force 0% (failed settle).
    pub fn reset(&mut self) -> u8 {
        self.percent = 0;
        self.percent
    }

    /// Current displayed value.
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether the bar reached the cap.
    pub const fn is_full(&self) -> bool {
        self.percent >= Self::FULL
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Diagnostic detail for the console; the page shows a single generic
/// notice whichever variant occurs.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Building the multipart body failed.
    Upload(String),
    /// Network/HTTP transport error.
    Network(String),
    /// The server answered with a non-2xx status.
    Server { status: u16, message: String },
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_starts_idle() {
        let meter = ProgressMeter::idle();
        assert_eq!(meter.percent(), 0);
        assert!(!meter.is_full());
    }

    #[test]
    fn test_meter_steps_by_ten() {
        let mut meter = ProgressMeter::idle();
        let observed: Vec<u8> = (0..10).map(|_| meter.tick()).collect();
        assert_eq!(observed, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(meter.is_full());
    }

    #[test]
    fn test_meter_is_monotonic_and_clamped() {
        let mut meter = ProgressMeter::idle();
        let mut previous = meter.percent();
        for _ in 0..25 {
            let current = meter.tick();
            assert!(current >= previous);
            assert!(current - previous <= PROGRESS_STEP);
            assert!(current <= ProgressMeter::FULL);
            previous = current;
        }
        assert_eq!(meter.percent(), ProgressMeter::FULL);
    }

    #[test]
    fn test_meter_complete_forces_full_from_anywhere() {
        let mut meter = ProgressMeter::idle();
        meter.tick();
        meter.tick();
        assert_eq!(meter.percent(), 20);
        assert_eq!(meter.complete(), ProgressMeter::FULL);
        assert!(meter.is_full());
    }

    #[test]
    fn test_meter_reset_forces_zero_from_anywhere() {
        let mut meter = ProgressMeter::idle();
        for _ in 0..7 {
            meter.tick();
        }
        assert_eq!(meter.percent(), 70);
        assert_eq!(meter.reset(), 0);
        assert!(!meter.is_full());
    }

    #[test]
    fn test_display_value_renders_strings_bare() {
        let report = GradeReport {
            note: Some(Value::String("A+".to_string())),
            text: None,
        };
        assert_eq!(report.display_value(ResponseField::Note), "A+");
        assert_eq!(report.display_value(ResponseField::Text), "");
    }

    #[test]
    fn test_display_value_null_is_empty() {
        let report = GradeReport {
            note: Some(Value::Null),
            text: None,
        };
        assert_eq!(report.display_value(ResponseField::Note), "");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Server {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (502): bad gateway");

        let err = AppError::Network("timeout".to_string());
        assert_eq!(err.to_string(), "Network error: timeout");
    }
}
