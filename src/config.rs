//! Application configuration.
//!
//! Centralized configuration for the AutoProf frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Multipart field name the upload endpoint expects the file under.
pub const UPLOAD_FIELD_NAME: &str = "image";

/// Milliseconds between two cosmetic progress ticks.
pub const PROGRESS_TICK_MS: u32 = 100;

/// Percentage points added per cosmetic progress tick.
pub const PROGRESS_STEP: u8 = 10;

/// Upload endpoint of the grading deployment.
///
/// Relative path, served behind the same origin as the app.
pub const GRADING_ENDPOINT: &str = "/api/upload";

/// Upload endpoint of the transcript deployment.
///
/// Absolute URL of the locally run extraction service.
pub const TRANSCRIPT_ENDPOINT: &str = "http://127.0.0.1:8000/upload/";

/// Which field of the server response a deployment renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseField {
    /// `note`: the grade string, shown in the grade output.
    Note,
    /// `text`: the free-text result, shown in the results panel.
    Text,
}

/// Endpoint and response-field mapping for one deployment of the client.
///
/// The two deployments ship the same app pointed at different services;
/// the difference is configuration, not code.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// Where the multipart POST goes.
    pub endpoint: String,
    /// Which response field is rendered on success.
    pub result_field: ResponseField,
}

impl UploadConfig {
    /// Grading deployment: same-origin endpoint, renders the grade.
    pub fn grading() -> Self {
        Self {
            endpoint: GRADING_ENDPOINT.to_string(),
            result_field: ResponseField::Note,
        }
    }

    /// Transcript deployment: local service, renders the extracted text.
    pub fn transcript() -> Self {
        Self {
            endpoint: TRANSCRIPT_ENDPOINT.to_string(),
            result_field: ResponseField::Text,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::grading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grading() {
        let config = UploadConfig::default();
        assert_eq!(config.endpoint, GRADING_ENDPOINT);
        assert_eq!(config.result_field, ResponseField::Note);
    }

    #[test]
    fn test_transcript_preset() {
        let config = UploadConfig::transcript();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/upload/");
        assert_eq!(config.result_field, ResponseField::Text);
    }
}
