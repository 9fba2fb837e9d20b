//! Service d'upload vers le backend de notation.
//!
//! Envoie le fichier choisi en `multipart/form-data` et décode la
//! réponse JSON du serveur.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{UploadConfig, UPLOAD_FIELD_NAME};
use crate::types::{AppError, AppResult, GradeReport};

/// Uploade une image et retourne le rapport de notation du serveur.
///
/// Toute réponse hors 2xx est traitée comme un échec, avec le corps de
/// la réponse comme message quand il est lisible.
pub async fn upload_image(file: File, config: &UploadConfig) -> AppResult<GradeReport> {
    // Créer le corps multipart
    let form_data = FormData::new()
        .map_err(|e| AppError::Upload(format!("Failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob(UPLOAD_FIELD_NAME, &file)
        .map_err(|e| AppError::Upload(format!("Failed to attach file: {:?}", e)))?;

    // Envoyer la requête
    let response = Request::post(&config.endpoint)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Request failed: {}", e)))?;

    // Vérifier le status
    if !response.ok() {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server { status, message });
    }

    // Parser la réponse JSON
    response
        .json::<GradeReport>()
        .await
        .map_err(|e| AppError::Decode(format!("Invalid response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseField;

    #[test]
    fn test_grading_response_deserialization() {
        let report: GradeReport = serde_json::from_str(r#"{"note": "A+"}"#).unwrap();
        assert_eq!(report.display_value(ResponseField::Note), "A+");
    }

    #[test]
    fn test_transcript_response_deserialization() {
        let report: GradeReport =
            serde_json::from_str(r#"{"text": "Il était une fois..."}"#).unwrap();
        assert_eq!(report.display_value(ResponseField::Text), "Il était une fois...");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let report: GradeReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.display_value(ResponseField::Note), "");
        assert_eq!(report.display_value(ResponseField::Text), "");
    }

    #[test]
    fn test_numeric_note_renders_as_json_text() {
        let report: GradeReport = serde_json::from_str(r#"{"note": 4}"#).unwrap();
        assert_eq!(report.display_value(ResponseField::Note), "4");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let report: GradeReport = serde_json::from_str(
            r#"{"note": "B", "confidence": 0.93, "model": "autoprof-v2"}"#,
        )
        .unwrap();
        assert_eq!(report.display_value(ResponseField::Note), "B");
    }
}
