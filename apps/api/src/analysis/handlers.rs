use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{error, info};

use crate::analysis::schema::ResumeAnalysisResponse;
use crate::errors::AppError;
use crate::extract::{extract_contact_info, extract_text_from_pdf};
use crate::models::resume::{ResumeRecord, ResumeSummary};
use crate::state::AppState;

/// Uploads shorter than this after extraction are not worth a model call.
const MIN_RESUME_TEXT_CHARS: usize = 10;

/// POST /api/upload-resume
///
/// Accepts one multipart `file` part, extracts its text, runs the analyzer
/// and persists the flattened result. Analysis failures degrade to the
/// placeholder body; only validation, extraction and storage failures turn
/// into error responses.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart form data: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.ends_with(".pdf") {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }

        info!("Processing resume upload: {filename}");
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
        if content.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let text =
            extract_text_from_pdf(&content).map_err(|e| AppError::Extraction(e.to_string()))?;
        info!("Extracted text length: {}", text.len());
        if text.chars().count() < MIN_RESUME_TEXT_CHARS {
            return Err(AppError::Validation(
                "Could not extract meaningful text from the PDF".to_string(),
            ));
        }

        let (analysis, contact_fallback) = match state.analyzer.analyze(&text).await {
            Ok(analysis) => {
                info!("AI analysis completed for {filename}");
                (analysis, None)
            }
            Err(e) => {
                // The upload still succeeds; the row records what the regex
                // scan could salvage from the raw text.
                error!("Resume analysis failed, storing placeholder result: {e}");
                (
                    ResumeAnalysisResponse::placeholder(),
                    Some(extract_contact_info(&text)),
                )
            }
        };

        let record =
            ResumeRecord::from_analysis(&filename, &analysis, &text, contact_fallback.as_ref());
        state.store.insert(&record).await?;
        info!("Resume analysis completed for {filename} ({})", record.id);

        return Ok(Json(analysis));
    }

    Err(AppError::Validation("No file provided".to_string()))
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let summaries = state.store.list().await?;
    info!("Listed {} resume records", summaries.len());
    Ok(Json(summaries))
}

// ────────────────────────────── tests ──────────────────────────────
