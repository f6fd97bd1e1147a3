use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::analysis::prompts::RESUME_ANALYSIS_PROMPT_TEMPLATE;
use crate::analysis::schema::{ResumeAnalysisOutput, ResumeAnalysisResponse};
use crate::llm_client::{strip_json_fences, GenerativeModel, LlmError};

/// Minimum trimmed length the input must have before any model call.
const MIN_TEXT_CHARS: usize = 10;
/// How much of the raw model reply gets logged for diagnostics.
const LOG_HEAD_CHARS: usize = 500;

/// Why one analysis attempt failed. The upload handler maps every kind to
/// the placeholder result, so these only reach logs and tests.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("extracted text is too short to be a valid resume")]
    TextTooShort,

    #[error("model call failed: {0}")]
    Model(LlmError),

    #[error("model reply did not match the analysis schema: {0}")]
    MalformedReply(serde_json::Error),
}

/// Drives one analysis pass: prompt build, model call, schema parse, reshape.
/// Fails explicitly; substituting the placeholder is the caller's decision.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    model: Arc<dyn GenerativeModel>,
}

impl ResumeAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
    ) -> Result<ResumeAnalysisResponse, AnalyzerError> {
        if resume_text.trim().chars().count() < MIN_TEXT_CHARS {
            error!("Resume text is empty or too short");
            return Err(AnalyzerError::TextTooShort);
        }

        info!("Analyzing resume text (length: {})", resume_text.len());
        let prompt = RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
        debug!("Created analysis prompt ({} characters)", prompt.len());

        let reply = self.model.generate(&prompt).await.map_err(|e| {
            error!("Model API error: {e}");
            AnalyzerError::Model(e)
        })?;
        info!("Received model reply");
        debug!("Reply content: {}...", head(&reply, LOG_HEAD_CHARS));

        let parsed: ResumeAnalysisOutput = serde_json::from_str(strip_json_fences(&reply))
            .map_err(|e| {
                error!("Error parsing model reply: {e}");
                error!("Raw reply content: {}...", head(&reply, LOG_HEAD_CHARS));
                AnalyzerError::MalformedReply(e)
            })?;
        info!("Successfully parsed model reply");

        Ok(parsed.into_response())
    }
}

fn head(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────── tests ──────────────────────────────


#[cfg(test)]
mod tests {
    use super::fixtures::VALID_MODEL_REPLY;
    use super::*;
    use crate::analysis::schema::EducationEntry;
    use crate::llm_client::testing::ScriptedModel;

    const RESUME_TEXT: &str =
        "Jane Doe, backend engineer. jane.doe@example.com. Eight years of Rust.";

    fn analyzer_with(model: ScriptedModel) -> (ResumeAnalyzer, Arc<ScriptedModel>) {
        let model = Arc::new(model);
        (ResumeAnalyzer::new(model.clone()), model)
    }

    #[tokio::test]
    async fn valid_reply_is_parsed_and_reshaped() {
        let (analyzer, _) = analyzer_with(ScriptedModel::replying(VALID_MODEL_REPLY));
        let response = analyzer.analyze(RESUME_TEXT).await.unwrap();

        assert_eq!(response.personal_info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            response.personal_info.email.as_deref(),
            Some("jane.doe@example.com")
        );
        assert_eq!(response.ai_analysis.rating, 8.5);
        assert_eq!(response.core_skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);
        // Extra education keys are gone; exactly the three expected remain
        assert_eq!(
            response.education,
            vec![EducationEntry {
                institution: "MIT".to_string(),
                degree: "BSc Computer Science".to_string(),
                year: "2015".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn fenced_reply_is_accepted() {
        let fenced = format!("```json\n{VALID_MODEL_REPLY}\n```");
        let (analyzer, _) = analyzer_with(ScriptedModel::replying(&fenced));
        let response = analyzer.analyze(RESUME_TEXT).await.unwrap();
        assert_eq!(response.ai_analysis.rating, 8.5);
    }

    #[tokio::test]
    async fn prompt_embeds_the_resume_text_and_schema() {
        let (analyzer, model) = analyzer_with(ScriptedModel::replying(VALID_MODEL_REPLY));
        analyzer.analyze(RESUME_TEXT).await.unwrap();

        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains(RESUME_TEXT));
        assert!(prompt.contains("resume_rating"));
        assert!(prompt.contains("upskill_suggestions"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[tokio::test]
    async fn non_json_reply_is_a_malformed_reply_error() {
        let (analyzer, _) =
            analyzer_with(ScriptedModel::replying("Sorry, I cannot analyze that."));
        let err = analyzer.analyze(RESUME_TEXT).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn reply_missing_required_fields_is_malformed() {
        let (analyzer, _) = analyzer_with(ScriptedModel::replying(r#"{"name": "Jane"}"#));
        let err = analyzer.analyze(RESUME_TEXT).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedReply(_)));
    }

    #[tokio::test]
    async fn model_failure_is_a_model_error() {
        let (analyzer, _) =
            analyzer_with(ScriptedModel::failing(503, "connection reset by peer"));
        let err = analyzer.analyze(RESUME_TEXT).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Model(_)));
    }

    #[tokio::test]
    async fn short_text_never_reaches_the_model() {
        let (analyzer, model) = analyzer_with(ScriptedModel::replying(VALID_MODEL_REPLY));
        let err = analyzer.analyze("   Hi   ").await.unwrap_err();

        assert!(matches!(err, AnalyzerError::TextTooShort));
        assert_eq!(model.call_count(), 0);
    }
}
