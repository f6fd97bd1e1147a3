#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::analysis::schema::ResumeAnalysisResponse;
use crate::extract::ContactInfo;

/// One analyzed resume, flattened for the `resumes` table. Rows are written
/// exactly once per accepted upload and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub professional_summary: Option<String>,
    pub core_skills: Option<Value>,
    pub soft_skills: Option<Value>,
    pub work_experience: Option<Value>,
    pub education: Option<Value>,
    pub certifications: Option<Value>,
    pub resume_rating: Option<f64>,
    pub improvement_areas: Option<Value>,
    pub upskill_suggestions: Option<Value>,
    pub raw_text: Option<String>,
}

/// Projection returned by `GET /resumes`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    pub id: Uuid,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume_rating: Option<f64>,
}

impl ResumeRecord {
    /// Flattens an analysis response into a new row. Every field the API
    /// returns is persisted, plus the extracted raw text. Email and phone
    /// fall back to the regex scan of the raw text when the analyzer left
    /// them empty (the placeholder result does exactly that).
    pub fn from_analysis(
        filename: &str,
        analysis: &ResumeAnalysisResponse,
        raw_text: &str,
        contact_fallback: Option<&ContactInfo>,
    ) -> Self {
        let fallback_email = contact_fallback.and_then(|c| c.email.clone());
        let fallback_phone = contact_fallback.and_then(|c| c.phone.clone());

        ResumeRecord {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            upload_date: Utc::now(),
            name: analysis.personal_info.name.clone(),
            email: analysis.personal_info.email.clone().or(fallback_email),
            phone: analysis.personal_info.phone.clone().or(fallback_phone),
            location: analysis.personal_info.location.clone(),
            professional_summary: analysis.professional_summary.clone(),
            core_skills: Some(Value::from(analysis.core_skills.clone())),
            soft_skills: Some(Value::from(analysis.soft_skills.clone())),
            work_experience: serde_json::to_value(&analysis.work_experience).ok(),
            education: serde_json::to_value(&analysis.education).ok(),
            certifications: Some(Value::from(analysis.certifications.clone())),
            resume_rating: Some(analysis.ai_analysis.rating),
            improvement_areas: Some(Value::from(analysis.ai_analysis.improvement_areas.clone())),
            upskill_suggestions: Some(Value::from(analysis.ai_analysis.upskill_suggestions.clone())),
            raw_text: Some(raw_text.to_string()),
        }
    }

    pub fn summary(&self) -> ResumeSummary {
        ResumeSummary {
            id: self.id,
            filename: self.filename.clone(),
            upload_date: self.upload_date,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            resume_rating: self.resume_rating,
        }
    }
}

// ────────────────────────────── tests ──────────────────────────────
