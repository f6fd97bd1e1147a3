//! Wire schema for resume analysis: the flat shape the model must return and
//! the nested shape the API exposes.

use serde::{Deserialize, Serialize};

/// Exact structure the model is instructed to produce. Every top-level field
/// is required; a reply missing any of them fails the parse and the caller
/// falls back to the placeholder result.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeAnalysisOutput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub professional_summary: String,
    pub core_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub resume_rating: f64,
    pub improvement_areas: Vec<String>,
    pub upskill_suggestions: Vec<String>,
}

/// One work engagement. Entry fields default so a sparse model reply still
/// parses; keys outside this set are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// One education entry, re-keyed to exactly these three fields on the way
/// out regardless of what else the model volunteered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub rating: f64,
    pub improvement_areas: Vec<String>,
    pub upskill_suggestions: Vec<String>,
}

/// Response body of `POST /api/upload-resume`. The same shape is flattened
/// into the `resumes` table, so nothing returned to the client is ever
/// missing from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysisResponse {
    pub personal_info: PersonalInfo,
    pub professional_summary: Option<String>,
    pub core_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub certifications: Vec<String>,
    pub ai_analysis: AiAnalysis,
}

impl ResumeAnalysisOutput {
    /// Reshapes the flat model output into the nested response structure.
    pub fn into_response(self) -> ResumeAnalysisResponse {
        ResumeAnalysisResponse {
            personal_info: PersonalInfo {
                name: Some(self.name),
                email: Some(self.email),
                phone: Some(self.phone),
                location: Some(self.location),
            },
            professional_summary: Some(self.professional_summary),
            core_skills: self.core_skills,
            soft_skills: self.soft_skills,
            education: self.education,
            work_experience: self.work_experience,
            certifications: self.certifications,
            ai_analysis: AiAnalysis {
                rating: self.resume_rating,
                improvement_areas: self.improvement_areas,
                upskill_suggestions: self.upskill_suggestions,
            },
        }
    }
}

impl ResumeAnalysisResponse {
    /// The fixed result substituted when the model call or its parsing fails.
    /// The endpoint still answers 200 with this body; only logs and the
    /// stored rating distinguish it from a real analysis.
    pub fn placeholder() -> Self {
        ResumeAnalysisResponse {
            personal_info: PersonalInfo {
                name: Some("Unable to extract".to_string()),
                email: None,
                phone: None,
                location: None,
            },
            professional_summary: Some("Analysis failed due to API error".to_string()),
            core_skills: vec![],
            soft_skills: vec![],
            education: vec![],
            work_experience: vec![],
            certifications: vec![],
            ai_analysis: AiAnalysis {
                rating: 0.0,
                improvement_areas: vec![],
                upskill_suggestions: vec![],
            },
        }
    }
}

// ────────────────────────────── tests ──────────────────────────────
