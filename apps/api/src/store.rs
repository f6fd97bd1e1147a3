use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeSummary};

/// Storage seam for resume records. Handlers receive it through `AppState`
/// as a trait object, so tests can swap in an in-memory double.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Persists one record in a single transaction. Nothing is written when
    /// the insert fails.
    async fn insert(&self, record: &ResumeRecord) -> Result<(), AppError>;

    /// Returns a summary of every stored record, in storage order.
    async fn list(&self) -> Result<Vec<ResumeSummary>, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, record: &ResumeRecord) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO resumes
                (id, filename, upload_date, name, email, phone, location,
                 professional_summary, core_skills, soft_skills, work_experience,
                 education, certifications, resume_rating, improvement_areas,
                 upskill_suggestions, raw_text)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(record.id)
        .bind(&record.filename)
        .bind(record.upload_date)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.location)
        .bind(&record.professional_summary)
        .bind(&record.core_skills)
        .bind(&record.soft_skills)
        .bind(&record.work_experience)
        .bind(&record.education)
        .bind(&record.certifications)
        .bind(record.resume_rating)
        .bind(&record.improvement_areas)
        .bind(&record.upskill_suggestions)
        .bind(&record.raw_text)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Stored resume record {} ({})", record.id, record.filename);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ResumeSummary>, AppError> {
        let summaries = sqlx::query_as::<_, ResumeSummary>(
            "SELECT id, filename, upload_date, name, email, phone, resume_rating FROM resumes",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }
}

// ────────────────────────────── tests ──────────────────────────────
