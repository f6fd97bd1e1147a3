use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the resumes table if it does not exist. There is no migration
/// machinery beyond this; records are insert-only and the schema is stable.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id UUID PRIMARY KEY,
            filename TEXT NOT NULL,
            upload_date TIMESTAMPTZ NOT NULL,
            name TEXT,
            email TEXT,
            phone TEXT,
            location TEXT,
            professional_summary TEXT,
            core_skills JSONB,
            soft_skills JSONB,
            work_experience JSONB,
            education JSONB,
            certifications JSONB,
            resume_rating DOUBLE PRECISION,
            improvement_areas JSONB,
            upskill_suggestions JSONB,
            raw_text TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
