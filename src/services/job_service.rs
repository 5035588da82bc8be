use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use sqlx::PgPool;
use tracing::info;

const JOB_COLUMNS: &str =
    "id, title, company, location, employment_type, salary_range, description, required_skills, posted_date";

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "INSERT INTO jobs (title, company, location, employment_type, salary_range, description, required_skills, posted_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(payload.title)
        .bind(payload.company)
        .bind(payload.location)
        .bind(payload.employment_type)
        .bind(payload.salary_range)
        .bind(payload.description)
        .bind(payload.required_skills)
        .bind(payload.posted_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn list_all(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    pub async fn update(&self, id: i64, payload: UpdateJobPayload) -> Result<Job> {
        self.get_by_id(id).await?;

        let job = sqlx::query_as::<_, Job>(&format!(
            "UPDATE jobs
             SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                employment_type = COALESCE($5, employment_type),
                salary_range = COALESCE($6, salary_range),
                description = COALESCE($7, description),
                required_skills = COALESCE($8, required_skills),
                posted_date = COALESCE($9, posted_date)
             WHERE id = $1
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(payload.title)
        .bind(payload.company)
        .bind(payload.location)
        .bind(payload.employment_type)
        .bind(payload.salary_range)
        .bind(payload.description)
        .bind(payload.required_skills)
        .bind(payload.posted_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    /// Inserts a couple of demo listings on first boot so a fresh
    /// deployment has something to browse and score against.
    pub async fn seed_mock_jobs(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        info!("Seeding mock job listings");
        let seeds = [
            (
                "Senior Full Stack Developer",
                "TechCorp Inc.",
                "Remote",
                "Full-time",
                "$120k - $160k",
                "We are looking for an experienced Full Stack Developer...",
                "React,Node.js,TypeScript,MongoDB,AWS",
                "2025-11-20",
            ),
            (
                "Frontend Developer (React)",
                "StartupXYZ",
                "San Francisco, CA",
                "Full-time",
                "$100k - $140k",
                "Join our fast-growing startup...",
                "React,JavaScript,HTML/CSS,Git",
                "2025-11-22",
            ),
        ];

        for (title, company, location, employment_type, salary, description, skills, posted) in
            seeds
        {
            sqlx::query(
                "INSERT INTO jobs (title, company, location, employment_type, salary_range, description, required_skills, posted_date)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
            )
            .bind(title)
            .bind(company)
            .bind(location)
            .bind(employment_type)
            .bind(salary)
            .bind(description)
            .bind(skills)
            .bind(posted)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}
