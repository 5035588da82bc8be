use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::Job;
use crate::services::match_service::JobMatch;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub salary_range: String,
    /// Comma separated, e.g. "Python,Django".
    pub required_skills: String,
    pub description: String,
    pub posted_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub company: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub salary_range: Option<String>,
    pub required_skills: Option<String>,
    pub description: Option<String>,
    pub posted_date: Option<String>,
}

/// Wire shape the original web client consumes, hence the camelCase
/// names and the `type`/`salary` aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub salary: String,
    pub required_skills: Vec<String>,
    pub description: String,
    pub posted_date: String,
    pub match_score: i32,
}

impl JobResponse {
    fn build(job: Job, match_score: i32) -> Self {
        let required_skills = job.required_skill_list();
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            employment_type: job.employment_type,
            salary: job.salary_range,
            required_skills,
            description: job.description,
            posted_date: job.posted_date,
            match_score,
        }
    }
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self::build(value, 0)
    }
}

impl From<JobMatch> for JobResponse {
    fn from(value: JobMatch) -> Self {
        Self::build(value.job, value.score)
    }
}
