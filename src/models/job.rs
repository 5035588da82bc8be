use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub salary_range: String,
    pub description: String,
    /// Comma-joined skill names; empty string means no stated requirements.
    pub required_skills: String,
    pub posted_date: String,
}

impl Job {
    /// Parses `required_skills` into individual names. Entries are trimmed
    /// and empties from stray commas are dropped rather than treated as
    /// skill names.
    pub fn required_skill_list(&self) -> Vec<String> {
        self.required_skills
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_skills(required_skills: &str) -> Job {
        Job {
            id: 1,
            title: "Backend Developer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            employment_type: "Full-time".into(),
            salary_range: "$100k".into(),
            description: "".into(),
            required_skills: required_skills.into(),
            posted_date: "2025-11-20".into(),
        }
    }

    #[test]
    fn parses_comma_joined_skills() {
        let job = job_with_skills("Python,Django,SQL");
        assert_eq!(job.required_skill_list(), vec!["Python", "Django", "SQL"]);
    }

    #[test]
    fn trims_whitespace_around_entries() {
        let job = job_with_skills(" Python , Django ");
        assert_eq!(job.required_skill_list(), vec!["Python", "Django"]);
    }

    #[test]
    fn empty_string_yields_no_skills() {
        let job = job_with_skills("");
        assert!(job.required_skill_list().is_empty());
    }

    #[test]
    fn stray_commas_do_not_become_skills() {
        let job = job_with_skills("Python,, ,Django,");
        assert_eq!(job.required_skill_list(), vec!["Python", "Django"]);
    }
}
