use std::collections::HashSet;

use crate::models::job::Job;

/// Minimum score a job must reach to appear in recommendations.
pub const RECOMMENDATION_MIN_SCORE: i32 = 50;

/// A job paired with its computed overlap score. Request-scoped only.
#[derive(Debug, Clone)]
pub struct JobMatch {
    pub job: Job,
    pub score: i32,
}

pub struct MatchService;

impl MatchService {
    /// Overlap score in [0, 100] between a job's required skills and the
    /// user's skill names. Both sides are compared trimmed and
    /// lower-cased. A job with no stated requirements scores 0 rather
    /// than 100. Duplicate requirements each count toward the total, and
    /// a single user skill can satisfy several of them.
    pub fn score(required: &[String], user_skills: &HashSet<String>) -> i32 {
        let required_norm: Vec<String> = required
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
        if required_norm.is_empty() {
            return 0;
        }

        let user_norm: HashSet<String> = user_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();

        let matched = required_norm
            .iter()
            .filter(|name| user_norm.contains(*name))
            .count();

        ((matched * 100) / required_norm.len()) as i32
    }

    /// Scores every job, drops those under `min_score`, and returns the
    /// rest sorted by score descending. The sort is stable, so equal
    /// scores keep their input order.
    pub fn rank(jobs: Vec<Job>, user_skills: &HashSet<String>, min_score: i32) -> Vec<JobMatch> {
        let mut results: Vec<JobMatch> = jobs
            .into_iter()
            .map(|job| {
                let score = Self::score(&job.required_skill_list(), user_skills);
                JobMatch { job, score }
            })
            .filter(|m| m.score >= min_score)
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
