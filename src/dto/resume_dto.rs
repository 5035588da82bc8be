use serde::{Deserialize, Serialize};

/// Full analysis result. Derived per request, never persisted; camelCase
/// wire names match the original web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysisResponse {
    pub overall_score: i32,
    pub ats_compatibility: i32,
    pub content_quality: i32,
    pub formatting: i32,
    pub keyword_optimization: i32,
    pub impact_score: i32,
    pub sections: Vec<SectionReview>,
    pub strengths: Vec<Finding>,
    pub improvements: Vec<Finding>,
    pub keywords: KeywordReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReview {
    pub section: String,
    pub score: i32,
    pub status: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub recommended: Vec<String>,
}
