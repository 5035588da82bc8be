use crate::dto::resume_dto::{Finding, KeywordReport, ResumeAnalysisResponse, SectionReview};
use crate::error::{Error, Result};

/// High-value technical keywords scanned for in resume text. Order
/// matters: present/missing lists and finding descriptions name keywords
/// in this order, not in text order.
const TECHNICAL_KEYWORDS: [&str; 10] = [
    "Python",
    "Java",
    "React",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "CI/CD",
    "SQL",
    "FastAPI",
];

const ACTION_VERBS: [&str; 6] = [
    "Spearheaded",
    "Developed",
    "Orchestrated",
    "Engineered",
    "Managed",
    "Led",
];

const RECOMMENDED_KEYWORDS: [&str; 2] = ["System Design", "Scalability"];

/// Minimum trimmed length below which a resume is considered unreadable.
const MIN_TEXT_CHARS: usize = 50;

pub struct ResumeService;

impl ResumeService {
    /// Rule-based scoring over extracted resume text. Pure computation;
    /// fails only when the text is too short to analyze.
    pub fn analyze(text: &str) -> Result<ResumeAnalysisResponse> {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(Error::BadRequest(
                "Resume content is too short or unreadable.".to_string(),
            ));
        }

        let haystack = text.to_lowercase();
        let present: Vec<String> = TECHNICAL_KEYWORDS
            .iter()
            .filter(|kw| haystack.contains(&kw.to_lowercase()))
            .map(|kw| kw.to_string())
            .collect();
        let missing: Vec<String> = TECHNICAL_KEYWORDS
            .iter()
            .filter(|kw| !haystack.contains(&kw.to_lowercase()))
            .map(|kw| kw.to_string())
            .collect();

        let tech_score = Self::section_score(text, &TECHNICAL_KEYWORDS);
        let impact_score = Self::section_score(text, &ACTION_VERBS);
        let format_score = if text.matches('\n').count() > 20 { 90 } else { 60 };
        let overall_score = (tech_score + format_score + impact_score) / 3;

        let mut strengths = Vec::new();
        if present.len() >= 3 {
            strengths.push(Finding {
                title: "Strong Technical Base".to_string(),
                description: format!("Found key skills: {}", present[..3].join(", ")),
                kind: "strength".to_string(),
                severity: None,
            });
        }
        if impact_score > 80 {
            strengths.push(Finding {
                title: "Action-Oriented Language".to_string(),
                description: "Good use of strong action verbs (e.g., Led, Engineered)."
                    .to_string(),
                kind: "strength".to_string(),
                severity: None,
            });
        }

        let mut improvements = Vec::new();
        if !missing.is_empty() {
            let shortlist = &missing[..missing.len().min(3)];
            improvements.push(Finding {
                title: "Missing High-Value Skills".to_string(),
                description: format!("Consider adding: {}", shortlist.join(", ")),
                kind: "improvement".to_string(),
                severity: Some("high".to_string()),
            });
        }
        if impact_score < 70 {
            improvements.push(Finding {
                title: "Weak Impact Verbs".to_string(),
                description:
                    "Use words like 'Spearheaded' or 'Orchestrated' instead of 'Worked on'."
                        .to_string(),
                kind: "improvement".to_string(),
                severity: Some("medium".to_string()),
            });
        }

        let sections = vec![
            SectionReview {
                section: "Contact Information".to_string(),
                score: 100,
                status: "excellent".to_string(),
                feedback: "detected".to_string(),
            },
            SectionReview {
                section: "Skills".to_string(),
                score: tech_score,
                status: Self::status_for(tech_score),
                feedback: format!("{} keywords found", present.len()),
            },
            SectionReview {
                section: "Work Experience".to_string(),
                score: impact_score,
                status: Self::status_for(impact_score),
                feedback: "Action verbs analyzed".to_string(),
            },
        ];

        Ok(ResumeAnalysisResponse {
            overall_score,
            // Placeholder until real ATS checks exist.
            ats_compatibility: 85,
            content_quality: impact_score,
            formatting: format_score,
            keyword_optimization: tech_score,
            impact_score,
            sections,
            strengths,
            improvements,
            keywords: KeywordReport {
                present,
                missing,
                recommended: RECOMMENDED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            },
        })
    }

    /// Counts distinct keywords present case-insensitively as substrings.
    /// Zero hits score a neutral 50; each hit adds 10 up to a 100 cap, so
    /// five matches saturate the scale.
    fn section_score(text: &str, keywords: &[&str]) -> i32 {
        let haystack = text.to_lowercase();
        let found = keywords
            .iter()
            .filter(|kw| haystack.contains(&kw.to_lowercase()))
            .count() as i32;
        if found == 0 {
            50
        } else {
            (50 + found * 10).min(100)
        }
    }

    fn status_for(score: i32) -> String {
        if score > 75 { "good" } else { "average" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_score_floors_at_50_with_no_matches() {
        assert_eq!(
            ResumeService::section_score("nothing relevant here", &TECHNICAL_KEYWORDS),
            50
        );
    }

    #[test]
    fn section_score_adds_10_per_distinct_keyword() {
        assert_eq!(ResumeService::section_score("python", &TECHNICAL_KEYWORDS), 60);
        assert_eq!(
            ResumeService::section_score("python and java", &TECHNICAL_KEYWORDS),
            70
        );
    }

    #[test]
    fn section_score_reaches_100_at_five_matches() {
        let text = "Python Java React AWS Docker";
        assert_eq!(ResumeService::section_score(text, &TECHNICAL_KEYWORDS), 100);
        let text = "Python Java React AWS Docker Kubernetes SQL";
        assert_eq!(ResumeService::section_score(text, &TECHNICAL_KEYWORDS), 100);
    }

    #[test]
    fn section_score_counts_distinct_keywords_not_occurrences() {
        assert_eq!(
            ResumeService::section_score("python python python", &TECHNICAL_KEYWORDS),
            60
        );
    }

    #[test]
    fn section_score_is_monotonic_in_added_keywords() {
        let mut text = String::from("base text");
        let mut last = ResumeService::section_score(&text, &TECHNICAL_KEYWORDS);
        for kw in TECHNICAL_KEYWORDS {
            text.push(' ');
            text.push_str(kw);
            let score = ResumeService::section_score(&text, &TECHNICAL_KEYWORDS);
            assert!(score >= last);
            assert!((50..=100).contains(&score));
            last = score;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn analyze_rejects_empty_text() {
        assert!(matches!(
            ResumeService::analyze(""),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn analyze_rejects_text_under_50_chars() {
        let text = "x".repeat(49);
        assert!(ResumeService::analyze(&text).is_err());
    }

    #[test]
    fn analyze_rejects_whitespace_only_text() {
        let text = " ".repeat(80);
        assert!(ResumeService::analyze(&text).is_err());
    }

    #[test]
    fn analyze_accepts_exactly_50_chars() {
        let text = "x".repeat(50);
        let analysis = ResumeService::analyze(&text).expect("50 chars should analyze");
        assert_eq!(analysis.keyword_optimization, 50);
        assert_eq!(analysis.impact_score, 50);
        assert_eq!(analysis.formatting, 60);
        assert_eq!(analysis.overall_score, 53);
        assert_eq!(analysis.ats_compatibility, 85);
    }

    #[test]
    fn format_score_rewards_more_than_20_line_breaks() {
        let flat = "x".repeat(60);
        assert_eq!(ResumeService::analyze(&flat).unwrap().formatting, 60);

        let structured = format!("{}{}", "x".repeat(60), "\n".repeat(21));
        assert_eq!(ResumeService::analyze(&structured).unwrap().formatting, 90);

        let boundary = format!("{}{}", "x".repeat(60), "\n".repeat(20));
        assert_eq!(ResumeService::analyze(&boundary).unwrap().formatting, 60);
    }

    #[test]
    fn analyze_example_pipeline_resume() {
        let text = "Developed a React and AWS pipeline with Docker across cloud services at work.";
        let analysis = ResumeService::analyze(text).unwrap();

        // React, AWS, Docker -> 80; Developed -> 60.
        assert_eq!(analysis.keyword_optimization, 80);
        assert_eq!(analysis.impact_score, 60);
        assert_eq!(analysis.formatting, 60);
        assert_eq!(analysis.overall_score, 66);

        assert_eq!(analysis.keywords.present, vec!["React", "AWS", "Docker"]);
        assert_eq!(analysis.keywords.missing[..3], ["Python", "Java", "Kubernetes"]);
        assert_eq!(analysis.keywords.recommended, vec!["System Design", "Scalability"]);

        assert_eq!(analysis.strengths.len(), 1);
        assert_eq!(analysis.strengths[0].title, "Strong Technical Base");
        assert_eq!(
            analysis.strengths[0].description,
            "Found key skills: React, AWS, Docker"
        );

        assert_eq!(analysis.improvements.len(), 2);
        assert_eq!(analysis.improvements[0].title, "Missing High-Value Skills");
        assert_eq!(
            analysis.improvements[0].description,
            "Consider adding: Python, Java, Kubernetes"
        );
        assert_eq!(analysis.improvements[0].severity.as_deref(), Some("high"));
        assert_eq!(analysis.improvements[1].title, "Weak Impact Verbs");
        assert_eq!(analysis.improvements[1].severity.as_deref(), Some("medium"));
    }

    #[test]
    fn strong_verbs_emit_action_strength_and_no_verb_improvement() {
        let text = "Spearheaded delivery. Developed tooling. Orchestrated rollouts. \
                    Engineered systems end to end for several years.";
        let analysis = ResumeService::analyze(text).unwrap();

        // Four distinct verbs -> 90.
        assert_eq!(analysis.impact_score, 90);
        assert!(analysis
            .strengths
            .iter()
            .any(|f| f.title == "Action-Oriented Language"));
        assert!(!analysis
            .improvements
            .iter()
            .any(|f| f.title == "Weak Impact Verbs"));
    }

    #[test]
    fn sections_report_fixed_contact_and_thresholded_statuses() {
        let text = "Developed a React and AWS pipeline with Docker across cloud services at work.";
        let analysis = ResumeService::analyze(text).unwrap();

        assert_eq!(analysis.sections.len(), 3);
        assert_eq!(analysis.sections[0].section, "Contact Information");
        assert_eq!(analysis.sections[0].score, 100);
        assert_eq!(analysis.sections[0].status, "excellent");

        assert_eq!(analysis.sections[1].section, "Skills");
        assert_eq!(analysis.sections[1].score, 80);
        assert_eq!(analysis.sections[1].status, "good");
        assert_eq!(analysis.sections[1].feedback, "3 keywords found");

        assert_eq!(analysis.sections[2].section, "Work Experience");
        assert_eq!(analysis.sections[2].score, 60);
        assert_eq!(analysis.sections[2].status, "average");
    }

    #[test]
    fn all_keywords_present_leaves_no_missing_finding() {
        let text = "Python Java React AWS Docker Kubernetes Machine Learning CI/CD SQL FastAPI \
                    Led and Managed everything.";
        let analysis = ResumeService::analyze(text).unwrap();
        assert!(analysis.keywords.missing.is_empty());
        assert!(!analysis
            .improvements
            .iter()
            .any(|f| f.title == "Missing High-Value Skills"));
    }
}
