//! Profile signal analysis modeled on LinkedIn's STAR interaction graph.
//!
//! Twelve fixed edge types approximate how a ranking GNN sees a member.
//! Attribute edges (skills, titles, positions) are detectable from profile
//! text with keyword and regex checks; interaction edges (applies, saves,
//! clicks) are not, and stay undetected with their weight still counted in
//! the denominator.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::intelligence::coverage::Priority;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));
static CURRENT_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"present|current|now").expect("valid regex"));
static PAST_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"previously|former|past").expect("valid regex"));
static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}\s*-\s*\d{4}").expect("valid regex"));
static COURSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"certificate|certified|course|linkedin learning").expect("valid regex"));

/// Company cues. Detection runs on lowercased text, so the capitalized-name
/// patterns only fire via the worked-at and company-label forms.
static COMPANY_DETECTORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"at\s+[A-Z][a-zA-Z]+",
        r"worked\s+(at|for)\s+",
        r"(?i)company.*:",
        r"\|\s*[A-Z]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static COMPANY_LINE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][a-z]+\s*(Inc|LLC|Corp|Company|Technologies|Labs|AI)").expect("valid regex")
});
static COMPANY_LINE_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*[A-Z]").expect("valid regex"));

const SKILL_INDICATORS: &[&str] = &[
    "python", "javascript", "react", "aws", "azure", "sql",
    "salesforce", "leadership", "management", "analytics",
    "machine learning", "data science", "product", "marketing",
    "skills:", "proficient in", "expertise in", "experienced with",
];

const SKILL_KEYWORDS: &[&str] = &[
    "python", "javascript", "typescript", "react", "angular", "vue",
    "node", "java", "c++", "c#", "go", "rust", "ruby", "php",
    "aws", "azure", "gcp", "kubernetes", "docker", "terraform",
    "sql", "postgresql", "mongodb", "redis", "elasticsearch",
    "salesforce", "hubspot", "jira", "confluence", "notion",
    "machine learning", "deep learning", "nlp", "llm", "ai",
    "leadership", "management", "strategy", "analytics", "product",
    "partner", "revenue", "operations", "marketing", "sales",
];

const TITLE_INDICATORS: &[&str] = &[
    "director", "manager", "engineer", "analyst", "specialist",
    "coordinator", "lead", "senior", "principal", "staff",
    "vp", "vice president", "chief", "head of", "founder",
];

const TITLE_COUNT_KEYWORDS: &[&str] = &[
    "director", "manager", "engineer", "analyst", "specialist",
    "coordinator", "lead", "senior", "principal", "staff",
];

const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead", "principal", "director", "manager"];

// ────────────────────────────────────────────────────────────────────────────
// Edge model
// ────────────────────────────────────────────────────────────────────────────

/// Edge types of the interaction graph, strongest interaction first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalEdgeType {
    /// Applications are training labels, the strongest signal.
    MemberJobApply,
    MemberJobSave,
    MemberJobClick,
    /// Negative signal.
    MemberJobDismiss,
    MemberSkill,
    MemberCompany,
    MemberTitle,
    MemberPositionCurrent,
    MemberPositionPast,
    /// InMail replies.
    MemberRecruiterPositive,
    MemberCourseComplete,
    MemberConnection,
}

impl SignalEdgeType {
    /// Importance of the edge in the ranking model, -1.0 – 1.0.
    pub fn weight(self) -> f64 {
        match self {
            Self::MemberJobApply => 1.0,
            Self::MemberRecruiterPositive => 0.95,
            Self::MemberJobSave => 0.7,
            Self::MemberCourseComplete => 0.6,
            Self::MemberSkill => 0.5,
            Self::MemberPositionCurrent => 0.5,
            Self::MemberTitle => 0.45,
            Self::MemberCompany => 0.45,
            Self::MemberPositionPast => 0.4,
            Self::MemberJobClick => 0.3,
            Self::MemberConnection => 0.2,
            Self::MemberJobDismiss => -0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignalEdge {
    pub edge_type: SignalEdgeType,
    pub weight: f64,
    pub description: &'static str,
    pub how_to_optimize: &'static str,
    pub detected: bool,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileOptimization {
    pub area: &'static str,
    pub priority: Priority,
    pub action: String,
    pub impact: &'static str,
    pub effort: Effort,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSignalAnalysis {
    /// Weighted fraction of positive-weight edges detected, 0-100.
    pub overall_score: f64,
    pub edge_coverage: BTreeMap<SignalEdgeType, SignalEdge>,
    pub critical_gaps: Vec<&'static str>,
    pub optimizations: Vec<ProfileOptimization>,
    /// Rough count of jobs the member's graph neighborhood touches.
    pub estimated_gnn_reach: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEstimateBreakdown {
    pub textual_similarity: f64,
    pub skill_coverage: f64,
    pub seniority_match: f64,
    pub signal_strength: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchEstimate {
    pub estimated_score: f64,
    pub breakdown: MatchEstimateBreakdown,
    pub recommendations: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes a profile text for signal strength across all twelve edge types.
pub fn analyze_profile_signals(profile_text: &str) -> ProfileSignalAnalysis {
    let lower = profile_text.to_lowercase();

    let skill_count = count_skill_mentions(&lower);
    let company_count = count_company_mentions(&lower);
    let title_count = count_title_mentions(&lower);

    let edges = [
        edge(
            SignalEdgeType::MemberJobApply,
            "Job applications submitted",
            "Apply to relevant jobs that match your profile",
            false,
            Some(0),
        ),
        edge(
            SignalEdgeType::MemberJobSave,
            "Jobs saved for later",
            "Save jobs you're interested in to signal preferences",
            false,
            None,
        ),
        edge(
            SignalEdgeType::MemberJobClick,
            "Jobs viewed/clicked",
            "Click on relevant jobs to train the algorithm",
            false,
            None,
        ),
        edge(
            SignalEdgeType::MemberJobDismiss,
            "Jobs dismissed (negative)",
            "Only dismiss truly irrelevant jobs",
            false,
            None,
        ),
        edge(
            SignalEdgeType::MemberSkill,
            "Skills listed on profile",
            "Add all relevant skills with endorsements",
            detect_skills(&lower),
            Some(skill_count),
        ),
        edge(
            SignalEdgeType::MemberCompany,
            "Companies worked at",
            "List all companies, especially recognizable ones",
            detect_companies(&lower),
            Some(company_count),
        ),
        edge(
            SignalEdgeType::MemberTitle,
            "Job titles held",
            "Use standard, searchable job titles",
            detect_titles(&lower),
            Some(title_count),
        ),
        edge(
            SignalEdgeType::MemberPositionCurrent,
            "Current position details",
            "Current role should be detailed and keyword-rich",
            CURRENT_POSITION.is_match(&lower),
            None,
        ),
        edge(
            SignalEdgeType::MemberPositionPast,
            "Past positions",
            "Include 3-5 past roles with clear progression",
            PAST_POSITION.is_match(&lower) || YEAR_RANGE.is_match(profile_text),
            None,
        ),
        edge(
            SignalEdgeType::MemberRecruiterPositive,
            "Positive recruiter interactions",
            "Reply to InMails, even with polite declines",
            false,
            None,
        ),
        edge(
            SignalEdgeType::MemberCourseComplete,
            "LinkedIn Learning courses",
            "Complete courses that match target job skills",
            COURSE.is_match(&lower),
            None,
        ),
        edge(
            SignalEdgeType::MemberConnection,
            "Network connections",
            "Connect with people at target companies",
            false,
            None,
        ),
    ];

    let mut total_weight = 0.0;
    let mut earned_weight = 0.0;
    for e in &edges {
        if e.weight > 0.0 {
            total_weight += e.weight;
            if e.detected {
                earned_weight += e.weight;
            }
        }
    }
    let overall_score = earned_weight / total_weight * 100.0;

    let skill_detected = edges
        .iter()
        .any(|e| e.edge_type == SignalEdgeType::MemberSkill && e.detected);
    let current_detected = edges
        .iter()
        .any(|e| e.edge_type == SignalEdgeType::MemberPositionCurrent && e.detected);
    let course_detected = edges
        .iter()
        .any(|e| e.edge_type == SignalEdgeType::MemberCourseComplete && e.detected);

    let mut critical_gaps = Vec::new();
    if !skill_detected {
        critical_gaps.push("No skills detected - add skills to profile");
    }
    if !current_detected {
        critical_gaps.push("No current position detected");
    }
    if skill_count < 10 {
        critical_gaps.push("Less than 10 skills - LinkedIn GNN needs more data points");
    }

    let optimizations = build_optimizations(skill_count, course_detected, profile_text);

    let estimated_gnn_reach =
        (skill_count as u64 * 50_000 + company_count as u64 * 100_000).min(1_000_000);

    ProfileSignalAnalysis {
        overall_score,
        edge_coverage: edges.into_iter().map(|e| (e.edge_type, e)).collect(),
        critical_gaps,
        optimizations,
        estimated_gnn_reach,
    }
}

fn edge(
    edge_type: SignalEdgeType,
    description: &'static str,
    how_to_optimize: &'static str,
    detected: bool,
    count: Option<usize>,
) -> SignalEdge {
    SignalEdge {
        edge_type,
        weight: edge_type.weight(),
        description,
        how_to_optimize,
        detected,
        count,
    }
}

fn detect_skills(text: &str) -> bool {
    SKILL_INDICATORS.iter().any(|s| text.contains(s))
}

fn count_skill_mentions(text: &str) -> usize {
    SKILL_KEYWORDS.iter().filter(|s| text.contains(*s)).count()
}

fn detect_companies(text: &str) -> bool {
    COMPANY_DETECTORS.iter().any(|p| p.is_match(text))
}

fn count_company_mentions(text: &str) -> usize {
    let count = text
        .lines()
        .map(|line| {
            usize::from(COMPANY_LINE_SUFFIX.is_match(line))
                + usize::from(COMPANY_LINE_PIPE.is_match(line))
        })
        .sum::<usize>();
    count.min(10)
}

fn detect_titles(text: &str) -> bool {
    TITLE_INDICATORS.iter().any(|t| text.contains(t))
}

fn count_title_mentions(text: &str) -> usize {
    let count = TITLE_COUNT_KEYWORDS
        .iter()
        .map(|t| text.matches(t).count())
        .sum::<usize>();
    count.min(5)
}

fn build_optimizations(
    skill_count: usize,
    course_detected: bool,
    profile_text: &str,
) -> Vec<ProfileOptimization> {
    let mut optimizations = Vec::new();

    if skill_count < 25 {
        optimizations.push(ProfileOptimization {
            area: "Skills",
            priority: if skill_count < 10 {
                Priority::Critical
            } else {
                Priority::High
            },
            action: format!("Add {} more skills to reach optimal coverage", 25 - skill_count),
            impact: "LinkedIn GNN samples up to 100 neighbors - more skills = more connections",
            effort: Effort::Easy,
        });
    }

    optimizations.push(ProfileOptimization {
        area: "Skill Endorsements",
        priority: Priority::Medium,
        action: "Get endorsements for top 5 skills from connections".to_string(),
        impact: "Endorsements strengthen skill edges in the graph",
        effort: Effort::Medium,
    });

    if !course_detected {
        optimizations.push(ProfileOptimization {
            area: "LinkedIn Learning",
            priority: Priority::Medium,
            action: "Complete 3-5 LinkedIn Learning courses in target areas".to_string(),
            impact: "Creates member-course edges that connect to job requirements",
            effort: Effort::Medium,
        });
    }

    let word_count = profile_text.split_whitespace().count();
    if word_count < 500 {
        optimizations.push(ProfileOptimization {
            area: "Profile Depth",
            priority: Priority::High,
            action: "Expand profile to 1500+ words for better LLM embedding".to_string(),
            impact: "STAR uses E5-Mistral with 1800 token context - use it all",
            effort: Effort::Medium,
        });
    }

    optimizations.push(ProfileOptimization {
        area: "Recruiter Engagement",
        priority: Priority::High,
        action: "Reply to ALL InMails (even declines create positive edges)".to_string(),
        impact: "+2.7% InMail reply rate = key STAR business metric",
        effort: Effort::Easy,
    });

    optimizations.push(ProfileOptimization {
        area: "Strategic Connections",
        priority: Priority::Medium,
        action: "Connect with 10+ people at each target company".to_string(),
        impact: "GNN propagates signals through connection edges",
        effort: Effort::Medium,
    });

    optimizations.push(ProfileOptimization {
        area: "Application Strategy",
        priority: Priority::High,
        action: "Apply to jobs matching your profile (even if not perfect)".to_string(),
        impact: "Applications are the #1 training signal in STAR (1.0 weight)",
        effort: Effort::Easy,
    });

    optimizations.sort_by_key(|o| o.priority);
    optimizations
}

// ────────────────────────────────────────────────────────────────────────────
// Match estimation
// ────────────────────────────────────────────────────────────────────────────

/// Estimates how the ranking model would score a profile for one job posting.
pub fn estimate_linkedin_match_score(profile_text: &str, job_description: &str) -> MatchEstimate {
    let profile_lower = profile_text.to_lowercase();
    let job_lower = job_description.to_lowercase();

    let profile_words: HashSet<&str> =
        WORD.find_iter(&profile_lower).map(|m| m.as_str()).collect();
    let job_words: Vec<&str> = WORD.find_iter(&job_lower).map(|m| m.as_str()).collect();
    let overlap = job_words.iter().filter(|w| profile_words.contains(*w)).count();
    let textual_similarity = if job_words.is_empty() {
        0.0
    } else {
        (overlap as f64 / job_words.len() as f64 * 150.0).min(100.0)
    };

    let profile_signals = analyze_profile_signals(profile_text);
    let skill_count = profile_signals
        .edge_coverage
        .get(&SignalEdgeType::MemberSkill)
        .and_then(|e| e.count)
        .unwrap_or(0);
    let skill_coverage = (skill_count as f64 * 4.0).min(100.0);

    let profile_seniority = SENIORITY_KEYWORDS
        .iter()
        .filter(|k| profile_lower.contains(**k))
        .count();
    let job_seniority = SENIORITY_KEYWORDS
        .iter()
        .filter(|k| job_lower.contains(**k))
        .count();
    let seniority_match = if profile_seniority >= job_seniority {
        100.0
    } else {
        profile_seniority as f64 / job_seniority.max(1) as f64 * 100.0
    };

    let signal_strength = profile_signals.overall_score;

    let estimated_score = textual_similarity * 0.4
        + skill_coverage * 0.3
        + seniority_match * 0.15
        + signal_strength * 0.15;

    let mut recommendations = Vec::new();
    if textual_similarity < 50.0 {
        recommendations.push("Add more keywords from the job description to your profile");
    }
    if skill_coverage < 60.0 {
        recommendations.push("Add skills mentioned in the job posting to your profile");
    }
    if seniority_match < 80.0 {
        recommendations.push("Job requires higher seniority signals than your profile shows");
    }
    if signal_strength < 50.0 {
        recommendations.push("Increase profile engagement signals (applications, course completions)");
    }

    MatchEstimate {
        estimated_score,
        breakdown: MatchEstimateBreakdown {
            textual_similarity,
            skill_coverage,
            seniority_match,
            signal_strength,
        },
        recommendations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RICH_PROFILE: &str = "Senior Software Engineer with Python, React, AWS, SQL skills. \
        Currently at Initech, present role. Previously worked at Globex from 2015 - 2019. \
        Certified Kubernetes Administrator course. Leadership and management.";

    /// Sum of the eleven positive edge weights.
    const TOTAL_POSITIVE_WEIGHT: f64 = 6.05;

    #[test]
    fn test_empty_profile_scores_zero_with_gaps() {
        let analysis = analyze_profile_signals("");

        assert_eq!(analysis.overall_score, 0.0);
        assert_eq!(analysis.estimated_gnn_reach, 0);
        assert!(analysis
            .critical_gaps
            .contains(&"No skills detected - add skills to profile"));
        assert!(analysis.critical_gaps.contains(&"No current position detected"));
        assert!(analysis
            .critical_gaps
            .contains(&"Less than 10 skills - LinkedIn GNN needs more data points"));
        assert!(analysis.edge_coverage.values().all(|e| !e.detected));
    }

    #[test]
    fn test_rich_profile_detects_attribute_edges() {
        let analysis = analyze_profile_signals(RICH_PROFILE);
        let coverage = &analysis.edge_coverage;

        for detected in [
            SignalEdgeType::MemberSkill,
            SignalEdgeType::MemberCompany,
            SignalEdgeType::MemberTitle,
            SignalEdgeType::MemberPositionCurrent,
            SignalEdgeType::MemberPositionPast,
            SignalEdgeType::MemberCourseComplete,
        ] {
            assert!(coverage[&detected].detected, "{detected:?} not detected");
        }
        // Interaction edges are invisible to text analysis.
        assert!(!coverage[&SignalEdgeType::MemberJobApply].detected);
        assert!(!coverage[&SignalEdgeType::MemberConnection].detected);

        let earned = 0.5 + 0.45 + 0.45 + 0.5 + 0.4 + 0.6;
        let expected = earned / TOTAL_POSITIVE_WEIGHT * 100.0;
        assert!((analysis.overall_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_skill_count_drives_reach_estimate() {
        let analysis = analyze_profile_signals(RICH_PROFILE);
        // python, react, aws, kubernetes, sql, leadership, management.
        assert_eq!(
            analysis.edge_coverage[&SignalEdgeType::MemberSkill].count,
            Some(7)
        );
        // Company counting needs capitalized lines, which lowercasing removes.
        assert_eq!(
            analysis.edge_coverage[&SignalEdgeType::MemberCompany].count,
            Some(0)
        );
        assert_eq!(analysis.estimated_gnn_reach, 7 * 50_000);
    }

    #[test]
    fn test_reach_caps_at_one_million() {
        let everything = SKILL_KEYWORDS.join(" ");
        let analysis = analyze_profile_signals(&everything);
        assert_eq!(analysis.estimated_gnn_reach, 1_000_000);
    }

    #[test]
    fn test_year_range_counts_as_past_position() {
        let analysis = analyze_profile_signals("Software roles 2015 - 2019.");
        assert!(analysis.edge_coverage[&SignalEdgeType::MemberPositionPast].detected);
        assert!(!analysis.edge_coverage[&SignalEdgeType::MemberPositionCurrent].detected);
    }

    #[test]
    fn test_title_mentions_count_occurrences_capped_at_five() {
        assert_eq!(count_title_mentions("senior senior senior"), 3);
        assert_eq!(
            count_title_mentions("senior lead manager engineer analyst staff principal"),
            5
        );
    }

    #[test]
    fn test_optimizations_lead_with_critical_skills_gap() {
        let analysis = analyze_profile_signals("");
        let optimizations = &analysis.optimizations;

        assert_eq!(optimizations.len(), 7);
        assert_eq!(optimizations[0].area, "Skills");
        assert_eq!(optimizations[0].priority, Priority::Critical);
        assert_eq!(
            optimizations[0].action,
            "Add 25 more skills to reach optimal coverage"
        );
        assert!(optimizations
            .windows(2)
            .all(|pair| pair[0].priority <= pair[1].priority));
    }

    #[test]
    fn test_match_estimate_keyword_overlap() {
        let profile = "python developer with aws and react experience";
        let job = "looking for python and react developer";
        let estimate = estimate_linkedin_match_score(profile, job);

        // 4 of 6 job words appear in the profile; 4/6 × 150 caps at 100.
        assert_eq!(estimate.breakdown.textual_similarity, 100.0);
        assert_eq!(estimate.breakdown.skill_coverage, 12.0);
        assert_eq!(estimate.breakdown.seniority_match, 100.0);
        assert_eq!(
            estimate.recommendations,
            vec![
                "Add skills mentioned in the job posting to your profile",
                "Increase profile engagement signals (applications, course completions)",
            ]
        );
    }

    #[test]
    fn test_match_estimate_empty_job_is_finite() {
        let estimate = estimate_linkedin_match_score("python engineer", "");
        assert_eq!(estimate.breakdown.textual_similarity, 0.0);
        assert!(estimate.estimated_score.is_finite());
    }

    #[test]
    fn test_seniority_shortfall_recommendation() {
        let estimate = estimate_linkedin_match_score(
            "junior dev",
            "senior lead principal director manager role",
        );
        assert_eq!(estimate.breakdown.seniority_match, 0.0);
        assert!(estimate
            .recommendations
            .contains(&"Job requires higher seniority signals than your profile shows"));
    }

    #[test]
    fn test_edge_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SignalEdgeType::MemberJobApply).unwrap(),
            "\"member-job-apply\""
        );
        assert_eq!(
            serde_json::to_string(&SignalEdgeType::MemberRecruiterPositive).unwrap(),
            "\"member-recruiter-positive\""
        );
    }

    #[test]
    fn test_edge_coverage_serializes_all_twelve() {
        let analysis = analyze_profile_signals("python");
        let value = serde_json::to_value(&analysis).unwrap();
        let coverage = value["edge_coverage"].as_object().unwrap();
        assert_eq!(coverage.len(), 12);
        assert!(coverage.contains_key("member-job-apply"));
        assert!(coverage.contains_key("member-job-dismiss"));
    }

    #[test]
    fn test_positive_weights_sum_matches_constant() {
        let sum: f64 = analyze_profile_signals("")
            .edge_coverage
            .values()
            .map(|e| e.weight)
            .filter(|w| *w > 0.0)
            .sum();
        assert!((sum - TOTAL_POSITIVE_WEIGHT).abs() < 1e-9);
    }
}
