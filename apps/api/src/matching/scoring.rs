//! Weighted multi-dimensional match scoring.
//!
//! Six dimensions combine into a composite: keyword alignment, experience
//! relevance, skills coverage, quantified impact, recency, and culture.
//! Recency and culture are fixed placeholders pending date parsing and
//! sentiment heuristics.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::keywords::calculate_keyword_match;
use crate::matching::profile::{JobDescription, MasterProfile};

/// Composite weights for the six match dimensions. These define the grading
/// rubric and must sum to 1.
pub struct DimensionWeights {
    pub keyword: f64,
    pub experience: f64,
    pub skills: f64,
    pub impact: f64,
    pub recency: f64,
    pub culture: f64,
}

pub const DIMENSION_WEIGHTS: DimensionWeights = DimensionWeights {
    keyword: 0.25,
    experience: 0.25,
    skills: 0.20,
    impact: 0.15,
    recency: 0.10,
    culture: 0.05,
};

/// Numbers with an optional magnitude/unit suffix, counted as evidence of
/// quantified impact.
static METRIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+[%$KMB]?").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    StrongMatch,
    ModerateMatch,
    WeakMatch,
    NoMatch,
}

impl MatchTier {
    /// Inclusive lower bounds: ≥75 strong, ≥50 moderate, ≥25 weak.
    pub fn for_score(score: f64) -> MatchTier {
        if score >= 75.0 {
            MatchTier::StrongMatch
        } else if score >= 50.0 {
            MatchTier::ModerateMatch
        } else if score >= 25.0 {
            MatchTier::WeakMatch
        } else {
            MatchTier::NoMatch
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::StrongMatch => "STRONG_MATCH",
            MatchTier::ModerateMatch => "MODERATE_MATCH",
            MatchTier::WeakMatch => "WEAK_MATCH",
            MatchTier::NoMatch => "NO_MATCH",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MatchTier::StrongMatch => "✅",
            MatchTier::ModerateMatch => "⚠️",
            MatchTier::WeakMatch => "🟡",
            MatchTier::NoMatch => "🚫",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub keyword_score: f64,
    pub experience_score: f64,
    pub skills_score: f64,
    pub impact_score: f64,
    pub recency_score: f64,
    pub culture_score: f64,
    pub total_score: f64,
    pub match_tier: MatchTier,
    pub keywords_matched: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub skills_matched: Vec<String>,
    pub skills_missing: Vec<String>,
    pub experience_direct: Vec<String>,
    pub experience_transferable: Vec<String>,
    pub experience_gaps: Vec<String>,
    pub overqualified: bool,
    pub underqualified: bool,
    pub recommendations: Vec<String>,
}

#[derive(Debug)]
pub struct SkillsMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ExperienceClassification {
    pub direct: Vec<String>,
    pub transferable: Vec<String>,
    pub gaps: Vec<String>,
}

fn dedup_lowercase(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Fraction of job requirements covered by profile skills. A requirement
/// counts as matched when it contains a skill or a skill contains it, so
/// "java" matches "javascript" in either direction.
pub fn calculate_skills_match(
    profile_skills: &[String],
    job_requirements: &[String],
) -> SkillsMatch {
    let profile_set = dedup_lowercase(profile_skills);
    let required_set = dedup_lowercase(job_requirements);

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for req in &required_set {
        let found = profile_set
            .iter()
            .any(|skill| skill.contains(req.as_str()) || req.contains(skill.as_str()));
        if found {
            matched.push(req.clone());
        } else {
            missing.push(req.clone());
        }
    }

    if required_set.is_empty() {
        return SkillsMatch {
            score: 0.0,
            matched,
            missing,
        };
    }

    SkillsMatch {
        score: matched.len() as f64 / required_set.len() as f64 * 100.0,
        matched,
        missing,
    }
}

/// Buckets each requirement by how many of its meaningful words appear in the
/// concatenated experience text: >70% direct, >30% transferable, else gap.
/// Requirements with no words longer than two characters are skipped.
pub fn classify_experience(
    profile_experience: &[String],
    job_requirements: &[String],
) -> ExperienceClassification {
    let profile_text = profile_experience.join(" ").to_lowercase();
    let mut classification = ExperienceClassification::default();

    for req in job_requirements {
        let req_lower = req.to_lowercase();
        let keywords: Vec<&str> = req_lower
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .collect();
        if keywords.is_empty() {
            continue;
        }

        let matches = keywords
            .iter()
            .filter(|kw| profile_text.contains(**kw))
            .count();
        let ratio = matches as f64 / keywords.len() as f64;

        if ratio > 0.7 {
            classification.direct.push(req.clone());
        } else if ratio > 0.3 {
            classification.transferable.push(req.clone());
        } else {
            classification.gaps.push(req.clone());
        }
    }

    classification
}

/// Full profile-to-job analysis: per-dimension scores, weighted composite,
/// tier, qualification flags, and recommendations.
pub fn analyze_match(profile: &MasterProfile, job: &JobDescription) -> MatchResult {
    let keyword = calculate_keyword_match(&profile.text, &job.text);

    let (skills_score, skills_matched, skills_missing) =
        if !profile.skills.is_empty() && !job.requirements.is_empty() {
            let skills = calculate_skills_match(&profile.skills, &job.requirements);
            (skills.score, skills.matched, skills.missing)
        } else {
            (50.0, Vec::new(), Vec::new())
        };

    let (experience_score, experience) =
        if !profile.experience.is_empty() && !job.requirements.is_empty() {
            let classification = classify_experience(&profile.experience, &job.requirements);
            let total = job.requirements.len() as f64;
            let direct_weight = classification.direct.len() as f64 / total;
            let transfer_weight = classification.transferable.len() as f64 / total * 0.6;
            ((direct_weight + transfer_weight) * 100.0, classification)
        } else {
            (50.0, ExperienceClassification::default())
        };

    let metric_mentions = METRIC.find_iter(&profile.text).count();
    let impact_score = (metric_mentions as f64 * 5.0).min(100.0);
    let recency_score = 70.0;
    let culture_score = 60.0;

    let mut overqualified = false;
    let mut underqualified = false;
    if profile.years_experience > 0 {
        if let Some(required) = job.years_required.filter(|&y| y > 0) {
            let years = profile.years_experience as f64;
            let required = required as f64;
            if years > required * 1.5 {
                overqualified = true;
            } else if years < required * 0.7 {
                underqualified = true;
            }
        }
    }

    let total_score = keyword.score * DIMENSION_WEIGHTS.keyword
        + experience_score * DIMENSION_WEIGHTS.experience
        + skills_score * DIMENSION_WEIGHTS.skills
        + impact_score * DIMENSION_WEIGHTS.impact
        + recency_score * DIMENSION_WEIGHTS.recency
        + culture_score * DIMENSION_WEIGHTS.culture;

    let mut result = MatchResult {
        keyword_score: keyword.score,
        experience_score,
        skills_score,
        impact_score,
        recency_score,
        culture_score,
        total_score,
        match_tier: MatchTier::for_score(total_score),
        keywords_matched: keyword.matched,
        keywords_missing: keyword.missing,
        skills_matched,
        skills_missing,
        experience_direct: experience.direct,
        experience_transferable: experience.transferable,
        experience_gaps: experience.gaps,
        overqualified,
        underqualified,
        recommendations: Vec::new(),
    };

    let recommendations = build_recommendations(&result);
    result.recommendations = recommendations;
    result
}

fn join_first(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_recommendations(result: &MatchResult) -> Vec<String> {
    let mut recs = Vec::new();

    if !result.keywords_missing.is_empty() {
        let keywords = join_first(&result.keywords_missing, 5);
        recs.push(format!("Add keywords to profile: {keywords}"));
    }

    if !result.skills_missing.is_empty() {
        let skills = join_first(&result.skills_missing, 3);
        recs.push(format!("Skills gap - consider: {skills}"));
    }

    if !result.experience_gaps.is_empty() {
        let gaps = join_first(&result.experience_gaps, 3);
        recs.push(format!("Experience gaps to address: {gaps}"));
    }

    if result.overqualified {
        recs.push("Consider right-sizing experience presentation".to_string());
        recs.push("Generate negotiation brief for leverage".to_string());
    }

    if result.underqualified {
        recs.push("Focus cover letter on transferable skills".to_string());
        recs.push("Address gaps proactively".to_string());
    }

    if result.total_score < 50.0 {
        recs.push("Consider if this role aligns with career goals".to_string());
    }

    if result.total_score >= 75.0 {
        recs.push("Strong match - prioritize this application".to_string());
        recs.push("Tailor resume to emphasize matched keywords".to_string());
    }

    recs
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(skills: &[&str], experience: &[&str], years: u32, text: &str) -> MasterProfile {
        MasterProfile {
            name: "Test".to_string(),
            text: text.to_string(),
            skills: strs(skills),
            experience: strs(experience),
            years_experience: years,
        }
    }

    fn job(requirements: &[&str], years: Option<u32>, text: &str) -> JobDescription {
        JobDescription {
            title: "Role".to_string(),
            company: "Co".to_string(),
            text: text.to_string(),
            requirements: strs(requirements),
            years_required: years,
        }
    }

    #[test]
    fn test_skills_match_is_bidirectional_substring() {
        let result = calculate_skills_match(&strs(&["javascript"]), &strs(&["java", "rust"]));
        assert_eq!(result.matched, ["java"]);
        assert_eq!(result.missing, ["rust"]);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_skills_match_deduplicates_requirements() {
        let result = calculate_skills_match(&strs(&["python"]), &strs(&["Python", "python"]));
        assert_eq!(result.matched, ["python"]);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_classify_experience_buckets_by_word_overlap() {
        let experience = strs(&["built python data pipelines for partner analytics"]);
        let classification = classify_experience(
            &experience,
            &strs(&[
                "python data pipelines",       // 3/3 words -> direct
                "data warehouse modeling",     // 1/3 -> transferable
                "kubernetes cluster operations", // 0/3 -> gap
            ]),
        );
        assert_eq!(classification.direct.len(), 1);
        assert_eq!(classification.transferable.len(), 1);
        assert_eq!(classification.gaps.len(), 1);
    }

    #[test]
    fn test_classify_skips_requirements_without_meaningful_words() {
        let classification = classify_experience(&strs(&["anything"]), &strs(&["a an of"]));
        assert!(classification.direct.is_empty());
        assert!(classification.transferable.is_empty());
        assert!(classification.gaps.is_empty());
    }

    #[test]
    fn test_tier_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(MatchTier::for_score(75.0), MatchTier::StrongMatch);
        assert_eq!(MatchTier::for_score(74.9), MatchTier::ModerateMatch);
        assert_eq!(MatchTier::for_score(50.0), MatchTier::ModerateMatch);
        assert_eq!(MatchTier::for_score(49.9), MatchTier::WeakMatch);
        assert_eq!(MatchTier::for_score(25.0), MatchTier::WeakMatch);
        assert_eq!(MatchTier::for_score(24.9), MatchTier::NoMatch);
        assert_eq!(MatchTier::for_score(0.0), MatchTier::NoMatch);
    }

    #[test]
    fn test_analyze_match_empty_inputs_uses_defaults() {
        let result = analyze_match(&profile(&[], &[], 0, ""), &job(&[], None, ""));

        assert_eq!(result.keyword_score, 0.0);
        assert_eq!(result.skills_score, 50.0);
        assert_eq!(result.experience_score, 50.0);
        assert_eq!(result.impact_score, 0.0);
        assert_eq!(result.recency_score, 70.0);
        assert_eq!(result.culture_score, 60.0);
        // 0*.25 + 50*.25 + 50*.20 + 0*.15 + 70*.10 + 60*.05 = 32.5
        assert!((result.total_score - 32.5).abs() < 1e-9);
        assert_eq!(result.match_tier, MatchTier::WeakMatch);
        assert_eq!(
            result.recommendations,
            ["Consider if this role aligns with career goals"]
        );
    }

    #[test]
    fn test_impact_score_caps_at_100() {
        let text = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let result = analyze_match(&profile(&[], &[], 0, &text), &job(&[], None, ""));
        assert_eq!(result.impact_score, 100.0);
    }

    #[test]
    fn test_overqualified_flag_and_recommendations() {
        let result = analyze_match(&profile(&[], &[], 10, ""), &job(&[], Some(6), ""));
        assert!(result.overqualified);
        assert!(!result.underqualified);
        assert!(result
            .recommendations
            .contains(&"Generate negotiation brief for leverage".to_string()));
    }

    #[test]
    fn test_underqualified_flag() {
        let result = analyze_match(&profile(&[], &[], 4, ""), &job(&[], Some(6), ""));
        assert!(result.underqualified);
        assert!(!result.overqualified);
        assert!(result
            .recommendations
            .contains(&"Address gaps proactively".to_string()));
    }

    #[test]
    fn test_years_within_band_sets_no_flags() {
        let result = analyze_match(&profile(&[], &[], 6, ""), &job(&[], Some(6), ""));
        assert!(!result.overqualified);
        assert!(!result.underqualified);
    }

    #[test]
    fn test_recommendation_order_and_templates() {
        let mut result = analyze_match(
            &profile(
                &["python"],
                &["wrote python scripts"],
                0,
                "python scripts",
            ),
            &job(
                &["airflow orchestration experience"],
                None,
                "airflow orchestration dagster prefect",
            ),
        );
        // keywords missing come first, then skills, then experience gaps
        assert!(result.recommendations[0].starts_with("Add keywords to profile: "));
        assert!(result.recommendations[1].starts_with("Skills gap - consider: "));
        assert!(result.recommendations[2].starts_with("Experience gaps to address: "));

        // keyword recommendation lists at most five missing keywords
        result.keywords_missing = strs(&["a1", "a2", "a3", "a4", "a5", "a6"]);
        let recs = build_recommendations(&result);
        assert!(recs[0].ends_with("a1, a2, a3, a4, a5"));
    }

    #[test]
    fn test_strong_match_recommendations() {
        // all-direct requirements and a metric-rich profile push past 75
        let result = analyze_match(
            &profile(
                &["python", "sql"],
                &["built python sql pipelines"],
                0,
                "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 python sql pipelines",
            ),
            &job(
                &["python sql pipelines"],
                None,
                "python sql pipelines",
            ),
        );
        assert!(result.total_score >= 75.0);
        assert_eq!(result.match_tier, MatchTier::StrongMatch);
        assert!(result
            .recommendations
            .contains(&"Strong match - prioritize this application".to_string()));
    }
}
