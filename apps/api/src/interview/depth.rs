//! Narrative-depth analysis of profile text.
//!
//! Extracts per-skill context lines, measures the depth of the narrative
//! around each skill (projects, specificity, recency, teaching, architecture,
//! quantified impact), and predicts the rating an AI interviewer would assign
//! on the not-familiar/junior/mid-level/senior scale.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::interview::types::SkillLevel;

// ────────────────────────────────────────────────────────────────────────────
// Skill extraction
// ────────────────────────────────────────────────────────────────────────────

/// Skills recognized in profile text, in reporting order.
const SKILL_TERMS: [&str; 33] = [
    "react",
    "javascript",
    "typescript",
    "python",
    "node.js",
    "nodejs",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "salesforce",
    "crm",
    "hubspot",
    "crossbeam",
    "sql",
    "postgresql",
    "mongodb",
    "redis",
    "graphql",
    "rest",
    "api",
    "machine learning",
    "ai",
    "llm",
    "claude",
    "gpt",
    "gemini",
    "partner operations",
    "gtm",
    "revenue operations",
    "program management",
    "technical program management",
];

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SKILL_TERMS
        .into_iter()
        .map(|term| {
            let pattern = Regex::new(&format!(r"(?i)\b{term}\b")).expect("valid regex");
            (term, pattern)
        })
        .collect()
});

/// Collects every line of the profile that mentions each known skill.
/// Matching is per line and word-bounded; skills with no mentions are
/// omitted. Output follows the `SKILL_TERMS` order.
pub fn extract_skill_contexts(profile_text: &str) -> Vec<(String, Vec<String>)> {
    let mut skills = Vec::new();
    for (term, pattern) in SKILL_PATTERNS.iter() {
        let contexts: Vec<String> = profile_text
            .lines()
            .filter(|line| pattern.is_match(line))
            .map(|line| line.trim().to_string())
            .collect();
        if !contexts.is_empty() {
            skills.push((term.to_string(), contexts));
        }
    }
    skills
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative depth
// ────────────────────────────────────────────────────────────────────────────

const PROJECT_KEYWORDS: [&str; 6] = [
    "project",
    "built",
    "created",
    "implemented",
    "led",
    "architected",
];

const TEACHING_KEYWORDS: [&str; 5] = ["taught", "mentored", "trained", "facilitated", "workshop"];

const ARCHITECTURE_KEYWORDS: [&str; 6] = [
    "architected",
    "designed",
    "led",
    "system",
    "framework",
    "architecture",
];

const RECENCY_MARKERS: [&str; 5] = ["2024", "2025", "2023", "present", "current"];

static HAS_METRIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[%$KMB]?").expect("valid regex"));

static SPECIFIC_ACTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)deployed|integrated|configured|optimized").expect("valid regex")
});

/// Evidence signals measured across one skill's context lines.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NarrativeDepth {
    pub project_count: u32,
    pub specificity_score: u32,
    pub recency_score: u32,
    pub teaching_evidence: bool,
    pub architectural_decisions: bool,
    pub quantified_impact: bool,
}

/// Full depth assessment for one skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillDepthAssessment {
    pub skill_name: String,
    pub claimed_level: SkillLevel,
    pub evidence_strength: u32,
    pub narrative_depth: NarrativeDepth,
    pub predicted_ai_rating: SkillLevel,
    pub confidence: u32,
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Measures narrative depth for one skill and rolls it up into an evidence
/// strength on a 0-100 scale.
pub fn calculate_skill_depth(skill: &str, contexts: &[String]) -> SkillDepthAssessment {
    let lowered: Vec<String> = contexts.iter().map(|c| c.to_lowercase()).collect();

    let project_count = lowered
        .iter()
        .filter(|context| PROJECT_KEYWORDS.iter().any(|kw| context.contains(kw)))
        .count() as u32;

    let has_metrics = contexts.iter().any(|context| HAS_METRIC.is_match(context));
    let has_specific_actions = contexts
        .iter()
        .any(|context| SPECIFIC_ACTIONS.is_match(context));
    let specificity_score = u32::from(has_metrics) * 5 + u32::from(has_specific_actions) * 5;

    let recency_score = if lowered
        .iter()
        .any(|context| RECENCY_MARKERS.iter().any(|marker| context.contains(marker)))
    {
        10
    } else {
        5
    };

    let teaching_evidence = lowered
        .iter()
        .any(|context| TEACHING_KEYWORDS.iter().any(|kw| context.contains(kw)));
    let architectural_decisions = lowered
        .iter()
        .any(|context| ARCHITECTURE_KEYWORDS.iter().any(|kw| context.contains(kw)));

    let depth = NarrativeDepth {
        project_count,
        specificity_score,
        recency_score,
        teaching_evidence,
        architectural_decisions,
        quantified_impact: has_metrics,
    };

    let evidence_strength = (project_count * 15
        + specificity_score * 3
        + recency_score * 2
        + u32::from(teaching_evidence) * 15
        + u32::from(architectural_decisions) * 15
        + u32::from(has_metrics) * 10)
        .min(100);

    let predicted_ai_rating = predict_ai_rating(evidence_strength, &depth);
    let (gaps, recommendations) = build_gaps_and_recommendations(skill, &depth, evidence_strength);

    SkillDepthAssessment {
        skill_name: skill.to_string(),
        // profile text carries no explicit level claims
        claimed_level: SkillLevel::MidLevel,
        evidence_strength,
        narrative_depth: depth,
        predicted_ai_rating,
        confidence: (50 + contexts.len() as u32 * 10).min(95),
        gaps,
        recommendations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rating prediction
// ────────────────────────────────────────────────────────────────────────────

/// Ordered decision list, strongest band first.
static RATING_RULES: [(fn(u32, &NarrativeDepth) -> bool, SkillLevel); 3] = [
    (
        |strength, depth| {
            strength >= 75
                && depth.teaching_evidence
                && depth.architectural_decisions
                && depth.project_count >= 3
        },
        SkillLevel::Senior,
    ),
    (
        |strength, depth| {
            strength >= 50 && depth.project_count >= 2 && depth.specificity_score >= 5
        },
        SkillLevel::MidLevel,
    ),
    (
        |strength, depth| strength >= 25 && depth.project_count >= 1,
        SkillLevel::Junior,
    ),
];

/// First matching band wins; no band means not-familiar.
pub fn predict_ai_rating(strength: u32, depth: &NarrativeDepth) -> SkillLevel {
    RATING_RULES
        .iter()
        .find(|(predicate, _)| predicate(strength, depth))
        .map(|(_, level)| *level)
        .unwrap_or(SkillLevel::NotFamiliar)
}

fn build_gaps_and_recommendations(
    skill: &str,
    depth: &NarrativeDepth,
    evidence_strength: u32,
) -> (Vec<String>, Vec<String>) {
    let mut gaps = Vec::new();
    let mut recommendations = Vec::new();

    if depth.project_count < 2 {
        gaps.push(format!(
            "Only {} project(s) demonstrating {skill}",
            depth.project_count
        ));
        recommendations.push(format!("Prepare 2-3 specific project examples using {skill}"));
    }
    if depth.specificity_score < 5 {
        gaps.push("Lack of specific, concrete details".to_string());
        recommendations
            .push("Add metrics, timelines, and specific outcomes to examples".to_string());
    }
    if !depth.teaching_evidence {
        gaps.push("No evidence of teaching or mentoring with this skill".to_string());
        recommendations
            .push("Prepare an example of explaining/teaching this skill to others".to_string());
    }
    if !depth.architectural_decisions {
        gaps.push("No evidence of architectural or design decisions".to_string());
        recommendations
            .push("Prepare an example of a design decision you made and its rationale".to_string());
    }
    if !depth.quantified_impact {
        gaps.push("No quantified impact metrics".to_string());
        recommendations
            .push("Add specific numbers: time saved, revenue impact, team size, etc.".to_string());
    }
    if evidence_strength < 50 {
        recommendations.insert(
            0,
            format!("Priority: Build stronger evidence base for {skill}"),
        );
    }

    (gaps, recommendations)
}

/// Analyzes every recognized skill in the profile, weakest evidence first.
pub fn analyze_profile_skill_depth(profile_text: &str) -> Vec<SkillDepthAssessment> {
    let mut assessments: Vec<SkillDepthAssessment> = extract_skill_contexts(profile_text)
        .into_iter()
        .map(|(skill, contexts)| calculate_skill_depth(&skill, &contexts))
        .collect();
    assessments.sort_by_key(|a| a.evidence_strength);
    assessments
}

// ────────────────────────────────────────────────────────────────────────────
// Overall prediction
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillPrediction {
    pub rating: SkillLevel,
    pub score: u32,
}

/// Predicted AI-interview outcome across a set of required skills.
#[derive(Debug, Clone, Serialize)]
pub struct OverallPrediction {
    pub total: u32,
    pub per_skill: BTreeMap<String, SkillPrediction>,
    pub pass_likelihood: f64,
}

/// Sums predicted ratings over the required skills. A skill passes when it
/// is predicted at mid-level or above; unassessed skills count as
/// not-familiar.
pub fn predict_overall_ai_score(
    assessments: &[SkillDepthAssessment],
    required_skills: &[String],
) -> OverallPrediction {
    let mut per_skill = BTreeMap::new();
    let mut total = 0;
    let mut passable = 0usize;

    for skill in required_skills {
        let rating = assessments
            .iter()
            .find(|a| a.skill_name.eq_ignore_ascii_case(skill))
            .map_or(SkillLevel::NotFamiliar, |a| a.predicted_ai_rating);
        let score = rating.score();
        total += score;
        if score >= SkillLevel::MidLevel.score() {
            passable += 1;
        }
        per_skill.insert(skill.clone(), SkillPrediction { rating, score });
    }

    let pass_likelihood = if required_skills.is_empty() {
        0.0
    } else {
        passable as f64 / required_skills.len() as f64 * 100.0
    };

    OverallPrediction {
        total,
        per_skill,
        pass_likelihood,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score gap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapDirection {
    BenefitsFromAi,
    HarmedByAi,
    Neutral,
}

/// How a candidate's resume screening compares with their predicted AI
/// interview, both normalized to percentiles.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreGap {
    pub direction: GapDirection,
    pub magnitude: f64,
    pub resume_percentile: f64,
    pub ai_percentile: f64,
}

/// Percentiles are 0.0 when the corresponding maximum is not positive. A
/// difference within 10 points either way is neutral.
pub fn calculate_score_gap(
    resume_score: f64,
    ai_score: f64,
    max_resume_score: f64,
    max_ai_score: f64,
) -> ScoreGap {
    let resume_percentile = if max_resume_score > 0.0 {
        resume_score / max_resume_score * 100.0
    } else {
        0.0
    };
    let ai_percentile = if max_ai_score > 0.0 {
        ai_score / max_ai_score * 100.0
    } else {
        0.0
    };

    let delta = ai_percentile - resume_percentile;
    let direction = if delta > 10.0 {
        GapDirection::BenefitsFromAi
    } else if delta < -10.0 {
        GapDirection::HarmedByAi
    } else {
        GapDirection::Neutral
    };

    ScoreGap {
        direction,
        magnitude: delta.abs(),
        resume_percentile,
        ai_percentile,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn full_depth() -> NarrativeDepth {
        NarrativeDepth {
            project_count: 3,
            specificity_score: 10,
            recency_score: 10,
            teaching_evidence: true,
            architectural_decisions: true,
            quantified_impact: true,
        }
    }

    #[test]
    fn test_extract_collects_every_matching_line() {
        let profile = "Built a React dashboard\nOptimized React rendering\nTaught React patterns";
        let skills = extract_skill_contexts(profile);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].0, "react");
        assert_eq!(skills[0].1.len(), 3);
        assert_eq!(skills[0].1[0], "Built a React dashboard");
    }

    #[test]
    fn test_extract_preserves_term_table_order() {
        let profile = "Deployed on AWS\nBuilt with React";
        let names: Vec<String> = extract_skill_contexts(profile)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["react".to_string(), "aws".to_string()]);
    }

    #[test]
    fn test_predict_rating_bands() {
        assert_eq!(predict_ai_rating(75, &full_depth()), SkillLevel::Senior);
        assert_eq!(predict_ai_rating(74, &full_depth()), SkillLevel::MidLevel);

        let no_teaching = NarrativeDepth {
            teaching_evidence: false,
            ..full_depth()
        };
        assert_eq!(predict_ai_rating(80, &no_teaching), SkillLevel::MidLevel);

        let single_project = NarrativeDepth {
            project_count: 1,
            specificity_score: 0,
            recency_score: 5,
            teaching_evidence: false,
            architectural_decisions: false,
            quantified_impact: false,
        };
        assert_eq!(predict_ai_rating(30, &single_project), SkillLevel::Junior);
        assert_eq!(
            predict_ai_rating(10, &single_project),
            SkillLevel::NotFamiliar
        );

        // strength alone is not enough without project evidence
        let no_projects = NarrativeDepth {
            project_count: 0,
            ..full_depth()
        };
        assert_eq!(predict_ai_rating(90, &no_projects), SkillLevel::NotFamiliar);
    }

    #[test]
    fn test_calculate_skill_depth_strong_evidence() {
        let contexts = strs(&[
            "Led the React replatform in 2024, deployed to 40% more users",
            "Architected the React design system and mentored three engineers",
        ]);
        let assessment = calculate_skill_depth("react", &contexts);

        assert_eq!(assessment.narrative_depth.project_count, 2);
        assert_eq!(assessment.narrative_depth.specificity_score, 10);
        assert_eq!(assessment.narrative_depth.recency_score, 10);
        assert!(assessment.narrative_depth.teaching_evidence);
        assert!(assessment.narrative_depth.architectural_decisions);
        assert!(assessment.narrative_depth.quantified_impact);
        assert_eq!(assessment.evidence_strength, 100);
        assert_eq!(assessment.predicted_ai_rating, SkillLevel::MidLevel);
        assert_eq!(assessment.confidence, 70);
        assert!(assessment.gaps.is_empty());
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_calculate_skill_depth_weak_evidence() {
        let contexts = strs(&["Used salesforce occasionally for reporting"]);
        let assessment = calculate_skill_depth("salesforce", &contexts);

        assert_eq!(assessment.evidence_strength, 10);
        assert_eq!(assessment.predicted_ai_rating, SkillLevel::NotFamiliar);
        assert_eq!(assessment.confidence, 60);
        assert_eq!(assessment.gaps.len(), 5);
        assert_eq!(assessment.gaps[0], "Only 0 project(s) demonstrating salesforce");
        assert_eq!(assessment.recommendations.len(), 6);
        assert_eq!(
            assessment.recommendations[0],
            "Priority: Build stronger evidence base for salesforce"
        );
        assert_eq!(
            assessment.recommendations[1],
            "Prepare 2-3 specific project examples using salesforce"
        );
    }

    #[test]
    fn test_analyze_orders_weakest_evidence_first() {
        let profile = "Architected the AWS platform, led migration in 2024, deployed 30% \
                       faster builds, mentored the team\nReact came up once";
        let assessments = analyze_profile_skill_depth(profile);

        assert_eq!(assessments.len(), 2);
        assert_eq!(assessments[0].skill_name, "react");
        assert_eq!(assessments[1].skill_name, "aws");
        assert!(assessments[0].evidence_strength < assessments[1].evidence_strength);
    }

    #[test]
    fn test_predict_overall_score_counts_passable_skills() {
        let contexts = strs(&[
            "Led the React replatform in 2024, deployed to 40% more users",
            "Architected the React design system and mentored three engineers",
        ]);
        let assessments = vec![calculate_skill_depth("react", &contexts)];

        let prediction = predict_overall_ai_score(&assessments, &strs(&["React", "gtm"]));
        assert_eq!(prediction.total, 2);
        assert!((prediction.pass_likelihood - 50.0).abs() < EPS);
        assert_eq!(prediction.per_skill["React"].score, 2);
        assert_eq!(prediction.per_skill["gtm"].rating, SkillLevel::NotFamiliar);
    }

    #[test]
    fn test_predict_overall_score_empty_requirements() {
        let prediction = predict_overall_ai_score(&[], &[]);
        assert_eq!(prediction.total, 0);
        assert_eq!(prediction.pass_likelihood, 0.0);
        assert!(prediction.per_skill.is_empty());
    }

    #[test]
    fn test_score_gap_directions() {
        let neutral = calculate_score_gap(80.0, 7.2, 100.0, 9.0);
        assert_eq!(neutral.direction, GapDirection::Neutral);
        assert!(neutral.magnitude.abs() < EPS);

        let benefits = calculate_score_gap(40.0, 6.3, 100.0, 9.0);
        assert_eq!(benefits.direction, GapDirection::BenefitsFromAi);
        assert!((benefits.magnitude - 30.0).abs() < EPS);

        let harmed = calculate_score_gap(90.0, 3.6, 100.0, 9.0);
        assert_eq!(harmed.direction, GapDirection::HarmedByAi);

        // a ten-point difference is still neutral
        let boundary = calculate_score_gap(40.0, 4.5, 100.0, 9.0);
        assert_eq!(boundary.direction, GapDirection::Neutral);
    }

    #[test]
    fn test_score_gap_guards_zero_maxima() {
        let gap = calculate_score_gap(50.0, 5.0, 0.0, 0.0);
        assert_eq!(gap.resume_percentile, 0.0);
        assert_eq!(gap.ai_percentile, 0.0);
        assert_eq!(gap.direction, GapDirection::Neutral);
    }
}
