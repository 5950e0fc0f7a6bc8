//! Scoring of interview answers against the ideal-response bank.
//!
//! A submission is compared with the closest exemplar on five axes: word
//! overlap, vocabulary signals, structural key elements, red flags, and depth
//! indicators. The weighted blend is the overall score. Without an exemplar
//! for the skill, only a basic depth analysis runs and the score pins to 50.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::intelligence::exemplars::{IdealResponse, IDEAL_RESPONSES};

static OVERLAP_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{3,}\b").expect("valid regex"));
static DENSITY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{4,}\b").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static EXAMPLE_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"example|specifically|instance").expect("valid regex"));
static STRUCTURE_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"first|then|finally").expect("valid regex"));

/// Detectors for the structural elements exemplars name. Elements without a
/// detector fall back to literal containment of the element text.
static ELEMENT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("specific time duration", r"\d+\s*(year|month|week)s?"),
        (
            "named project with context",
            r"project|built|created|developed|implemented",
        ),
        ("team leadership", r"led|managed|mentored|coordinated|team of \d+"),
        (
            "architectural decisions with rationale",
            r"because|chose|decided|architecture|design",
        ),
        (
            "quantified impact",
            r"\d+%|\$[\d,]+|increased|decreased|reduced|improved.*by",
        ),
        (
            "teaching/mentoring experience",
            r"taught|mentored|trained|workshop|coaching",
        ),
        (
            "systematic approach",
            r"first|then|finally|approach|methodology|process",
        ),
        (
            "specific tools mentioned",
            r"devtools|profiler|aws|react|salesforce|jira",
        ),
        ("concrete example", r"for example|specifically|instance|case|recently"),
        ("trade-off awareness", r"trade-?off|however|although|cost|consideration"),
        (
            "clear problem statement",
            r"challenge|problem|issue|pain point|needed to",
        ),
        (
            "technical implementation details",
            r"implemented|built|configured|integrated|api|database",
        ),
        (
            "innovation/creative solution",
            r"innovative|solution|approach|solved|resolved",
        ),
        ("quantified results", r"result|outcome|impact.*\d+|achieved"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid regex")))
    .collect()
});

/// "no ..." flags fire on the absence of the listed cues, the rest on their
/// presence. Flags without a rule never fire.
enum FlagRule {
    Matches(Regex),
    Lacks(Regex),
}

static RED_FLAG_RULES: LazyLock<Vec<(&'static str, FlagRule)>> = LazyLock::new(|| {
    let matches = |p: &str| FlagRule::Matches(Regex::new(p).expect("valid regex"));
    let lacks = |p: &str| FlagRule::Lacks(Regex::new(p).expect("valid regex"));
    vec![
        ("vague timeframes", matches("some time|a while|recently|in the past")),
        (
            "no specific projects",
            lacks("project|built|created|developed|implemented"),
        ),
        ("can't explain decisions", matches("just|simply|obviously|of course")),
        ("no metrics", lacks(r"\d+")),
        (
            "only mentions point-and-click",
            matches("drag.?and.?drop|no.?code|just click"),
        ),
        ("would just escalate", matches("escalate|manager|ask someone")),
        (
            "no framework",
            lacks("first|then|approach|methodology|process"),
        ),
    ]
});

/// Detectors for depth indicators. Indicators without one contribute nothing.
static DEPTH_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        (
            "explains why decisions were made",
            r"because|reason|rationale|chose.*because",
        ),
        (
            "mentions alternatives considered",
            r"alternative|instead of|rather than|compared to",
        ),
        ("provides metrics", r"\d+%|\d+ (user|customer|team|project)"),
        (
            "shows progression over time",
            r"started|evolved|grew|progression|over \d+",
        ),
        (
            "shows debugging methodology",
            r"debug|investigate|identified|root cause",
        ),
        ("mentions specific tools", r"devtools|profiler|postman|datadog|splunk"),
        ("provides real example", r"example|specifically|instance|recently|case"),
        ("discusses trade-offs", r"trade-?off|however|although|consideration|cost"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid regex")))
    .collect()
});

// ────────────────────────────────────────────────────────────────────────────
// Score shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SemanticSimilarity {
    pub score: f64,
    pub closest_ideal_response: Option<&'static IdealResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularyAnalysis {
    pub score: f64,
    pub found: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyElementsAnalysis {
    pub score: f64,
    pub present: Vec<&'static str>,
    pub absent: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedFlagAnalysis {
    /// Higher is worse.
    pub score: f64,
    pub detected: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonToIdeal {
    pub your_length: usize,
    pub ideal_length: usize,
    pub your_vocab_density: f64,
    pub ideal_vocab_density: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseScore {
    pub overall_score: f64,
    pub semantic_similarity: SemanticSimilarity,
    pub vocabulary_analysis: VocabularyAnalysis,
    pub key_elements_analysis: KeyElementsAnalysis,
    pub red_flag_analysis: RedFlagAnalysis,
    pub depth_score: f64,
    pub recommendations: Vec<String>,
    pub comparison_to_ideal: ComparisonToIdeal,
}

/// One answer in a batch scoring request.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSubmission {
    pub skill: String,
    pub question_type: String,
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readiness {
    Ready,
    NeedsWork,
    NotReady,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseSetScore {
    pub average_score: f64,
    pub scores: Vec<ResponseScore>,
    pub strength_areas: Vec<&'static str>,
    pub improvement_areas: Vec<&'static str>,
    pub overall_readiness: Readiness,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores one answer against the closest exemplar for (skill, question type).
///
/// The exemplar lookup matches the skill case-insensitively and the question
/// type exactly, falling back to any exemplar for the skill.
pub fn score_response(response: &str, skill: &str, question_type: &str) -> ResponseScore {
    let ideal = match find_ideal(skill, question_type) {
        Some(ideal) => ideal,
        None => return fallback_score(response),
    };

    let lower = response.to_lowercase();
    let semantic_score = word_overlap(response, ideal.response) * 100.0;
    let vocabulary_analysis = check_vocabulary(&lower, ideal.vocabulary_signals);
    let key_elements_analysis = check_key_elements(&lower, ideal.key_elements);
    let red_flag_analysis = check_red_flags(&lower, ideal.red_flags);
    let depth = depth_score(&lower, ideal);

    let overall_score = semantic_score * 0.2
        + vocabulary_analysis.score * 0.25
        + key_elements_analysis.score * 0.3
        + (100.0 - red_flag_analysis.score) * 0.1
        + depth * 0.15;

    let recommendations = build_recommendations(
        response,
        &lower,
        ideal,
        &vocabulary_analysis,
        &key_elements_analysis,
        &red_flag_analysis,
    );
    let comparison_to_ideal = compare_to_ideal(response, ideal);

    ResponseScore {
        overall_score,
        semantic_similarity: SemanticSimilarity {
            score: semantic_score,
            closest_ideal_response: Some(ideal),
        },
        vocabulary_analysis,
        key_elements_analysis,
        red_flag_analysis,
        depth_score: depth,
        recommendations,
        comparison_to_ideal,
    }
}

/// Scores a batch and aggregates into areas of strength, areas needing work,
/// and an overall readiness verdict.
pub fn score_response_set(submissions: &[ResponseSubmission]) -> ResponseSetScore {
    let scores: Vec<ResponseScore> = submissions
        .iter()
        .map(|s| score_response(&s.response, &s.skill, &s.question_type))
        .collect();

    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|s| s.overall_score).sum::<f64>() / scores.len() as f64
    };

    let mut strength_areas: Vec<&'static str> = Vec::new();
    let mut improvement_areas: Vec<&'static str> = Vec::new();
    for score in &scores {
        if let Some(ideal) = score.semantic_similarity.closest_ideal_response {
            if score.overall_score >= 70.0 && !strength_areas.contains(&ideal.skill) {
                strength_areas.push(ideal.skill);
            }
            if score.overall_score < 50.0 && !improvement_areas.contains(&ideal.skill) {
                improvement_areas.push(ideal.skill);
            }
        }
    }

    let overall_readiness = if average_score >= 70.0 && improvement_areas.is_empty() {
        Readiness::Ready
    } else if average_score >= 50.0 {
        Readiness::NeedsWork
    } else {
        Readiness::NotReady
    };

    ResponseSetScore {
        average_score,
        scores,
        strength_areas,
        improvement_areas,
        overall_readiness,
    }
}

fn find_ideal(skill: &str, question_type: &str) -> Option<&'static IdealResponse> {
    IDEAL_RESPONSES
        .iter()
        .find(|ir| ir.skill.eq_ignore_ascii_case(skill) && ir.question_type == question_type)
        .or_else(|| {
            IDEAL_RESPONSES
                .iter()
                .find(|ir| ir.skill.eq_ignore_ascii_case(skill))
        })
}

fn fallback_score(response: &str) -> ResponseScore {
    ResponseScore {
        overall_score: 50.0,
        semantic_similarity: SemanticSimilarity {
            score: 0.0,
            closest_ideal_response: None,
        },
        vocabulary_analysis: VocabularyAnalysis {
            score: 0.0,
            found: Vec::new(),
            missing: Vec::new(),
        },
        key_elements_analysis: KeyElementsAnalysis {
            score: 0.0,
            present: Vec::new(),
            absent: Vec::new(),
        },
        red_flag_analysis: RedFlagAnalysis {
            score: 0.0,
            detected: Vec::new(),
        },
        depth_score: basic_depth(response),
        recommendations: vec!["No ideal response available for comparison".to_string()],
        comparison_to_ideal: ComparisonToIdeal {
            your_length: response.chars().count(),
            ideal_length: 0,
            your_vocab_density: 0.0,
            ideal_vocab_density: 0.0,
        },
    }
}

/// Jaccard overlap of 3+ letter word sets, 0.0 when both texts are empty.
fn word_overlap(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let words_a: HashSet<&str> = OVERLAP_TOKEN.find_iter(&a_lower).map(|m| m.as_str()).collect();
    let words_b: HashSet<&str> = OVERLAP_TOKEN.find_iter(&b_lower).map(|m| m.as_str()).collect();

    let overlap = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    if union > 0 {
        overlap as f64 / union as f64
    } else {
        0.0
    }
}

fn check_vocabulary(lower_response: &str, signals: &'static [&'static str]) -> VocabularyAnalysis {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for signal in signals {
        if lower_response.contains(&signal.to_lowercase()) {
            found.push(*signal);
        } else {
            missing.push(*signal);
        }
    }

    VocabularyAnalysis {
        score: ratio_score(found.len(), signals.len()),
        found,
        missing,
    }
}

fn check_key_elements(
    lower_response: &str,
    elements: &'static [&'static str],
) -> KeyElementsAnalysis {
    let mut present = Vec::new();
    let mut absent = Vec::new();
    for element in elements {
        let key = element.to_lowercase();
        let detector = ELEMENT_PATTERNS.iter().find(|(name, _)| *name == key);
        let hit = match detector {
            Some((_, pattern)) => pattern.is_match(lower_response),
            None => lower_response.contains(&key),
        };
        if hit {
            present.push(*element);
        } else {
            absent.push(*element);
        }
    }

    KeyElementsAnalysis {
        score: ratio_score(present.len(), elements.len()),
        present,
        absent,
    }
}

fn check_red_flags(lower_response: &str, red_flags: &'static [&'static str]) -> RedFlagAnalysis {
    let mut detected = Vec::new();
    for flag in red_flags {
        let key = flag.to_lowercase();
        let fired = RED_FLAG_RULES
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, rule)| match rule {
                FlagRule::Matches(re) => re.is_match(lower_response),
                FlagRule::Lacks(re) => !re.is_match(lower_response),
            })
            .unwrap_or(false);
        if fired {
            detected.push(*flag);
        }
    }

    RedFlagAnalysis {
        score: ratio_score(detected.len(), red_flags.len()),
        detected,
    }
}

fn depth_score(lower_response: &str, ideal: &IdealResponse) -> f64 {
    let mut score: f64 = 0.0;
    for indicator in ideal.depth_indicators {
        let key = indicator.to_lowercase();
        let hit = DEPTH_PATTERNS
            .iter()
            .any(|(name, re)| *name == key && re.is_match(lower_response));
        if hit {
            score += 25.0;
        }
    }
    score.min(100.0)
}

/// Depth analysis used when no exemplar exists: length plus three cue bonuses.
fn basic_depth(response: &str) -> f64 {
    let words = response.split_whitespace().count() as f64;
    let lower = response.to_lowercase();

    let mut score = (words / 5.0).min(40.0);
    if DIGITS.is_match(response) {
        score += 20.0;
    }
    if EXAMPLE_CUE.is_match(&lower) {
        score += 20.0;
    }
    if STRUCTURE_CUE.is_match(&lower) {
        score += 20.0;
    }
    score.min(100.0)
}

fn build_recommendations(
    response: &str,
    lower_response: &str,
    ideal: &IdealResponse,
    vocab: &VocabularyAnalysis,
    elements: &KeyElementsAnalysis,
    red_flags: &RedFlagAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let word_count = response.split_whitespace().count();
    let ideal_word_count = ideal.response.split_whitespace().count() as i64;
    if (word_count as f64) < ideal_word_count as f64 * 0.5 {
        recommendations.push(format!(
            "Your response is {word_count} words. Aim for {} to {} words for this type of question.",
            ideal_word_count - 50,
            ideal_word_count + 50
        ));
    }

    if !vocab.missing.is_empty() && vocab.missing.len() <= 5 {
        let terms = vocab.missing.iter().take(3).copied().collect::<Vec<_>>().join(", ");
        recommendations.push(format!("Include these technical terms: {terms}"));
    }

    for element in elements.absent.iter().take(2) {
        recommendations.push(format!("Add: {element}"));
    }

    for flag in &red_flags.detected {
        recommendations.push(format!("Avoid: {flag}"));
    }

    if !STRUCTURE_CUE.is_match(lower_response) {
        recommendations.push(
            "Structure your response with clear progression (First... Then... Finally...)"
                .to_string(),
        );
    }
    if !DIGITS.is_match(response) {
        recommendations
            .push("Add quantified metrics or specific numbers to strengthen your answer".to_string());
    }
    if !EXAMPLE_CUE.is_match(lower_response) {
        recommendations.push("Include a specific example to demonstrate depth".to_string());
    }

    recommendations.truncate(5);
    recommendations
}

fn compare_to_ideal(response: &str, ideal: &IdealResponse) -> ComparisonToIdeal {
    let your_words: Vec<&str> = DENSITY_TOKEN.find_iter(response).map(|m| m.as_str()).collect();
    let ideal_words: Vec<&str> = DENSITY_TOKEN
        .find_iter(ideal.response)
        .map(|m| m.as_str())
        .collect();

    let signals: Vec<String> = ideal
        .vocabulary_signals
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let tech_count = |words: &[&str]| {
        words
            .iter()
            .filter(|w| {
                let wl = w.to_lowercase();
                signals.iter().any(|s| wl.contains(s.as_str()))
            })
            .count()
    };

    ComparisonToIdeal {
        your_length: response.chars().count(),
        ideal_length: ideal.response.chars().count(),
        your_vocab_density: ratio_score(tech_count(&your_words), your_words.len()),
        ideal_vocab_density: ratio_score(tech_count(&ideal_words), ideal_words.len()),
    }
}

/// numerator/denominator × 100, 0.0 for an empty denominator.
fn ratio_score(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
