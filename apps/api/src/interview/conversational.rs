//! Conversational-quality scoring for interview answers.
//!
//! Rates a set of spoken-style responses on five weighted dimensions
//! (dialogue flow, response building, acknowledgment, clarity, engagement),
//! each on a 1-10 scale, and compares the weighted overall against the
//! AI-interview and human-interview benchmarks.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::interview::types::{AI_INTERVIEW_BENCHMARK, HUMAN_INTERVIEW_BENCHMARK};

// ────────────────────────────────────────────────────────────────────────────
// Pattern tables
// ────────────────────────────────────────────────────────────────────────────

/// Matched as exact word sequences, so "like," with punctuation attached does
/// not count.
const FILLER_WORDS: [&str; 18] = [
    "um",
    "uh",
    "like",
    "basically",
    "actually",
    "literally",
    "honestly",
    "you know",
    "i mean",
    "kind of",
    "sort of",
    "right",
    "so yeah",
    "obviously",
    "clearly",
    "essentially",
    "practically",
    "anyway",
];

/// Phrases that make an answer sound rehearsed rather than conversational.
const ROBOTIC_PATTERNS: [&str; 6] = [
    "as i mentioned before",
    "to answer your question",
    "that is a great question",
    "let me tell you about",
    "in conclusion",
    "firstly secondly thirdly",
];

/// Phrases that tie an answer back to earlier parts of the conversation.
const REFERENCE_PHRASES: [&str; 7] = [
    "as i mentioned",
    "building on that",
    "similar to",
    "related to that",
    "going back to",
    "to add to what i said",
    "another example",
];

/// Openers that acknowledge the question, checked against the first 50
/// characters of each response.
const ACKNOWLEDGMENT_STARTS: [&str; 8] = [
    "yes",
    "absolutely",
    "definitely",
    "great question",
    "sure",
    "that's a good point",
    "i understand",
    "right",
];

static TRANSITION_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(so|well|yes|absolutely|definitely|i think|in my experience)")
        .expect("valid regex")
});

static ABRUPT_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(no|actually|but)").expect("valid regex"));

static STRUCTURE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)first|second|then|finally|in summary|next").expect("valid regex")
});

static CHAT_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(idk|tbh|fwiw|imo|lol)").expect("valid regex"));

static ENTHUSIASM_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)excited|passionate|love|enjoy|interesting|fascinating").expect("valid regex")
});

static EXAMPLE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)for example|specifically|in one case|i remember when").expect("valid regex")
});

/// Relative weight of each dimension in the overall conversational score.
pub struct ConversationalWeights {
    pub dialogue_flow: f64,
    pub response_building: f64,
    pub acknowledgment: f64,
    pub clarity: f64,
    pub engagement: f64,
}

pub const CONVERSATIONAL_WEIGHTS: ConversationalWeights = ConversationalWeights {
    dialogue_flow: 0.25,
    response_building: 0.30,
    acknowledgment: 0.20,
    clarity: 0.15,
    engagement: 0.10,
};

// ────────────────────────────────────────────────────────────────────────────
// Score types
// ────────────────────────────────────────────────────────────────────────────

/// Full conversational assessment for a set of responses.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationalScore {
    pub dialogue_flow: f64,
    pub response_building: f64,
    pub acknowledgment: f64,
    pub clarity: f64,
    pub engagement: f64,
    pub overall_conversational: f64,
    pub issues: ConversationIssues,
    pub improvements: Vec<String>,
    pub comparison: BenchmarkComparison,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationIssues {
    pub filler_words: Vec<FillerWordIssue>,
    pub robotic_patterns: Vec<String>,
    pub disconnected_answers: Vec<String>,
    pub overly_brief_responses: Vec<String>,
}

/// One filler word with every token position it occupied.
#[derive(Debug, Clone, Serialize)]
pub struct FillerWordIssue {
    pub word: String,
    pub count: usize,
    pub positions: Vec<usize>,
}

/// Signed distance from the published benchmarks.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkComparison {
    pub vs_ai_benchmark: f64,
    pub vs_human_benchmark: f64,
}

/// Lightweight single-response score for mid-session feedback.
#[derive(Debug, Clone, Serialize)]
pub struct QuickScore {
    pub score: f64,
    pub fillers: usize,
    pub word_count: usize,
    pub issues: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Detection helpers
// ────────────────────────────────────────────────────────────────────────────

/// Finds filler words as exact whitespace-token sequences, reporting the
/// token index of each occurrence. Output follows the `FILLER_WORDS` order.
fn detect_filler_words(text: &str) -> Vec<FillerWordIssue> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let mut issues = Vec::new();
    for filler in FILLER_WORDS {
        let parts: Vec<&str> = filler.split(' ').collect();
        if words.len() < parts.len() {
            continue;
        }
        let mut positions = Vec::new();
        for i in 0..=(words.len() - parts.len()) {
            if words[i..i + parts.len()] == parts[..] {
                positions.push(i);
            }
        }
        if !positions.is_empty() {
            issues.push(FillerWordIssue {
                word: filler.to_string(),
                count: positions.len(),
                positions,
            });
        }
    }
    issues
}

fn detect_robotic_patterns(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    ROBOTIC_PATTERNS
        .into_iter()
        .filter(|pattern| lower.contains(pattern))
        .map(str::to_string)
        .collect()
}

/// Two answers are connected when the current one reuses at least one word
/// longer than four characters from the previous one.
fn shares_vocabulary(previous: &str, current: &str) -> bool {
    let prev_lower = previous.to_lowercase();
    let prev_words: HashSet<&str> = prev_lower.split_whitespace().collect();
    current
        .to_lowercase()
        .split_whitespace()
        .any(|word| word.len() > 4 && prev_words.contains(word))
}

// ────────────────────────────────────────────────────────────────────────────
// Dimension scoring
// ────────────────────────────────────────────────────────────────────────────

fn score_dialogue_flow(responses: &[String]) -> f64 {
    if responses.is_empty() {
        return 5.0;
    }
    let mut score = 7.0;
    for response in responses {
        let words = response.split_whitespace().count();
        if words < 20 {
            score -= 0.5;
        }
        if words > 300 {
            score -= 0.3;
        }
        if TRANSITION_OPENER.is_match(response) {
            score += 0.2;
        }
        score -= detect_robotic_patterns(response).len() as f64 * 0.5;
    }
    score.clamp(1.0, 10.0)
}

fn score_response_building(responses: &[String]) -> f64 {
    if responses.len() < 2 {
        return 7.0;
    }
    let mut score: f64 = 7.0;
    for i in 1..responses.len() {
        let lower = responses[i].to_lowercase();
        if REFERENCE_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
            score += 0.3;
        }
        if !shares_vocabulary(&responses[i - 1], &responses[i]) {
            score -= 0.3;
        }
    }
    score.clamp(1.0, 10.0)
}

fn score_acknowledgment(responses: &[String]) -> f64 {
    let mut score: f64 = 7.0;
    for response in responses {
        let opening: String = response.to_lowercase().chars().take(50).collect();
        if ACKNOWLEDGMENT_STARTS.iter().any(|ack| opening.contains(ack)) {
            score += 0.2;
        }
        if ABRUPT_OPENER.is_match(response) {
            score -= 0.3;
        }
    }
    score.clamp(1.0, 10.0)
}

fn score_clarity(responses: &[String]) -> f64 {
    let mut score: f64 = 7.0;
    for response in responses {
        if STRUCTURE_MARKERS.is_match(response) {
            score += 0.3;
        }
        let words = response.split_whitespace().count();
        // split always yields at least one piece, so sentences >= 1
        let sentences = response.split(['.', '!', '?']).count();
        if words as f64 / sentences as f64 > 40.0 {
            score -= 0.5;
        }
        if CHAT_SHORTHAND.is_match(response) {
            score -= 0.5;
        }
    }
    score.clamp(1.0, 10.0)
}

fn score_engagement(responses: &[String]) -> f64 {
    let mut score: f64 = 7.0;
    for response in responses {
        if ENTHUSIASM_MARKERS.is_match(response) {
            score += 0.2;
        }
        if EXAMPLE_MARKERS.is_match(response) {
            score += 0.3;
        }
        if response.split_whitespace().count() < 15 {
            score -= 0.3;
        }
    }
    score.clamp(1.0, 10.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Conversation scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a full set of responses: five weighted dimensions, collected
/// issues, coaching improvements, and the benchmark comparison.
pub fn score_conversation(responses: &[String]) -> ConversationalScore {
    let dialogue_flow = score_dialogue_flow(responses);
    let response_building = score_response_building(responses);
    let acknowledgment = score_acknowledgment(responses);
    let clarity = score_clarity(responses);
    let engagement = score_engagement(responses);

    let overall_conversational = dialogue_flow * CONVERSATIONAL_WEIGHTS.dialogue_flow
        + response_building * CONVERSATIONAL_WEIGHTS.response_building
        + acknowledgment * CONVERSATIONAL_WEIGHTS.acknowledgment
        + clarity * CONVERSATIONAL_WEIGHTS.clarity
        + engagement * CONVERSATIONAL_WEIGHTS.engagement;

    let mut issues = ConversationIssues::default();
    for (idx, response) in responses.iter().enumerate() {
        issues.filler_words.extend(detect_filler_words(response));
        issues
            .robotic_patterns
            .extend(detect_robotic_patterns(response));
        if idx >= 1 && !shares_vocabulary(&responses[idx - 1], response) {
            issues.disconnected_answers.push(format!(
                "Response {}: shares no vocabulary with the previous answer",
                idx + 1
            ));
        }
        let words = response.split_whitespace().count();
        if words < 20 {
            issues
                .overly_brief_responses
                .push(format!("Response {}: Only {} words", idx + 1, words));
        }
    }

    let mut result = ConversationalScore {
        dialogue_flow,
        response_building,
        acknowledgment,
        clarity,
        engagement,
        overall_conversational,
        issues,
        improvements: Vec::new(),
        comparison: BenchmarkComparison {
            vs_ai_benchmark: overall_conversational - AI_INTERVIEW_BENCHMARK,
            vs_human_benchmark: overall_conversational - HUMAN_INTERVIEW_BENCHMARK,
        },
    };
    result.improvements = build_improvements(&result);
    result
}

/// Coaching guidance ordered by severity, with the benchmark verdict first.
fn build_improvements(score: &ConversationalScore) -> Vec<String> {
    let mut improvements = Vec::new();

    let filler_count: usize = score
        .issues
        .filler_words
        .iter()
        .map(|issue| issue.count)
        .sum();
    if filler_count > 5 {
        improvements.push(format!(
            "Reduce filler words (detected {filler_count}). Try pausing briefly instead of saying \"um\" or \"like\"."
        ));
    }
    if !score.issues.robotic_patterns.is_empty() {
        improvements.push(
            "Your responses contain scripted-sounding phrases. Aim for more natural language."
                .to_string(),
        );
    }
    if score.dialogue_flow < 7.0 {
        improvements.push(
            "Work on conversational flow. Use natural transitions like \"In my experience...\" or \"Building on that...\""
                .to_string(),
        );
    }
    if score.response_building < 7.0 {
        improvements.push(
            "Try referencing previous points to build a coherent narrative. Say \"As I mentioned earlier...\" or \"Related to that...\""
                .to_string(),
        );
    }
    if score.acknowledgment < 7.0 {
        improvements.push(
            "Acknowledge the question before diving in. A brief \"Great question...\" or \"Yes, absolutely...\" helps."
                .to_string(),
        );
    }
    if score.clarity < 7.0 {
        improvements.push(
            "Structure your answers more clearly. Use markers like \"First... Second... Finally...\""
                .to_string(),
        );
    }
    if score.engagement < 7.0 {
        improvements.push(
            "Show more enthusiasm. Include phrases like \"What I found interesting was...\" or \"I was excited to discover...\""
                .to_string(),
        );
    }

    let overall = score.overall_conversational;
    if overall < AI_INTERVIEW_BENCHMARK {
        improvements.insert(
            0,
            format!(
                "Your conversational score ({overall:.1}) is below the AI interview benchmark ({AI_INTERVIEW_BENCHMARK}). Focus on the improvements below."
            ),
        );
    } else {
        improvements.insert(
            0,
            format!(
                "Great! Your conversational score ({overall:.1}) meets the AI interview benchmark ({AI_INTERVIEW_BENCHMARK})."
            ),
        );
    }
    improvements
}

// ────────────────────────────────────────────────────────────────────────────
// Quick scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores one response in isolation. Starts from a 7.0 baseline and deducts
/// for fillers, scripted phrases, and length problems.
pub fn score_quick_response(response: &str) -> QuickScore {
    let mut score = 7.0;
    let mut issues = Vec::new();

    let filler_count: usize = detect_filler_words(response)
        .iter()
        .map(|issue| issue.count)
        .sum();
    if filler_count > 0 {
        score -= 0.3 * filler_count as f64;
        issues.push(format!("{filler_count} filler word(s) detected"));
    }

    let robotic = detect_robotic_patterns(response);
    if !robotic.is_empty() {
        score -= 0.5 * robotic.len() as f64;
        issues.push("Scripted-sounding phrases detected".to_string());
    }

    let word_count = response.split_whitespace().count();
    if word_count < 20 {
        score -= 1.0;
        issues.push("Response too brief - aim for 50-150 words".to_string());
    } else if word_count > 250 {
        score -= 0.5;
        issues.push("Response quite long - consider being more concise".to_string());
    }

    QuickScore {
        score: score.clamp(1.0, 10.0),
        fillers: filler_count,
        word_count,
        issues,
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

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_detect_filler_words_reports_counts_and_positions() {
        let issues = detect_filler_words("um i mean it was um basically fine");
        assert_eq!(issues.len(), 3);
        // results follow the FILLER_WORDS table order
        assert_eq!(issues[0].word, "um");
        assert_eq!(issues[0].count, 2);
        assert_eq!(issues[0].positions, vec![0, 5]);
        assert_eq!(issues[1].word, "basically");
        assert_eq!(issues[1].positions, vec![6]);
        assert_eq!(issues[2].word, "i mean");
        assert_eq!(issues[2].positions, vec![1]);
    }

    #[test]
    fn test_filler_detection_requires_exact_tokens() {
        // punctuation attached to the token defeats the match
        assert!(detect_filler_words("like, totally").is_empty());
        assert!(detect_filler_words("").is_empty());
    }

    #[test]
    fn test_detect_robotic_patterns_is_case_insensitive() {
        let found = detect_robotic_patterns("Well, To Answer Your Question, we scaled it.");
        assert_eq!(found, vec!["to answer your question".to_string()]);
    }

    #[test]
    fn test_dialogue_flow_neutral_when_empty() {
        assert_eq!(score_dialogue_flow(&[]), 5.0);
    }

    #[test]
    fn test_dialogue_flow_brief_response_with_transition() {
        // -0.5 for under 20 words, +0.2 for the "So" opener
        assert_close(score_dialogue_flow(&strs(&["So yes"])), 6.7);
    }

    #[test]
    fn test_response_building_rewards_references() {
        let connected = strs(&[
            "We improved the pipeline throughput",
            "The pipeline throughput gains were substantial",
        ]);
        assert_close(score_response_building(&connected), 7.0);

        let referencing = strs(&[
            "We built the deployment pipeline",
            "Building on that, the pipeline scaled well",
        ]);
        assert_close(score_response_building(&referencing), 7.3);

        let disconnected = strs(&["Alpha beta", "Gamma delta"]);
        assert_close(score_response_building(&disconnected), 6.7);
    }

    #[test]
    fn test_acknowledgment_scoring() {
        assert_close(
            score_acknowledgment(&strs(&["Great question, let me think"])),
            7.2,
        );
        assert_close(score_acknowledgment(&strs(&["But we failed"])), 6.7);
        // substring matching: "Brighton" contains "right"
        assert_close(
            score_acknowledgment(&strs(&["Brighton is where the team gathered"])),
            7.2,
        );
    }

    #[test]
    fn test_clarity_scoring() {
        assert_close(score_clarity(&strs(&["First we planned. Then we shipped."])), 7.3);
        assert_close(score_clarity(&strs(&["idk tbh"])), 6.5);

        let run_on = vec!["word"; 45].join(" ");
        assert_close(score_clarity(&[run_on]), 6.5);
    }

    #[test]
    fn test_engagement_scoring() {
        // +0.2 enthusiasm, +0.3 example, -0.3 under 15 words
        let response = strs(&["I was excited to try it, for example the caching layer"]);
        assert_close(score_engagement(&response), 7.2);
    }

    #[test]
    fn test_score_conversation_collects_issues() {
        let responses = strs(&["Cat dog bird", "Elephant giraffe zebra"]);
        let result = score_conversation(&responses);

        assert_eq!(
            result.issues.overly_brief_responses,
            vec![
                "Response 1: Only 3 words".to_string(),
                "Response 2: Only 3 words".to_string(),
            ]
        );
        assert_eq!(
            result.issues.disconnected_answers,
            vec!["Response 2: shares no vocabulary with the previous answer".to_string()]
        );
        assert!(result.issues.filler_words.is_empty());

        let expected_overall = result.dialogue_flow * CONVERSATIONAL_WEIGHTS.dialogue_flow
            + result.response_building * CONVERSATIONAL_WEIGHTS.response_building
            + result.acknowledgment * CONVERSATIONAL_WEIGHTS.acknowledgment
            + result.clarity * CONVERSATIONAL_WEIGHTS.clarity
            + result.engagement * CONVERSATIONAL_WEIGHTS.engagement;
        assert_close(result.overall_conversational, expected_overall);
        assert_close(
            result.comparison.vs_ai_benchmark,
            result.overall_conversational - AI_INTERVIEW_BENCHMARK,
        );
        assert_close(
            result.comparison.vs_human_benchmark,
            result.overall_conversational - HUMAN_INTERVIEW_BENCHMARK,
        );
    }

    #[test]
    fn test_score_conversation_strong_answers_meet_benchmark() {
        let answer = "Yes, absolutely. Building on that, I was excited to improve the \
                      pipeline further. First we measured the baseline carefully, then we \
                      shipped improvements, for example the caching layer.";
        let responses = strs(&[answer, answer, answer, answer, answer]);
        let result = score_conversation(&responses);

        assert_close(result.dialogue_flow, 8.0);
        assert_close(result.response_building, 8.2);
        assert_close(result.acknowledgment, 8.0);
        assert_close(result.clarity, 8.5);
        assert_close(result.engagement, 9.5);
        assert!(result.overall_conversational >= AI_INTERVIEW_BENCHMARK);
        assert!(result.improvements[0].starts_with("Great! Your conversational score ("));
        assert_eq!(result.improvements.len(), 1);
        assert!(result.issues.disconnected_answers.is_empty());
    }

    #[test]
    fn test_quick_score_brief_response() {
        let result = score_quick_response("We shipped it");
        assert_eq!(result.score, 6.0);
        assert_eq!(result.fillers, 0);
        assert_eq!(result.word_count, 3);
        assert_eq!(
            result.issues,
            vec!["Response too brief - aim for 50-150 words".to_string()]
        );
    }

    #[test]
    fn test_quick_score_stacks_deductions() {
        let result = score_quick_response("Um to answer your question um");
        // 7.0 - 0.6 (fillers) - 0.5 (scripted) - 1.0 (brief)
        assert_close(result.score, 4.9);
        assert_eq!(result.fillers, 2);
        assert_eq!(result.word_count, 6);
        assert_eq!(
            result.issues,
            vec![
                "2 filler word(s) detected".to_string(),
                "Scripted-sounding phrases detected".to_string(),
                "Response too brief - aim for 50-150 words".to_string(),
            ]
        );
    }

    #[test]
    fn test_quick_score_flags_long_responses() {
        let long = vec!["word"; 251].join(" ");
        let result = score_quick_response(&long);
        assert_close(result.score, 6.5);
        assert_eq!(
            result.issues,
            vec!["Response quite long - consider being more concise".to_string()]
        );
    }

    #[test]
    fn test_quick_score_clamps_at_floor() {
        let result = score_quick_response(&"um ".repeat(40));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.fillers, 40);
    }
}
