//! Keyword extraction and alignment scoring.
//!
//! Keywords are single tokens plus capitalized multi-word phrases (tool and
//! concept names), lowercased and deduplicated in first-occurrence order.
//! Alignment is the fraction of job keywords found verbatim in the profile.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Filler vocabulary excluded from keyword comparison, including job-posting
/// boilerplate like "experience" and "opportunity".
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can", "need",
        "we", "you", "your", "our", "their", "this", "that", "these", "those", "it", "its", "they",
        "them", "he", "she", "his", "her", "who", "which", "what", "when", "where", "why", "how",
        "all", "each", "every", "both", "few", "more", "most", "other", "some", "such", "no",
        "not", "only", "same", "so", "than", "too", "very", "just", "also", "now", "about", "into",
        "through", "during", "before", "after", "above", "below", "between", "under", "again",
        "further", "then", "once", "here", "there", "any", "etc", "including", "ability",
        "experience", "strong", "excellent", "work", "working", "team", "teams", "role",
        "position", "opportunity",
    ]
    .into_iter()
    .collect()
});

/// Tokens may carry tech-name punctuation (c#, node.js, ci-cd).
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z0-9+#.-]*\b").expect("valid regex"));

/// Adjacent Capitalized Words, e.g. "Partner Operations".
static CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").expect("valid regex"));

#[derive(Debug)]
pub struct KeywordMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Extracts meaningful keywords from free text: lowercased tokens longer than
/// two characters minus stop words, then capitalized phrases from the
/// original casing.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for m in WORD.find_iter(&lower) {
        let word = m.as_str();
        if word.len() > 2 && !STOP_WORDS.contains(word) && seen.insert(word.to_string()) {
            keywords.push(word.to_string());
        }
    }

    for m in CAPITALIZED_PHRASE.find_iter(text) {
        let phrase = m.as_str().to_lowercase();
        if seen.insert(phrase.clone()) {
            keywords.push(phrase);
        }
    }

    keywords
}

/// Scores keyword alignment as the percentage of job keywords present in the
/// profile. Matched/missing lists preserve job-text order.
pub fn calculate_keyword_match(profile_text: &str, job_text: &str) -> KeywordMatch {
    let job_keywords = extract_keywords(job_text);
    let profile_keywords: HashSet<String> = extract_keywords(profile_text).into_iter().collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in job_keywords {
        if profile_keywords.contains(&keyword) {
            matched.push(keyword);
        } else {
            missing.push(keyword);
        }
    }

    let total = matched.len() + missing.len();
    if total == 0 {
        return KeywordMatch {
            score: 0.0,
            matched,
            missing,
        };
    }

    KeywordMatch {
        score: matched.len() as f64 / total as f64 * 100.0,
        matched,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
