//! Shared vocabulary for the interview-prep domain: rating levels, question
//! shapes, and the published conversational-quality benchmarks.

use serde::{Deserialize, Serialize};

/// Benchmark conversational score for AI-led interviews (1-10 scale).
pub const AI_INTERVIEW_BENCHMARK: f64 = 7.8;

/// Benchmark conversational score for human-led interviews (1-10 scale).
pub const HUMAN_INTERVIEW_BENCHMARK: f64 = 5.41;

/// Rating a skill receives from an AI interviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillLevel {
    NotFamiliar,
    Junior,
    MidLevel,
    Senior,
}

impl SkillLevel {
    /// Numeric value on the 0-3 recruiter scale.
    pub fn score(self) -> u32 {
        match self {
            SkillLevel::NotFamiliar => 0,
            SkillLevel::Junior => 1,
            SkillLevel::MidLevel => 2,
            SkillLevel::Senior => 3,
        }
    }
}

/// Difficulty band a question is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ExperienceProbing,
    PracticalApplication,
    ProblemSolving,
    FollowUp,
}

/// A single interview question, either served from a bank or generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub skill: String,
    pub difficulty: Difficulty,
    /// What a good answer should contain. Empty for generated questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_elements: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
