//! Axum route handlers for the interview-prep API.
//!
//! Everything here is a pure text heuristic over the request body; none of
//! these handlers touch application state.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::conversational::{
    score_conversation, score_quick_response, ConversationalScore, QuickScore,
};
use crate::interview::depth::{
    analyze_profile_skill_depth, calculate_score_gap, predict_overall_ai_score, OverallPrediction,
    ScoreGap, SkillDepthAssessment,
};
use crate::interview::questions::{
    available_skills, follow_up_question, interview_sequence, questions_for_skill,
    DEFAULT_QUESTIONS_PER_SKILL,
};
use crate::interview::types::{
    Difficulty, Question, SkillLevel, AI_INTERVIEW_BENCHMARK, HUMAN_INTERVIEW_BENCHMARK,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ConversationalRequest {
    pub responses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ConversationalResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub score: ConversationalScore,
    pub interpretation: Interpretation,
    pub benchmarks: Benchmarks,
}

#[derive(Debug, Serialize)]
pub struct Interpretation {
    pub meets_ai_benchmark: bool,
    pub beats_human_benchmark: bool,
    pub percentile_estimate: u32,
}

#[derive(Debug, Serialize)]
pub struct Benchmarks {
    pub ai_interview: f64,
    pub human_interview: f64,
}

#[derive(Debug, Deserialize)]
pub struct QuickScoreRequest {
    pub single_response: String,
}

#[derive(Debug, Serialize)]
pub struct QuickScoreResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub result: QuickScore,
}

#[derive(Debug, Deserialize)]
pub struct DepthAnalysisRequest {
    pub profile_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Resume screening score out of 100, if one is known.
    pub resume_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct DepthAnalysisResponse {
    pub success: bool,
    pub assessments: Vec<SkillDepthAssessment>,
    /// `null` unless required skills were given.
    pub overall_prediction: Option<OverallPrediction>,
    /// `null` unless both a resume score and required skills were given.
    pub score_gap: Option<ScoreGap>,
    pub summary: DepthSummary,
    pub priority_skills: Vec<PrioritySkill>,
}

#[derive(Debug, Serialize)]
pub struct DepthSummary {
    pub total_skills_found: usize,
    pub average_evidence_strength: f64,
    pub skills_with_gaps: usize,
    pub ready_for_ai: usize,
}

#[derive(Debug, Serialize)]
pub struct PrioritySkill {
    pub skill: String,
    pub evidence_strength: u32,
    pub predicted_rating: SkillLevel,
    pub top_recommendation: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillQuestionsRequest {
    pub skill: String,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Serialize)]
pub struct SkillQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct SequenceRequest {
    pub skills: Vec<String>,
    pub questions_per_skill: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SequenceResponse {
    pub success: bool,
    pub sequence: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct FollowUpRequest {
    pub previous_question: Option<Question>,
    #[serde(default)]
    pub response_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FollowUpResponse {
    pub success: bool,
    pub follow_up: Question,
}

#[derive(Debug, Serialize)]
pub struct AvailableSkillsResponse {
    pub skills: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Conversational scoring handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/conversational
///
/// Full conversational assessment of a set of responses, with benchmark
/// interpretation.
pub async fn handle_conversational(
    Json(request): Json<ConversationalRequest>,
) -> Result<Json<ConversationalResponse>, AppError> {
    if request.responses.is_empty() {
        return Err(AppError::Validation(
            "responses array is required".to_string(),
        ));
    }

    let score = score_conversation(&request.responses);
    let overall = score.overall_conversational;

    Ok(Json(ConversationalResponse {
        success: true,
        kind: "full",
        score,
        interpretation: Interpretation {
            meets_ai_benchmark: overall >= AI_INTERVIEW_BENCHMARK,
            beats_human_benchmark: overall >= HUMAN_INTERVIEW_BENCHMARK,
            percentile_estimate: estimate_percentile(overall),
        },
        benchmarks: Benchmarks {
            ai_interview: AI_INTERVIEW_BENCHMARK,
            human_interview: HUMAN_INTERVIEW_BENCHMARK,
        },
    }))
}

/// POST /api/v1/interview/quick
///
/// Lightweight single-response score for mid-session feedback.
pub async fn handle_quick_score(
    Json(request): Json<QuickScoreRequest>,
) -> Result<Json<QuickScoreResponse>, AppError> {
    if request.single_response.is_empty() {
        return Err(AppError::Validation(
            "single_response is required".to_string(),
        ));
    }

    Ok(Json(QuickScoreResponse {
        success: true,
        kind: "quick",
        result: score_quick_response(&request.single_response),
    }))
}

/// Rough percentile bands for a conversational score.
fn estimate_percentile(score: f64) -> u32 {
    const STEPS: [(f64, u32); 9] = [
        (9.0, 95),
        (8.5, 90),
        (8.0, 80),
        (7.5, 70),
        (7.0, 60),
        (6.5, 50),
        (6.0, 40),
        (5.5, 30),
        (5.0, 20),
    ];
    STEPS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or(10, |(_, percentile)| *percentile)
}

// ────────────────────────────────────────────────────────────────────────────
// Depth analysis handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/depth
///
/// Analyzes narrative depth per skill in a profile, predicts AI interview
/// ratings, and surfaces the weakest skills for preparation.
pub async fn handle_depth_analysis(
    Json(request): Json<DepthAnalysisRequest>,
) -> Result<Json<DepthAnalysisResponse>, AppError> {
    if request.profile_text.is_empty() {
        return Err(AppError::Validation("Profile text is required".to_string()));
    }

    let assessments = analyze_profile_skill_depth(&request.profile_text);

    let overall_prediction = if request.required_skills.is_empty() {
        None
    } else {
        Some(predict_overall_ai_score(
            &assessments,
            &request.required_skills,
        ))
    };

    let score_gap = match (request.resume_score, &overall_prediction) {
        (Some(resume_score), Some(prediction)) => {
            let max_ai = (request.required_skills.len() as u32 * SkillLevel::Senior.score()) as f64;
            Some(calculate_score_gap(
                resume_score,
                prediction.total as f64,
                100.0,
                max_ai,
            ))
        }
        _ => None,
    };

    let average_evidence_strength = if assessments.is_empty() {
        0.0
    } else {
        assessments
            .iter()
            .map(|a| a.evidence_strength as f64)
            .sum::<f64>()
            / assessments.len() as f64
    };
    let summary = DepthSummary {
        total_skills_found: assessments.len(),
        average_evidence_strength,
        skills_with_gaps: assessments.iter().filter(|a| !a.gaps.is_empty()).count(),
        ready_for_ai: assessments
            .iter()
            .filter(|a| {
                matches!(
                    a.predicted_ai_rating,
                    SkillLevel::MidLevel | SkillLevel::Senior
                )
            })
            .count(),
    };

    // assessments arrive weakest-first, so the head is the priority list
    let priority_skills = assessments
        .iter()
        .filter(|a| a.evidence_strength < 50)
        .take(5)
        .map(|a| PrioritySkill {
            skill: a.skill_name.clone(),
            evidence_strength: a.evidence_strength,
            predicted_rating: a.predicted_ai_rating,
            top_recommendation: a
                .recommendations
                .first()
                .cloned()
                .unwrap_or_else(|| "Build more experience".to_string()),
        })
        .collect();

    Ok(Json(DepthAnalysisResponse {
        success: true,
        assessments,
        overall_prediction,
        score_gap,
        summary,
        priority_skills,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Question handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Questions for one skill, optionally filtered by difficulty.
pub async fn handle_skill_questions(
    Json(request): Json<SkillQuestionsRequest>,
) -> Result<Json<SkillQuestionsResponse>, AppError> {
    if request.skill.is_empty() {
        return Err(AppError::Validation("Skill is required".to_string()));
    }

    Ok(Json(SkillQuestionsResponse {
        success: true,
        questions: questions_for_skill(&request.skill, request.difficulty),
    }))
}

/// POST /api/v1/interview/sequence
///
/// Full interview plan across several skills.
pub async fn handle_interview_sequence(
    Json(request): Json<SequenceRequest>,
) -> Result<Json<SequenceResponse>, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::Validation("Skills array is required".to_string()));
    }

    let questions_per_skill = request
        .questions_per_skill
        .unwrap_or(DEFAULT_QUESTIONS_PER_SKILL);

    Ok(Json(SequenceResponse {
        success: true,
        sequence: interview_sequence(&request.skills, questions_per_skill),
    }))
}

/// POST /api/v1/interview/follow-up
///
/// Derives a deterministic follow-up from the previous question and the
/// keywords heard in the response.
pub async fn handle_follow_up(
    Json(request): Json<FollowUpRequest>,
) -> Result<Json<FollowUpResponse>, AppError> {
    let previous = match request.previous_question {
        Some(question) => question,
        None => {
            return Err(AppError::Validation(
                "Previous question is required".to_string(),
            ))
        }
    };

    Ok(Json(FollowUpResponse {
        success: true,
        follow_up: follow_up_question(&previous, &request.response_keywords),
    }))
}

/// GET /api/v1/interview/skills
///
/// Skills with a curated question bank, in bank order.
pub async fn handle_available_skills() -> Json<AvailableSkillsResponse> {
    Json(AvailableSkillsResponse {
        skills: available_skills(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
