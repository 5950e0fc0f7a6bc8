//! Axum route handlers for the career intelligence API.
//!
//! Graph queries go through the shared skill graph in application state;
//! response scoring and profile signal analysis are pure text heuristics and
//! need no state at all.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intelligence::coverage::{
    analyze_skill_portfolio, calculate_skill_coverage, suggest_learning_path, LearningSuggestion,
    PortfolioAnalysis, SkillCoverage,
};
use crate::intelligence::exemplars::{IdealResponse, IDEAL_RESPONSES};
use crate::intelligence::graph::{
    AdjacentSkill, SkillNode, SkillPath, DEFAULT_MAX_DEPTH, DEFAULT_MIN_WEIGHT,
};
use crate::intelligence::response_scoring::{
    score_response, score_response_set, ResponseScore, ResponseSetScore, ResponseSubmission,
};
use crate::intelligence::signals::{
    analyze_profile_signals, estimate_linkedin_match_score, MatchEstimate, ProfileSignalAnalysis,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillCatalogResponse {
    pub skills: &'static [SkillNode],
}

#[derive(Debug, Deserialize)]
pub struct AdjacentSkillsRequest {
    pub skill: String,
    pub min_weight: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AdjacentSkillsResponse {
    pub success: bool,
    pub adjacent: Vec<AdjacentSkill>,
}

#[derive(Debug, Deserialize)]
pub struct SkillPathRequest {
    pub skill: String,
    pub target_skill: String,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillPathResponse {
    pub success: bool,
    /// `null` when the target is unreachable within the depth bound.
    pub path: Option<SkillPath>,
}

#[derive(Debug, Deserialize)]
pub struct SkillCoverageRequest {
    pub skills: Vec<String>,
    pub target_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillCoverageResponse {
    pub success: bool,
    pub coverage: SkillCoverage,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub skills: Vec<String>,
    pub target_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub success: bool,
    pub suggestions: Vec<LearningSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioAnalysisRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioAnalysisResponse {
    pub success: bool,
    pub analysis: PortfolioAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub response: String,
    pub skill: String,
    pub question_type: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub score: ResponseScore,
}

#[derive(Debug, Deserialize)]
pub struct ScoreSetRequest {
    pub responses: Vec<ResponseSubmission>,
}

#[derive(Debug, Serialize)]
pub struct ScoreSetResponse {
    pub success: bool,
    pub result: ResponseSetScore,
}

#[derive(Debug, Deserialize)]
pub struct IdealsRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct IdealsResponse {
    pub success: bool,
    pub ideals: Vec<&'static IdealResponse>,
}

#[derive(Debug, Serialize)]
pub struct ResponseSkillsResponse {
    pub skills: Vec<&'static str>,
    pub question_types: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeSignalsRequest {
    pub profile_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeSignalsResponse {
    pub success: bool,
    pub analysis: ProfileSignalAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct MatchEstimateRequest {
    pub profile_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct MatchEstimateResponse {
    pub success: bool,
    pub estimate: MatchEstimate,
}

// ────────────────────────────────────────────────────────────────────────────
// Skill graph handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Returns the full skill catalog in authoring order.
pub async fn handle_skill_catalog(State(state): State<AppState>) -> Json<SkillCatalogResponse> {
    Json(SkillCatalogResponse {
        skills: state.graph.catalog(),
    })
}

/// POST /api/v1/skills/adjacent
///
/// 1-hop neighbors of a skill, strongest edge first. Unknown skills yield an
/// empty list rather than an error.
pub async fn handle_adjacent_skills(
    State(state): State<AppState>,
    Json(request): Json<AdjacentSkillsRequest>,
) -> Result<Json<AdjacentSkillsResponse>, AppError> {
    if request.skill.is_empty() {
        return Err(AppError::Validation("Skill is required".to_string()));
    }

    let min_weight = request.min_weight.unwrap_or(DEFAULT_MIN_WEIGHT);
    let adjacent = state.graph.find_adjacent_skills(&request.skill, min_weight);

    Ok(Json(AdjacentSkillsResponse {
        success: true,
        adjacent,
    }))
}

/// POST /api/v1/skills/path
///
/// Shortest-hop path between two skills via BFS, or `null` when unreachable
/// within the depth bound.
pub async fn handle_skill_path(
    State(state): State<AppState>,
    Json(request): Json<SkillPathRequest>,
) -> Result<Json<SkillPathResponse>, AppError> {
    if request.skill.is_empty() || request.target_skill.is_empty() {
        return Err(AppError::Validation(
            "skill and target_skill are required".to_string(),
        ));
    }

    let max_depth = request.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    let path = state
        .graph
        .find_skill_path(&request.skill, &request.target_skill, max_depth);

    Ok(Json(SkillPathResponse {
        success: true,
        path,
    }))
}

/// POST /api/v1/skills/coverage
///
/// Scores how well a candidate's skills cover a requirement list, counting
/// adjacent skills at reduced credit.
pub async fn handle_skill_coverage(
    State(state): State<AppState>,
    Json(request): Json<SkillCoverageRequest>,
) -> Result<Json<SkillCoverageResponse>, AppError> {
    let coverage = calculate_skill_coverage(&state.graph, &request.skills, &request.target_skills);

    Ok(Json(SkillCoverageResponse {
        success: true,
        coverage,
    }))
}

/// POST /api/v1/skills/learning-path
///
/// Prioritized learning suggestions that close the gap between current and
/// target skills.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Json(request): Json<LearningPathRequest>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let suggestions = suggest_learning_path(&state.graph, &request.skills, &request.target_skills);

    Ok(Json(LearningPathResponse {
        success: true,
        suggestions,
    }))
}

/// POST /api/v1/skills/portfolio-analysis
///
/// Categorical breakdown of a skill list with balance metrics and
/// diversification suggestions.
pub async fn handle_portfolio_analysis(
    State(state): State<AppState>,
    Json(request): Json<PortfolioAnalysisRequest>,
) -> Result<Json<PortfolioAnalysisResponse>, AppError> {
    let analysis = analyze_skill_portfolio(&state.graph, &request.skills);

    Ok(Json(PortfolioAnalysisResponse {
        success: true,
        analysis,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Response scoring handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/responses/score
///
/// Scores one interview answer against the closest curated exemplar.
pub async fn handle_score_response(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if request.response.is_empty() || request.skill.is_empty() || request.question_type.is_empty() {
        return Err(AppError::Validation(
            "response, skill, and question_type are required".to_string(),
        ));
    }

    let score = score_response(&request.response, &request.skill, &request.question_type);

    Ok(Json(ScoreResponse {
        success: true,
        score,
    }))
}

/// POST /api/v1/responses/score-set
///
/// Scores a batch of answers and aggregates strengths, weaknesses, and an
/// overall readiness verdict.
pub async fn handle_score_response_set(
    Json(request): Json<ScoreSetRequest>,
) -> Result<Json<ScoreSetResponse>, AppError> {
    let result = score_response_set(&request.responses);

    Ok(Json(ScoreSetResponse {
        success: true,
        result,
    }))
}

/// POST /api/v1/responses/ideal
///
/// Returns every curated exemplar for a skill, matched case-insensitively.
pub async fn handle_ideal_responses(
    Json(request): Json<IdealsRequest>,
) -> Result<Json<IdealsResponse>, AppError> {
    if request.skill.is_empty() {
        return Err(AppError::Validation("skill is required".to_string()));
    }

    let ideals = IDEAL_RESPONSES
        .iter()
        .filter(|ir| ir.skill.eq_ignore_ascii_case(&request.skill))
        .collect();

    Ok(Json(IdealsResponse {
        success: true,
        ideals,
    }))
}

/// GET /api/v1/responses/skills
///
/// Lists the skills and question types covered by the exemplar library,
/// deduplicated in authoring order.
pub async fn handle_response_skills() -> Json<ResponseSkillsResponse> {
    let mut skills: Vec<&'static str> = Vec::new();
    let mut question_types: Vec<&'static str> = Vec::new();
    for ideal in IDEAL_RESPONSES {
        if !skills.contains(&ideal.skill) {
            skills.push(ideal.skill);
        }
        if !question_types.contains(&ideal.question_type) {
            question_types.push(ideal.question_type);
        }
    }

    Json(ResponseSkillsResponse {
        skills,
        question_types,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Profile signal handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/signals/analyze
///
/// Analyzes a profile against the interaction-edge taxonomy and returns
/// optimization suggestions.
pub async fn handle_analyze_signals(
    Json(request): Json<AnalyzeSignalsRequest>,
) -> Result<Json<AnalyzeSignalsResponse>, AppError> {
    if request.profile_text.is_empty() {
        return Err(AppError::Validation("profile_text is required".to_string()));
    }

    let analysis = analyze_profile_signals(&request.profile_text);

    Ok(Json(AnalyzeSignalsResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/v1/signals/match-estimate
///
/// Estimates how a recommender system would rank a profile against a job
/// posting.
pub async fn handle_match_estimate(
    Json(request): Json<MatchEstimateRequest>,
) -> Result<Json<MatchEstimateResponse>, AppError> {
    if request.profile_text.is_empty() || request.job_description.is_empty() {
        return Err(AppError::Validation(
            "profile_text and job_description are required".to_string(),
        ));
    }

    let estimate = estimate_linkedin_match_score(&request.profile_text, &request.job_description);

    Ok(Json(MatchEstimateResponse {
        success: true,
        estimate,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
