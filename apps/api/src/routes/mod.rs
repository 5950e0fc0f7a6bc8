pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intelligence::handlers as intelligence;
use crate::interview::handlers as interview;
use crate::matching::handlers as matching;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job matching
        .route("/api/v1/match", post(matching::handle_match))
        // Skill graph
        .route("/api/v1/skills", get(intelligence::handle_skill_catalog))
        .route(
            "/api/v1/skills/adjacent",
            post(intelligence::handle_adjacent_skills),
        )
        .route("/api/v1/skills/path", post(intelligence::handle_skill_path))
        .route(
            "/api/v1/skills/coverage",
            post(intelligence::handle_skill_coverage),
        )
        .route(
            "/api/v1/skills/learning-path",
            post(intelligence::handle_learning_path),
        )
        .route(
            "/api/v1/skills/portfolio-analysis",
            post(intelligence::handle_portfolio_analysis),
        )
        // Response scoring
        .route(
            "/api/v1/responses/score",
            post(intelligence::handle_score_response),
        )
        .route(
            "/api/v1/responses/score-set",
            post(intelligence::handle_score_response_set),
        )
        .route(
            "/api/v1/responses/ideal",
            post(intelligence::handle_ideal_responses),
        )
        .route(
            "/api/v1/responses/skills",
            get(intelligence::handle_response_skills),
        )
        // Profile signals
        .route(
            "/api/v1/signals/analyze",
            post(intelligence::handle_analyze_signals),
        )
        .route(
            "/api/v1/signals/match-estimate",
            post(intelligence::handle_match_estimate),
        )
        // Interview prep
        .route(
            "/api/v1/interview/conversational",
            post(interview::handle_conversational),
        )
        .route("/api/v1/interview/quick", post(interview::handle_quick_score))
        .route(
            "/api/v1/interview/depth",
            post(interview::handle_depth_analysis),
        )
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_skill_questions),
        )
        .route(
            "/api/v1/interview/sequence",
            post(interview::handle_interview_sequence),
        )
        .route(
            "/api/v1/interview/follow-up",
            post(interview::handle_follow_up),
        )
        .route(
            "/api/v1/interview/skills",
            get(interview::handle_available_skills),
        )
        // Portfolio store
        .route(
            "/api/v1/portfolio",
            get(portfolio::handle_get_portfolio).post(portfolio::handle_save_portfolio),
        )
        .with_state(state)
}
