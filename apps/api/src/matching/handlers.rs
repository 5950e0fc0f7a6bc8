//! Axum route handler for resume-to-job match analysis.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::profile::{
    extract_job_requirements, extract_years_required, parse_profile, JobDescription,
};
use crate::matching::report::format_report;
use crate::matching::scoring::{analyze_match, MatchResult};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile_text: String,
    pub job_text: String,
    pub job_title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub skills_count: usize,
    pub experience_count: usize,
    pub years_experience: u32,
}

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub title: String,
    pub company: String,
    pub requirements_count: usize,
    pub years_required: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub success: bool,
    pub result: MatchResult,
    pub report: String,
    pub profile: ProfileSummary,
    pub job: JobSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Parses the profile and job description, runs the full match analysis, and
/// returns the structured result together with a rendered Markdown report.
pub async fn handle_match(
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.profile_text.is_empty() || request.job_text.is_empty() {
        return Err(AppError::Validation(
            "Profile text and job text are required".to_string(),
        ));
    }

    let now = Utc::now();
    let profile = parse_profile(&request.profile_text, "Unknown", now.date_naive());

    let requirements = extract_job_requirements(&request.job_text);
    let years_required = extract_years_required(&request.job_text);
    let job = JobDescription {
        title: request
            .job_title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Unknown Position".to_string()),
        company: request
            .company
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "Unknown Company".to_string()),
        text: request.job_text,
        requirements,
        years_required,
    };

    let result = analyze_match(&profile, &job);
    let generated_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let report = format_report(&result, &job.title, &job.company, &generated_at);

    Ok(Json(MatchResponse {
        success: true,
        result,
        report,
        profile: ProfileSummary {
            name: profile.name,
            skills_count: profile.skills.len(),
            experience_count: profile.experience.len(),
            years_experience: profile.years_experience,
        },
        job: JobSummary {
            title: job.title,
            company: job.company,
            requirements_count: job.requirements.len(),
            years_required: job.years_required,
        },
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
