//! Master-profile and job-description parsing.
//!
//! Profiles arrive as markdown with conventional section headers (SKILLS
//! INVENTORY, PROFESSIONAL EXPERIENCE); job descriptions are free text with
//! requirements sections and bullet lists. Parsing is heuristic and never
//! fails: absent sections simply yield empty collections.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct MasterProfile {
    pub name: String,
    pub text: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub years_experience: u32,
}

#[derive(Debug, Clone)]
pub struct JobDescription {
    pub title: String,
    pub company: String,
    pub text: String,
    pub requirements: Vec<String>,
    pub years_required: Option<u32>,
}

/// Recognized skill vocabularies, probed in order: technical, AI/ML, tools,
/// business. Substring hits are intentional ("sql" inside "postgresql").
static SKILL_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)python|javascript|typescript|react|node\.?js|sql|aws|azure|gcp|kubernetes|docker")
            .expect("valid regex"),
        Regex::new(r"(?i)machine learning|deep learning|nlp|computer vision|pytorch|tensorflow|claude|gemini|gpt|llm")
            .expect("valid regex"),
        Regex::new(r"(?i)salesforce|hubspot|jira|confluence|notion|figma|github|gitlab")
            .expect("valid regex"),
        Regex::new(r"(?i)partner\s+operations|gtm|revenue\s+operations|crm|deal\s+registration")
            .expect("valid regex"),
    ]
});

static SKILLS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)## SKILLS INVENTORY").expect("valid regex"));
static EXPERIENCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)## PROFESSIONAL EXPERIENCE").expect("valid regex"));
static EXPERIENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)## EDUCATION|## CERTIFICATIONS").expect("valid regex"));
static PROFILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)# Master Profile:\s*([^\n]+)").expect("valid regex"));

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-•]\s*[^\n]+").expect("valid regex"));
static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•]\s*").expect("valid regex"));
/// Achievement bullets must not start with another dash (skips `---` rules).
static ACHIEVEMENT_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-•]\s*[^-\n][^\n]+").expect("valid regex"));

static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}\s*[-–]\s*(?:Present|\d{4})")
        .expect("valid regex")
});
static MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+(\d{4})").expect("valid regex"));

static REQUIREMENTS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)requirements|qualifications|what you.?ll need|must have|required")
        .expect("valid regex")
});
static REQUIREMENTS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\n\n|benefits|about us").expect("valid regex"));
static REQUIREMENT_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-•*]\s*[^\n]+").expect("valid regex"));
static REQUIREMENT_BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*]\s*").expect("valid regex"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+[^\n]+").expect("valid regex"));
static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid regex"));

static YEAR_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s+)?experience").expect("valid regex"),
        Regex::new(r"(?i)minimum\s+(?:of\s+)?(\d+)\s*years?").expect("valid regex"),
        Regex::new(r"(?i)at\s+least\s+(\d+)\s*years?").expect("valid regex"),
    ]
});

/// Span from `header` up to (not including) the first `terminator` match
/// after it, or the end of the text.
fn section_span<'t>(text: &'t str, header: &Regex, terminator: &Regex) -> Option<&'t str> {
    let header_match = header.find(text)?;
    let rest = &text[header_match.end()..];
    let end = terminator
        .find(rest)
        .map(|m| header_match.end() + m.start())
        .unwrap_or(text.len());
    Some(&text[header_match.start()..end])
}

/// Skills from the recognized vocabularies plus the SKILLS INVENTORY section
/// bullets, lowercased and deduplicated in discovery order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    for pattern in SKILL_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let normalized = m.as_str().to_lowercase().trim().to_string();
            if !skills.contains(&normalized) {
                skills.push(normalized);
            }
        }
    }

    let skills_section = SKILLS_HEADER.find(text).map(|header| {
        let rest = &text[header.end()..];
        let end = rest
            .find("##")
            .map(|i| header.end() + i)
            .unwrap_or(text.len());
        &text[header.start()..end]
    });
    if let Some(section) = skills_section {
        for m in BULLET.find_iter(section) {
            let skill = BULLET_PREFIX
                .replace(m.as_str(), "")
                .trim()
                .to_lowercase();
            let len = skill.chars().count();
            if len > 2 && len < 50 && !skills.contains(&skill) {
                skills.push(skill);
            }
        }
    }

    skills
}

/// Achievement bullets from the PROFESSIONAL EXPERIENCE section, keeping only
/// substantive lines (longer than 20 characters).
pub fn extract_experience(text: &str) -> Vec<String> {
    let mut experience = Vec::new();

    if let Some(section) = section_span(text, &EXPERIENCE_HEADER, &EXPERIENCE_END) {
        for m in ACHIEVEMENT_BULLET.find_iter(section) {
            let cleaned = BULLET_PREFIX.replace(m.as_str(), "").trim().to_string();
            if cleaned.chars().count() > 20 {
                experience.push(cleaned);
            }
        }
    }

    experience
}

/// Sums employment date ranges ("Jan 2020 - Mar 2023", "Jun 2021 – Present")
/// into whole years. Open-ended ranges run to `today`.
pub fn calculate_years_experience(text: &str, today: NaiveDate) -> u32 {
    let mut total_months: i32 = 0;

    for range in DATE_RANGE.find_iter(text) {
        let parts: Vec<&str> = range.as_str().split(['-', '–']).collect();
        if parts.len() != 2 {
            continue;
        }

        let Some(start) = MONTH_YEAR.captures(parts[0]) else {
            continue;
        };
        let start_year: i32 = start[2].parse().unwrap_or(0);
        let start_month = month_number(&start[1]);

        let (end_year, end_month) = if parts[1].to_lowercase().contains("present") {
            (today.year(), today.month() as i32)
        } else if let Some(end) = MONTH_YEAR.captures(parts[1]) {
            (end[2].parse().unwrap_or(0), month_number(&end[1]))
        } else {
            (today.year(), today.month() as i32)
        };

        let months = (end_year - start_year) * 12 + (end_month - start_month);
        total_months += months.max(0);
    }

    (total_months as f64 / 12.0).round() as u32
}

fn month_number(name: &str) -> i32 {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 1,
    }
}

/// Parses a complete master profile from markdown. The name comes from a
/// `# Master Profile:` heading when present, else `fallback_name`.
pub fn parse_profile(text: &str, fallback_name: &str, today: NaiveDate) -> MasterProfile {
    let name = PROFILE_NAME
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| fallback_name.to_string());

    MasterProfile {
        name,
        text: text.to_string(),
        skills: extract_skills(text),
        experience: extract_experience(text),
        years_experience: calculate_years_experience(text, today),
    }
}

/// Requirement lines from requirement-like sections plus numbered items
/// anywhere in the posting. Section bullets are kept verbatim; numbered items
/// are deduplicated against what was already collected.
pub fn extract_job_requirements(job_text: &str) -> Vec<String> {
    let mut requirements = Vec::new();

    let mut pos = 0;
    while let Some(header) = REQUIREMENTS_HEADER.find_at(job_text, pos) {
        let body_start = header.end();
        let end = REQUIREMENTS_END
            .find(&job_text[body_start..])
            .map(|m| body_start + m.start())
            .unwrap_or(job_text.len());

        let section = &job_text[header.start()..end];
        for m in REQUIREMENT_BULLET.find_iter(section) {
            let cleaned = REQUIREMENT_BULLET_PREFIX
                .replace(m.as_str(), "")
                .trim()
                .to_string();
            let len = cleaned.chars().count();
            if len > 10 && len < 200 {
                requirements.push(cleaned);
            }
        }

        pos = end;
    }

    for m in NUMBERED_ITEM.find_iter(job_text) {
        let cleaned = NUMBERED_PREFIX.replace(m.as_str(), "").trim().to_string();
        let len = cleaned.chars().count();
        if len > 10 && len < 200 && !requirements.contains(&cleaned) {
            requirements.push(cleaned);
        }
    }

    requirements
}

/// First explicit experience requirement ("5+ years of experience",
/// "minimum of 3 years", "at least 7 years"), if any.
pub fn extract_years_required(job_text: &str) -> Option<u32> {
    YEAR_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(job_text).and_then(|caps| caps[1].parse().ok()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    const PROFILE: &str = "\
# Master Profile: Jane Smith

## PROFESSIONAL SUMMARY

Operator who ships. Python, SQL, and Salesforce daily driver.

## PROFESSIONAL EXPERIENCE

### Acme Corp | Senior Partner Operations Manager
Jan 2020 - Mar 2023

- Automated deal registration flows covering 1,200 partners
- Cut quote turnaround from 5 days to 6 hours with Python tooling

### Beta Inc | Operations Analyst
Jun 2023 - Present

- Built revenue dashboards in SQL serving 40 stakeholders

## EDUCATION

- BS Economics, State University

## SKILLS INVENTORY

- Python
- SQL
- Salesforce administration
- x
";

    #[test]
    fn test_extract_skills_merges_patterns_and_inventory() {
        let skills = extract_skills(PROFILE);
        // pattern hits first, lowercased and deduplicated
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"sql".to_string()));
        assert!(skills.contains(&"salesforce".to_string()));
        assert!(skills.contains(&"deal registration".to_string()));
        // inventory bullets survive the length bounds; "x" does not
        assert!(skills.contains(&"salesforce administration".to_string()));
        assert!(!skills.contains(&"x".to_string()));
        // no duplicates
        let count = skills.iter().filter(|s| s.as_str() == "python").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_extract_experience_keeps_substantive_bullets() {
        let experience = extract_experience(PROFILE);
        assert_eq!(experience.len(), 3);
        assert!(experience[0].starts_with("Automated deal registration"));
        // the education section is past the terminator
        assert!(!experience.iter().any(|e| e.contains("Economics")));
    }

    #[test]
    fn test_horizontal_rule_is_not_a_bullet() {
        let experience = extract_experience(
            "## PROFESSIONAL EXPERIENCE\n---\n- Shipped a partner portal used by 300 resellers\n",
        );
        assert_eq!(experience.len(), 1);
    }

    #[test]
    fn test_years_experience_sums_closed_and_open_ranges() {
        // Jan 2020 - Mar 2023 = 38 months; Jun 2023 - Present(Aug 2026) = 38 months
        // round(76 / 12) = 6
        assert_eq!(calculate_years_experience(PROFILE, today()), 6);
    }

    #[test]
    fn test_years_experience_single_range_rounds() {
        let years = calculate_years_experience("Jan 2020 - Dec 2022", today());
        // 35 months -> 2.92 -> 3
        assert_eq!(years, 3);
    }

    #[test]
    fn test_years_experience_ignores_inverted_ranges() {
        assert_eq!(calculate_years_experience("Jan 2023 - Jan 2020", today()), 0);
    }

    #[test]
    fn test_parse_profile_extracts_name() {
        let profile = parse_profile(PROFILE, "Unknown", today());
        assert_eq!(profile.name, "Jane Smith");
    }

    #[test]
    fn test_parse_profile_falls_back_to_default_name() {
        let profile = parse_profile("no heading here", "Unknown", today());
        assert_eq!(profile.name, "Unknown");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.years_experience, 0);
    }

    const JOB: &str = "\
Senior Data Engineer

Requirements:
- 5+ years of experience with Python and SQL
- Built production data pipelines at scale
- ok

Benefits: health, dental.

1. Design streaming ingestion for partner events
2. Design streaming ingestion for partner events
";

    #[test]
    fn test_job_requirements_from_sections_and_numbered_items() {
        let requirements = extract_job_requirements(JOB);
        assert!(requirements
            .iter()
            .any(|r| r.starts_with("5+ years of experience")));
        assert!(requirements
            .iter()
            .any(|r| r.starts_with("Built production data pipelines")));
        // too-short bullets are dropped
        assert!(!requirements.iter().any(|r| r == "ok"));
        // numbered items are deduplicated
        let streaming = requirements
            .iter()
            .filter(|r| r.starts_with("Design streaming"))
            .count();
        assert_eq!(streaming, 1);
    }

    #[test]
    fn test_requirements_section_stops_at_blank_line() {
        let requirements = extract_job_requirements(
            "Requirements:\n- Operate the partner data warehouse end to end\n\n- Unrelated bullet after the break that is long enough\n",
        );
        assert_eq!(requirements.len(), 1);
    }

    #[test]
    fn test_years_required_patterns() {
        assert_eq!(extract_years_required("We want 5+ years of experience"), Some(5));
        assert_eq!(extract_years_required("Minimum of 3 years in ops"), Some(3));
        assert_eq!(extract_years_required("at least 7 years shipping"), Some(7));
        assert_eq!(extract_years_required("no numbers here"), None);
    }
}
