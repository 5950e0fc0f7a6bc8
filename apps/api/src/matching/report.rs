//! Markdown rendering of a match result.

use crate::matching::scoring::{MatchResult, DIMENSION_WEIGHTS};

fn bullet_list(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        return "- None identified".to_string();
    }
    items
        .iter()
        .take(limit)
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn comma_list(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the full match report: overall score with tier, dimension table,
/// experience classification, skills analysis, flags, and recommendations.
pub fn format_report(
    result: &MatchResult,
    job_title: &str,
    company: &str,
    generated_at: &str,
) -> String {
    let tier_label = result.match_tier.as_str().replace('_', " ");
    let tier_emoji = result.match_tier.emoji();

    let recommendations = if result.recommendations.is_empty() {
        "- No specific recommendations".to_string()
    } else {
        result
            .recommendations
            .iter()
            .map(|rec| format!("- {rec}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let overqualified_flag = if result.overqualified {
        "⚠️ **Overqualified** — Consider negotiation leverage"
    } else {
        ""
    };
    let underqualified_flag = if result.underqualified {
        "⚠️ **Underqualified** — Address gaps in cover letter"
    } else {
        ""
    };

    format!(
        "# Match Report: {job_title} @ {company}\n\
         \n\
         ## Overall Score: {total:.1}% — {tier_emoji} {tier_label}\n\
         \n\
         ### Dimension Breakdown\n\
         \n\
         | Dimension | Score | Weight | Weighted |\n\
         |-----------|-------|--------|----------|\n\
         | Keyword Alignment | {keyword:.1}% | 25% | {keyword_weighted:.1} |\n\
         | Experience Relevance | {experience:.1}% | 25% | {experience_weighted:.1} |\n\
         | Skills Coverage | {skills:.1}% | 20% | {skills_weighted:.1} |\n\
         | Quantified Impact | {impact:.1}% | 15% | {impact_weighted:.1} |\n\
         | Recency Match | {recency:.1}% | 10% | {recency_weighted:.1} |\n\
         | Culture Signals | {culture:.1}% | 5% | {culture_weighted:.1} |\n\
         \n\
         ### Experience Classification\n\
         \n\
         **Direct Match ({direct_count}):**\n\
         {direct}\n\
         \n\
         **Transferable ({transferable_count}):**\n\
         {transferable}\n\
         \n\
         **Gaps ({gap_count}):**\n\
         {gaps}\n\
         \n\
         ### Skills Analysis\n\
         \n\
         **Matched:** {skills_matched}\n\
         \n\
         **Missing:** {skills_missing}\n\
         \n\
         ### Flags\n\
         \n\
         {overqualified_flag}\n\
         {underqualified_flag}\n\
         \n\
         ### Recommendations\n\
         \n\
         {recommendations}\n\
         \n\
         ---\n\
         *Generated: {generated_at}*\n",
        total = result.total_score,
        keyword = result.keyword_score,
        keyword_weighted = result.keyword_score * DIMENSION_WEIGHTS.keyword,
        experience = result.experience_score,
        experience_weighted = result.experience_score * DIMENSION_WEIGHTS.experience,
        skills = result.skills_score,
        skills_weighted = result.skills_score * DIMENSION_WEIGHTS.skills,
        impact = result.impact_score,
        impact_weighted = result.impact_score * DIMENSION_WEIGHTS.impact,
        recency = result.recency_score,
        recency_weighted = result.recency_score * DIMENSION_WEIGHTS.recency,
        culture = result.culture_score,
        culture_weighted = result.culture_score * DIMENSION_WEIGHTS.culture,
        direct_count = result.experience_direct.len(),
        direct = bullet_list(&result.experience_direct, 5),
        transferable_count = result.experience_transferable.len(),
        transferable = bullet_list(&result.experience_transferable, 5),
        gap_count = result.experience_gaps.len(),
        gaps = bullet_list(&result.experience_gaps, 5),
        skills_matched = comma_list(&result.skills_matched, 10),
        skills_missing = comma_list(&result.skills_missing, 10),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::MatchTier;

    fn sample_result() -> MatchResult {
        MatchResult {
            keyword_score: 80.0,
            experience_score: 70.0,
            skills_score: 60.0,
            impact_score: 50.0,
            recency_score: 70.0,
            culture_score: 60.0,
            total_score: 68.5,
            match_tier: MatchTier::ModerateMatch,
            keywords_matched: vec!["python".to_string()],
            keywords_missing: vec!["airflow".to_string()],
            skills_matched: vec!["sql".to_string()],
            skills_missing: vec!["kubernetes".to_string()],
            experience_direct: vec!["built data pipelines".to_string()],
            experience_transferable: Vec::new(),
            experience_gaps: vec!["managed oncall rotations".to_string()],
            overqualified: false,
            underqualified: true,
            recommendations: vec!["Address gaps proactively".to_string()],
        }
    }

    #[test]
    fn test_report_contains_every_section() {
        let report = format_report(
            &sample_result(),
            "Data Engineer",
            "Acme",
            "2026-08-25T00:00:00.000Z",
        );

        assert!(report.starts_with("# Match Report: Data Engineer @ Acme"));
        assert!(report.contains("## Overall Score: 68.5% — ⚠️ MODERATE MATCH"));
        assert!(report.contains("| Keyword Alignment | 80.0% | 25% | 20.0 |"));
        assert!(report.contains("| Culture Signals | 60.0% | 5% | 3.0 |"));
        assert!(report.contains("**Direct Match (1):**\n- built data pipelines"));
        assert!(report.contains("**Transferable (0):**\n- None identified"));
        assert!(report.contains("**Matched:** sql"));
        assert!(report.contains("**Missing:** kubernetes"));
        assert!(report.contains("⚠️ **Underqualified** — Address gaps in cover letter"));
        assert!(report.contains("- Address gaps proactively"));
        assert!(report.contains("*Generated: 2026-08-25T00:00:00.000Z*"));
    }

    #[test]
    fn test_report_empty_recommendations_fallback() {
        let mut result = sample_result();
        result.recommendations.clear();
        let report = format_report(&result, "Role", "Co", "now");
        assert!(report.contains("- No specific recommendations"));
    }

    #[test]
    fn test_tier_emoji_per_tier() {
        assert_eq!(MatchTier::StrongMatch.emoji(), "✅");
        assert_eq!(MatchTier::ModerateMatch.emoji(), "⚠️");
        assert_eq!(MatchTier::WeakMatch.emoji(), "🟡");
        assert_eq!(MatchTier::NoMatch.emoji(), "🚫");
    }
}
