//! Skill coverage and learning-path derivation over the skill graph.
//!
//! Coverage treats a requirement as met directly (exact id), nearly
//! (1-hop neighbor, 0.7 credit), loosely (2-hop, 0.4 credit), or as a gap.
//! Learning-path suggestions rank gaps by catalog demand and surface bridge
//! skills that would turn 2-hop coverage into 1-hop.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::intelligence::graph::{
    SkillCategory, SkillGraph, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NEIGHBORS,
};

/// A requirement met through the graph rather than directly.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacentMatch {
    pub required: String,
    /// The candidate skill whose neighborhood reached the requirement.
    pub candidate: String,
    pub distance: usize,
}

/// Result of matching candidate skills against a requirement list.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCoverage {
    pub direct_matches: Vec<String>,
    pub adjacent_matches: Vec<AdjacentMatch>,
    pub gaps: Vec<String>,
    /// 0-100. Direct = 1.0, 1-hop = 0.7, 2-hop = 0.4 per requirement.
    pub coverage_score: f64,
}

/// Suggestion urgency. Order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// One prioritized learning suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct LearningSuggestion {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
    pub prerequisites: Vec<String>,
    pub time_estimate: String,
}

/// Categorical breakdown of a skill list.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioAnalysis {
    pub categories: BTreeMap<SkillCategory, Vec<String>>,
    pub dominant_category: SkillCategory,
    /// Non-empty categories / 10 × 100.
    pub category_balance: f64,
    pub suggestions: Vec<String>,
}

/// Scores how well `candidate_skills` cover `required_skills` using 2-hop
/// neighbor sampling. An empty requirement list yields a zero score.
pub fn calculate_skill_coverage(
    graph: &SkillGraph,
    candidate_skills: &[String],
    required_skills: &[String],
) -> SkillCoverage {
    let candidate_set: HashSet<String> =
        candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let candidate_neighbors = graph.sample_neighbors(candidate_skills, 2, DEFAULT_MAX_NEIGHBORS);

    let mut direct_matches = Vec::new();
    let mut adjacent_matches = Vec::new();
    let mut gaps = Vec::new();

    for required in required_skills {
        let req_lower = required.to_lowercase();

        if candidate_set.contains(&req_lower) {
            direct_matches.push(required.clone());
        } else if let Some(data) = candidate_neighbors.get(&req_lower) {
            adjacent_matches.push(AdjacentMatch {
                required: required.clone(),
                candidate: data.path.first().cloned().unwrap_or_default(),
                distance: data.distance,
            });
        } else {
            gaps.push(required.clone());
        }
    }

    if required_skills.is_empty() {
        return SkillCoverage {
            direct_matches,
            adjacent_matches,
            gaps,
            coverage_score: 0.0,
        };
    }

    let one_hop = adjacent_matches.iter().filter(|a| a.distance == 1).count();
    let two_hop = adjacent_matches.iter().filter(|a| a.distance == 2).count();
    let score = (direct_matches.len() as f64 + one_hop as f64 * 0.7 + two_hop as f64 * 0.4)
        / required_skills.len() as f64;

    SkillCoverage {
        direct_matches,
        adjacent_matches,
        gaps,
        coverage_score: score.min(1.0) * 100.0,
    }
}

/// Suggests skills to learn toward `target_skills`, most urgent first.
///
/// Gaps become critical (catalog demand ≥ 85) or high suggestions; 2-hop
/// adjacencies contribute their bridge skill at medium. Sorted by priority
/// (stable, so discovery order breaks ties) and deduplicated by first
/// occurrence.
pub fn suggest_learning_path(
    graph: &SkillGraph,
    current_skills: &[String],
    target_skills: &[String],
) -> Vec<LearningSuggestion> {
    let current_set: HashSet<String> = current_skills.iter().map(|s| s.to_lowercase()).collect();
    let coverage = calculate_skill_coverage(graph, current_skills, target_skills);
    let first_current = current_skills.first().map(String::as_str).unwrap_or("");

    let mut suggestions: Vec<LearningSuggestion> = Vec::new();

    for gap in &coverage.gaps {
        let gap_lower = gap.to_lowercase();
        let node = graph.node(&gap_lower);
        let path = graph.find_skill_path(first_current, &gap_lower, DEFAULT_MAX_DEPTH);

        let priority = if node.map(|n| n.demand_score >= 85).unwrap_or(false) {
            Priority::Critical
        } else {
            Priority::High
        };
        let demand = node
            .map(|n| n.demand_score.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        // Intermediate steps only: drop the gap itself and anything already held.
        let prerequisites = path
            .as_ref()
            .map(|p| {
                p.skills[..p.skills.len().saturating_sub(1)]
                    .iter()
                    .filter(|s| !current_set.contains(*s))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        suggestions.push(LearningSuggestion {
            skill: gap.clone(),
            priority,
            reason: format!("Required skill not covered. Demand score: {demand}"),
            prerequisites,
            time_estimate: path
                .map(|p| p.estimated_time.to_string())
                .unwrap_or_else(|| "3-6 months".to_string()),
        });
    }

    for adj in &coverage.adjacent_matches {
        if adj.distance != 2 {
            continue;
        }
        let path = graph.find_skill_path(&adj.candidate, &adj.required, DEFAULT_MAX_DEPTH);
        let middle = path.and_then(|p| p.skills.get(1).cloned());

        if let Some(middle) = middle {
            if !current_set.contains(&middle) {
                suggestions.push(LearningSuggestion {
                    skill: middle.clone(),
                    priority: Priority::Medium,
                    reason: format!("Bridge skill: connects {} to {}", adj.candidate, adj.required),
                    prerequisites: Vec::new(),
                    time_estimate: "1-3 months".to_string(),
                });
            }
        }
    }

    suggestions.sort_by_key(|s| s.priority);

    let mut seen: HashSet<String> = HashSet::new();
    suggestions.retain(|s| seen.insert(s.skill.to_lowercase()));
    suggestions
}

/// Buckets skills by catalog category and measures how spread out they are.
pub fn analyze_skill_portfolio(graph: &SkillGraph, skills: &[String]) -> PortfolioAnalysis {
    let mut categories: BTreeMap<SkillCategory, Vec<String>> = SkillCategory::ALL
        .iter()
        .map(|c| (*c, Vec::new()))
        .collect();

    for skill in skills {
        if let Some(node) = graph.node(&skill.to_lowercase()) {
            if let Some(list) = categories.get_mut(&node.category) {
                list.push(skill.clone());
            }
        }
    }

    // First maximum in catalog order wins ties.
    let mut dominant_category = SkillCategory::ALL[0];
    let mut dominant_len = 0;
    for category in SkillCategory::ALL {
        let len = categories.get(&category).map(Vec::len).unwrap_or(0);
        if len > dominant_len {
            dominant_len = len;
            dominant_category = category;
        }
    }

    let non_empty = categories.values().filter(|v| !v.is_empty()).count();
    let category_balance = non_empty as f64 / 10.0 * 100.0;

    let mut suggestions = Vec::new();
    if category_balance < 30.0 {
        suggestions.push(
            "Your skill portfolio is narrowly focused. Consider branching into adjacent categories."
                .to_string(),
        );
    }
    if categories
        .get(&SkillCategory::AiMl)
        .map(|v| v.is_empty())
        .unwrap_or(true)
    {
        suggestions.push("Consider adding AI/ML skills - highest growth area.".to_string());
    }
    if categories
        .get(&SkillCategory::Cloud)
        .map(|v| v.is_empty())
        .unwrap_or(true)
    {
        suggestions
            .push("Cloud skills (AWS/Azure/GCP) are expected for most technical roles.".to_string());
    }

    PortfolioAnalysis {
        categories,
        dominant_category,
        category_balance,
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> SkillGraph {
        SkillGraph::new()
    }

    fn skills(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_coverage_react_against_react_nextjs_llm() {
        let g = graph();
        let coverage =
            calculate_skill_coverage(&g, &skills(&["react"]), &skills(&["react", "nextjs", "llm"]));

        assert_eq!(coverage.direct_matches, vec!["react"]);
        assert_eq!(coverage.adjacent_matches.len(), 1);
        assert_eq!(coverage.adjacent_matches[0].required, "nextjs");
        assert_eq!(coverage.adjacent_matches[0].distance, 1);
        assert_eq!(coverage.gaps, vec!["llm"]);
        // (1.0 direct + 0.7 one-hop) / 3 requirements
        let expected = (1.0 + 0.7) / 3.0 * 100.0;
        assert!((coverage.coverage_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_empty_required_scores_zero() {
        let g = graph();
        let coverage = calculate_skill_coverage(&g, &skills(&["react"]), &[]);
        assert_eq!(coverage.coverage_score, 0.0);
        assert!(coverage.direct_matches.is_empty());
        assert!(coverage.gaps.is_empty());
    }

    #[test]
    fn test_coverage_unknown_requirement_is_gap() {
        let g = graph();
        let coverage =
            calculate_skill_coverage(&g, &skills(&["react"]), &skills(&["basket-weaving"]));
        assert_eq!(coverage.gaps, vec!["basket-weaving"]);
        assert_eq!(coverage.coverage_score, 0.0);
    }

    #[test]
    fn test_coverage_direct_match_preserves_input_casing() {
        let g = graph();
        let coverage = calculate_skill_coverage(&g, &skills(&["React"]), &skills(&["REACT"]));
        assert_eq!(coverage.direct_matches, vec!["REACT"]);
    }

    #[test]
    fn test_coverage_adding_candidates_never_decreases_score() {
        let g = graph();
        let required = skills(&["nextjs", "llm", "aws"]);

        let base = calculate_skill_coverage(&g, &skills(&["react"]), &required).coverage_score;
        let more = calculate_skill_coverage(&g, &skills(&["react", "python"]), &required)
            .coverage_score;
        let most = calculate_skill_coverage(
            &g,
            &skills(&["react", "python", "machine-learning"]),
            &required,
        )
        .coverage_score;

        assert!(more >= base, "{more} < {base}");
        assert!(most >= more, "{most} < {more}");
        assert!(most <= 100.0);
    }

    #[test]
    fn test_coverage_two_hop_counts_partial_credit() {
        let g = graph();
        // aws is two hops from javascript (via react).
        let coverage = calculate_skill_coverage(&g, &skills(&["javascript"]), &skills(&["aws"]));
        assert_eq!(coverage.adjacent_matches.len(), 1);
        assert_eq!(coverage.adjacent_matches[0].distance, 2);
        assert!((coverage.coverage_score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_learning_path_high_demand_gap_is_critical() {
        let g = graph();
        let suggestions =
            suggest_learning_path(&g, &skills(&["javascript"]), &skills(&["llm", "gcp"]));

        let llm = suggestions.iter().find(|s| s.skill == "llm").expect("llm");
        assert_eq!(llm.priority, Priority::Critical);
        assert_eq!(llm.reason, "Required skill not covered. Demand score: 98");

        let gcp = suggestions.iter().find(|s| s.skill == "gcp").expect("gcp");
        assert_eq!(gcp.priority, Priority::High);

        // Critical sorts ahead of high.
        let llm_pos = suggestions.iter().position(|s| s.skill == "llm").unwrap();
        let gcp_pos = suggestions.iter().position(|s| s.skill == "gcp").unwrap();
        assert!(llm_pos < gcp_pos);
    }

    #[test]
    fn test_learning_path_unknown_gap_reports_na_demand() {
        let g = graph();
        let suggestions =
            suggest_learning_path(&g, &skills(&["javascript"]), &skills(&["blockchain"]));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(
            suggestions[0].reason,
            "Required skill not covered. Demand score: N/A"
        );
        assert!(suggestions[0].prerequisites.is_empty());
        assert_eq!(suggestions[0].time_estimate, "3-6 months");
    }

    #[test]
    fn test_learning_path_bridge_skill_for_two_hop_adjacency() {
        let g = graph();
        // aws is 2-hop from javascript via react; react is the bridge.
        let suggestions = suggest_learning_path(&g, &skills(&["javascript"]), &skills(&["aws"]));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].skill, "react");
        assert_eq!(suggestions[0].priority, Priority::Medium);
        assert_eq!(suggestions[0].reason, "Bridge skill: connects javascript to aws");
        assert_eq!(suggestions[0].time_estimate, "1-3 months");
    }

    #[test]
    fn test_learning_path_gap_prerequisites_exclude_current_skills() {
        let g = graph();
        // azure is three hops from javascript (react, aws, azure), past the
        // 2-hop adjacency window, so it surfaces as a gap with a route.
        let suggestions =
            suggest_learning_path(&g, &skills(&["javascript"]), &skills(&["azure"]));
        let azure = suggestions.iter().find(|s| s.skill == "azure").expect("azure");
        assert_eq!(azure.priority, Priority::Critical);
        assert_eq!(azure.prerequisites, vec!["react", "aws"]);
        assert_eq!(azure.time_estimate, "6-12 months");
    }

    #[test]
    fn test_learning_path_deduplicates_by_first_occurrence() {
        let g = graph();
        // nextjs and aws are both two hops from javascript via react, so the
        // bridge suggestion would appear twice without deduplication.
        let suggestions = suggest_learning_path(
            &g,
            &skills(&["javascript"]),
            &skills(&["nextjs", "aws"]),
        );
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].skill, "react");
        assert_eq!(suggestions[0].priority, Priority::Medium);
    }

    #[test]
    fn test_portfolio_dominant_category_and_balance() {
        let g = graph();
        let analysis =
            analyze_skill_portfolio(&g, &skills(&["javascript", "typescript", "react"]));

        assert_eq!(analysis.dominant_category, SkillCategory::ProgrammingLanguage);
        assert!((analysis.category_balance - 20.0).abs() < 1e-9);
        // Narrow focus, no AI/ML, no cloud.
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[test]
    fn test_portfolio_empty_input_defaults_to_first_category() {
        let g = graph();
        let analysis = analyze_skill_portfolio(&g, &[]);
        assert_eq!(analysis.dominant_category, SkillCategory::ProgrammingLanguage);
        assert_eq!(analysis.category_balance, 0.0);
        assert_eq!(analysis.suggestions.len(), 3);
    }

    #[test]
    fn test_portfolio_ignores_unknown_skills_and_keeps_casing() {
        let g = graph();
        let analysis = analyze_skill_portfolio(&g, &skills(&["React", "interpretive-dance"]));
        let frameworks = &analysis.categories[&SkillCategory::Framework];
        assert_eq!(frameworks, &vec!["React".to_string()]);
        let total: usize = analysis.categories.values().map(Vec::len).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_portfolio_cloud_suggestion_suppressed_when_cloud_present() {
        let g = graph();
        let analysis = analyze_skill_portfolio(&g, &skills(&["aws", "llm", "python", "sql"]));
        assert!(!analysis
            .suggestions
            .iter()
            .any(|s| s.contains("Cloud skills")));
        assert!(!analysis.suggestions.iter().any(|s| s.contains("AI/ML")));
    }
}
