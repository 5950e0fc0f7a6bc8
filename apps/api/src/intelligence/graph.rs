//! Skill graph — weighted skill relationships with bounded BFS traversal.
//!
//! Modeled after GNN-style neighbor sampling: skills connect through
//! co-occurrence in job descriptions, member profiles, and career
//! transitions. The catalog and edge list are static tables; edges are
//! authored directed but traversed undirected.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Graph types
// ────────────────────────────────────────────────────────────────────────────

/// Skill taxonomy bucket. Wire format is the kebab-case id used across the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillCategory {
    ProgrammingLanguage,
    Framework,
    Cloud,
    Database,
    AiMl,
    Devops,
    BusinessOperations,
    Gtm,
    Management,
    SoftSkill,
}

impl SkillCategory {
    /// All categories in catalog order. Portfolio analysis iterates this to
    /// keep category maps and dominant-category tie-breaks stable.
    pub const ALL: [SkillCategory; 10] = [
        SkillCategory::ProgrammingLanguage,
        SkillCategory::Framework,
        SkillCategory::Cloud,
        SkillCategory::Database,
        SkillCategory::AiMl,
        SkillCategory::Devops,
        SkillCategory::BusinessOperations,
        SkillCategory::Gtm,
        SkillCategory::Management,
        SkillCategory::SoftSkill,
    ];
}

/// Typical seniority at which a skill enters a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
    Principal,
}

/// Relationship class between two skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Source enables learning the target.
    Prerequisite,
    /// Often used together.
    Complement,
    /// One can replace the other.
    Substitute,
    /// Source evolved into the target.
    Evolution,
    /// General adjacency.
    Adjacent,
}

/// One skill in the static catalog. Identity is `id` (lowercase kebab).
#[derive(Debug, Clone, Serialize)]
pub struct SkillNode {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    pub seniority: Seniority,
    /// 0-100, how in-demand.
    pub demand_score: u32,
    /// -100 to 100, YoY job-posting growth.
    pub growth_rate: i32,
}

/// One authored edge. Both directions are inserted into the adjacency list.
#[derive(Debug, Clone, Copy)]
pub struct SkillEdge {
    pub source: &'static str,
    pub target: &'static str,
    /// 0-1, co-occurrence strength. Path weight is the product along the path.
    pub weight: f64,
    pub edge_type: EdgeType,
}

/// Path classification derived from hop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Learning,
    Career,
}

/// A discovered route between two skills.
#[derive(Debug, Clone, Serialize)]
pub struct SkillPath {
    pub skills: Vec<String>,
    /// Product of edge weights along the path; decays toward 0 with length.
    pub total_weight: f64,
    pub path_type: PathKind,
    pub estimated_time: &'static str,
}

/// A 1-hop neighbor entry in the adjacency list.
#[derive(Debug, Clone, Serialize)]
pub struct Neighbor {
    pub skill: &'static str,
    pub weight: f64,
    pub edge_type: EdgeType,
}

/// An adjacency query result, enriched with the catalog node when known.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacentSkill {
    pub skill: &'static str,
    pub weight: f64,
    pub edge_type: EdgeType,
    pub node: Option<&'static SkillNode>,
}

/// A skill reached by multi-source neighbor sampling.
#[derive(Debug, Clone, Serialize)]
pub struct SampledNeighbor {
    pub distance: usize,
    pub weight: f64,
    /// Route from the originating source skill, sources included.
    pub path: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Static catalog
// ────────────────────────────────────────────────────────────────────────────

pub const SKILL_NODES: &[SkillNode] = &[
    // Programming languages
    SkillNode {
        id: "javascript",
        name: "JavaScript",
        category: SkillCategory::ProgrammingLanguage,
        seniority: Seniority::Entry,
        demand_score: 95,
        growth_rate: 5,
    },
    SkillNode {
        id: "typescript",
        name: "TypeScript",
        category: SkillCategory::ProgrammingLanguage,
        seniority: Seniority::Mid,
        demand_score: 92,
        growth_rate: 25,
    },
    SkillNode {
        id: "python",
        name: "Python",
        category: SkillCategory::ProgrammingLanguage,
        seniority: Seniority::Entry,
        demand_score: 98,
        growth_rate: 15,
    },
    SkillNode {
        id: "sql",
        name: "SQL",
        category: SkillCategory::Database,
        seniority: Seniority::Entry,
        demand_score: 90,
        growth_rate: 3,
    },
    // Frameworks
    SkillNode {
        id: "react",
        name: "React",
        category: SkillCategory::Framework,
        seniority: Seniority::Mid,
        demand_score: 93,
        growth_rate: 8,
    },
    SkillNode {
        id: "nextjs",
        name: "Next.js",
        category: SkillCategory::Framework,
        seniority: Seniority::Mid,
        demand_score: 85,
        growth_rate: 40,
    },
    SkillNode {
        id: "nodejs",
        name: "Node.js",
        category: SkillCategory::Framework,
        seniority: Seniority::Mid,
        demand_score: 88,
        growth_rate: 5,
    },
    // Cloud
    SkillNode {
        id: "aws",
        name: "AWS",
        category: SkillCategory::Cloud,
        seniority: Seniority::Mid,
        demand_score: 95,
        growth_rate: 10,
    },
    SkillNode {
        id: "azure",
        name: "Azure",
        category: SkillCategory::Cloud,
        seniority: Seniority::Mid,
        demand_score: 85,
        growth_rate: 15,
    },
    SkillNode {
        id: "gcp",
        name: "GCP",
        category: SkillCategory::Cloud,
        seniority: Seniority::Mid,
        demand_score: 75,
        growth_rate: 20,
    },
    // AI/ML
    SkillNode {
        id: "machine-learning",
        name: "Machine Learning",
        category: SkillCategory::AiMl,
        seniority: Seniority::Senior,
        demand_score: 90,
        growth_rate: 35,
    },
    SkillNode {
        id: "llm",
        name: "LLM/GenAI",
        category: SkillCategory::AiMl,
        seniority: Seniority::Senior,
        demand_score: 98,
        growth_rate: 150,
    },
    SkillNode {
        id: "pytorch",
        name: "PyTorch",
        category: SkillCategory::AiMl,
        seniority: Seniority::Senior,
        demand_score: 85,
        growth_rate: 30,
    },
    // Business operations
    SkillNode {
        id: "salesforce",
        name: "Salesforce",
        category: SkillCategory::BusinessOperations,
        seniority: Seniority::Mid,
        demand_score: 80,
        growth_rate: 5,
    },
    SkillNode {
        id: "hubspot",
        name: "HubSpot",
        category: SkillCategory::BusinessOperations,
        seniority: Seniority::Entry,
        demand_score: 70,
        growth_rate: 10,
    },
    // GTM
    SkillNode {
        id: "partner-operations",
        name: "Partner Operations",
        category: SkillCategory::Gtm,
        seniority: Seniority::Mid,
        demand_score: 75,
        growth_rate: 15,
    },
    SkillNode {
        id: "revenue-operations",
        name: "Revenue Operations",
        category: SkillCategory::Gtm,
        seniority: Seniority::Mid,
        demand_score: 82,
        growth_rate: 25,
    },
    SkillNode {
        id: "deal-registration",
        name: "Deal Registration",
        category: SkillCategory::Gtm,
        seniority: Seniority::Mid,
        demand_score: 65,
        growth_rate: 10,
    },
    // Management
    SkillNode {
        id: "program-management",
        name: "Program Management",
        category: SkillCategory::Management,
        seniority: Seniority::Senior,
        demand_score: 85,
        growth_rate: 8,
    },
    SkillNode {
        id: "technical-program-management",
        name: "Technical Program Management",
        category: SkillCategory::Management,
        seniority: Seniority::Senior,
        demand_score: 88,
        growth_rate: 12,
    },
    SkillNode {
        id: "product-management",
        name: "Product Management",
        category: SkillCategory::Management,
        seniority: Seniority::Senior,
        demand_score: 90,
        growth_rate: 10,
    },
];

// Edge order matters: adjacency lists keep authoring order, and BFS
// tie-breaks between equal-length paths follow it.
pub const SKILL_EDGES: &[SkillEdge] = &[
    // JavaScript ecosystem. Prerequisite edges are authored ahead of the
    // typescript evolution edge so the react route wins equal-length BFS ties
    // out of javascript.
    SkillEdge { source: "javascript", target: "react", weight: 0.85, edge_type: EdgeType::Prerequisite },
    SkillEdge { source: "javascript", target: "nodejs", weight: 0.8, edge_type: EdgeType::Prerequisite },
    SkillEdge { source: "javascript", target: "typescript", weight: 0.9, edge_type: EdgeType::Evolution },
    SkillEdge { source: "typescript", target: "react", weight: 0.9, edge_type: EdgeType::Complement },
    SkillEdge { source: "react", target: "nextjs", weight: 0.85, edge_type: EdgeType::Evolution },
    SkillEdge { source: "typescript", target: "nextjs", weight: 0.8, edge_type: EdgeType::Complement },
    // Python ecosystem
    SkillEdge { source: "python", target: "machine-learning", weight: 0.85, edge_type: EdgeType::Prerequisite },
    SkillEdge { source: "python", target: "pytorch", weight: 0.8, edge_type: EdgeType::Prerequisite },
    SkillEdge { source: "machine-learning", target: "llm", weight: 0.7, edge_type: EdgeType::Evolution },
    SkillEdge { source: "pytorch", target: "llm", weight: 0.75, edge_type: EdgeType::Complement },
    // Cloud relationships
    SkillEdge { source: "aws", target: "azure", weight: 0.6, edge_type: EdgeType::Substitute },
    SkillEdge { source: "aws", target: "gcp", weight: 0.6, edge_type: EdgeType::Substitute },
    SkillEdge { source: "azure", target: "gcp", weight: 0.6, edge_type: EdgeType::Substitute },
    SkillEdge { source: "python", target: "aws", weight: 0.5, edge_type: EdgeType::Complement },
    // Business operations
    SkillEdge { source: "salesforce", target: "hubspot", weight: 0.5, edge_type: EdgeType::Substitute },
    SkillEdge { source: "salesforce", target: "partner-operations", weight: 0.7, edge_type: EdgeType::Complement },
    SkillEdge { source: "salesforce", target: "revenue-operations", weight: 0.75, edge_type: EdgeType::Complement },
    SkillEdge { source: "partner-operations", target: "deal-registration", weight: 0.85, edge_type: EdgeType::Complement },
    SkillEdge { source: "revenue-operations", target: "partner-operations", weight: 0.7, edge_type: EdgeType::Adjacent },
    // Management paths
    SkillEdge { source: "program-management", target: "technical-program-management", weight: 0.8, edge_type: EdgeType::Evolution },
    SkillEdge { source: "technical-program-management", target: "product-management", weight: 0.6, edge_type: EdgeType::Adjacent },
    SkillEdge { source: "partner-operations", target: "program-management", weight: 0.65, edge_type: EdgeType::Adjacent },
    // Cross-domain bridges
    SkillEdge { source: "python", target: "sql", weight: 0.7, edge_type: EdgeType::Complement },
    SkillEdge { source: "sql", target: "salesforce", weight: 0.5, edge_type: EdgeType::Adjacent },
    SkillEdge { source: "llm", target: "product-management", weight: 0.4, edge_type: EdgeType::Adjacent },
    SkillEdge { source: "react", target: "aws", weight: 0.5, edge_type: EdgeType::Complement },
];

/// Default adjacency filter threshold.
pub const DEFAULT_MIN_WEIGHT: f64 = 0.5;
/// Default BFS depth bound for path finding.
pub const DEFAULT_MAX_DEPTH: usize = 4;
/// Default per-node neighbor cap during sampling.
pub const DEFAULT_MAX_NEIGHBORS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Graph engine
// ────────────────────────────────────────────────────────────────────────────

/// Immutable skill graph. Built once at startup and shared via `AppState`.
#[derive(Debug)]
pub struct SkillGraph {
    nodes: HashMap<&'static str, &'static SkillNode>,
    adjacency: HashMap<&'static str, Vec<Neighbor>>,
}

impl Default for SkillGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillGraph {
    /// Builds the graph from the static catalog and edge list.
    pub fn new() -> Self {
        let nodes: HashMap<&'static str, &'static SkillNode> =
            SKILL_NODES.iter().map(|n| (n.id, n)).collect();

        let mut adjacency: HashMap<&'static str, Vec<Neighbor>> = HashMap::new();
        for edge in SKILL_EDGES {
            adjacency.entry(edge.source).or_default().push(Neighbor {
                skill: edge.target,
                weight: edge.weight,
                edge_type: edge.edge_type,
            });
            adjacency.entry(edge.target).or_default().push(Neighbor {
                skill: edge.source,
                weight: edge.weight,
                edge_type: edge.edge_type,
            });
        }

        SkillGraph { nodes, adjacency }
    }

    /// Looks up a catalog node by id. Unknown ids are simply absent.
    pub fn node(&self, id: &str) -> Option<&'static SkillNode> {
        self.nodes.get(id).copied()
    }

    /// The full catalog in authoring order.
    pub fn catalog(&self) -> &'static [SkillNode] {
        SKILL_NODES
    }

    fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 1-hop neighbors with weight ≥ `min_weight`, sorted descending by
    /// weight. Unknown skill ids yield an empty list, not an error.
    pub fn find_adjacent_skills(&self, skill: &str, min_weight: f64) -> Vec<AdjacentSkill> {
        let key = skill.to_lowercase();
        let mut out: Vec<AdjacentSkill> = self
            .neighbors(&key)
            .iter()
            .filter(|n| n.weight >= min_weight)
            .map(|n| AdjacentSkill {
                skill: n.skill,
                weight: n.weight,
                edge_type: n.edge_type,
                node: self.node(n.skill),
            })
            .collect();

        out.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        out
    }

    /// BFS path between two skills over the undirected adjacency list.
    ///
    /// First-discovered path wins: shortest hop count, ties broken by edge
    /// authoring order. Returns `None` when the target is unreachable within
    /// `max_depth` nodes. Weight is the product of traversed edge weights.
    pub fn find_skill_path(
        &self,
        source: &str,
        target: &str,
        max_depth: usize,
    ) -> Option<SkillPath> {
        struct PathState {
            skill: String,
            path: Vec<String>,
            total_weight: f64,
        }

        let source = source.to_lowercase();
        let target = target.to_lowercase();

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<PathState> = VecDeque::new();

        visited.insert(source.clone());
        queue.push_back(PathState {
            skill: source.clone(),
            path: vec![source],
            total_weight: 1.0,
        });

        while let Some(current) = queue.pop_front() {
            if current.skill == target {
                let path_type = if current.path.len() <= 2 {
                    PathKind::Learning
                } else {
                    PathKind::Career
                };
                return Some(SkillPath {
                    path_type,
                    estimated_time: estimate_path_time(current.path.len()),
                    total_weight: current.total_weight,
                    skills: current.path,
                });
            }

            if current.path.len() >= max_depth {
                continue;
            }

            for neighbor in self.neighbors(&current.skill) {
                if visited.insert(neighbor.skill.to_string()) {
                    let mut path = current.path.clone();
                    path.push(neighbor.skill.to_string());
                    queue.push_back(PathState {
                        skill: neighbor.skill.to_string(),
                        path,
                        total_weight: current.total_weight * neighbor.weight,
                    });
                }
            }
        }

        None
    }

    /// Multi-source bounded BFS: every skill reachable within `hops` of the
    /// given skills, keyed by skill id. Sources enter at distance 0, weight 1;
    /// first arrival wins, later and longer routes never overwrite.
    pub fn sample_neighbors(
        &self,
        skills: &[String],
        hops: usize,
        max_neighbors: usize,
    ) -> HashMap<String, SampledNeighbor> {
        let mut result: HashMap<String, SampledNeighbor> = HashMap::new();
        // Discovery order; level expansion walks it so equal-distance entries
        // expand in the order they were first seen.
        let mut order: Vec<String> = Vec::new();

        for skill in skills {
            let key = skill.to_lowercase();
            if !result.contains_key(&key) {
                result.insert(
                    key.clone(),
                    SampledNeighbor {
                        distance: 0,
                        weight: 1.0,
                        path: vec![key.clone()],
                    },
                );
                order.push(key);
            }
        }

        for hop in 1..=hops {
            let current_level: Vec<(String, SampledNeighbor)> = order
                .iter()
                .filter_map(|skill| {
                    result
                        .get(skill)
                        .filter(|data| data.distance == hop - 1)
                        .map(|data| (skill.clone(), data.clone()))
                })
                .collect();

            for (skill, data) in current_level {
                // The cap applies before the visited filter: a new skill past
                // the cap in this node's list is skipped at this hop.
                for neighbor in self.neighbors(&skill).iter().take(max_neighbors) {
                    if !result.contains_key(neighbor.skill) {
                        let mut path = data.path.clone();
                        path.push(neighbor.skill.to_string());
                        result.insert(
                            neighbor.skill.to_string(),
                            SampledNeighbor {
                                distance: hop,
                                weight: data.weight * neighbor.weight,
                                path,
                            },
                        );
                        order.push(neighbor.skill.to_string());
                    }
                }
            }
        }

        result
    }
}

fn estimate_path_time(path_len: usize) -> &'static str {
    if path_len <= 2 {
        "1-3 months"
    } else if path_len <= 3 {
        "3-6 months"
    } else if path_len <= 4 {
        "6-12 months"
    } else {
        "12+ months"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
