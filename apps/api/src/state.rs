use std::sync::Arc;

use crate::config::Config;
use crate::intelligence::graph::SkillGraph;
use crate::portfolio::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Static skill graph, built once at startup.
    pub graph: Arc<SkillGraph>,
    pub portfolio: PortfolioStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let portfolio = PortfolioStore::new(config.data_dir.clone());
        AppState {
            config,
            graph: Arc::new(SkillGraph::new()),
            portfolio,
        }
    }
}
