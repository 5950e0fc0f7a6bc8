//! Career-intelligence domain: the static skill graph and its traversals,
//! coverage and learning-path derivation, exemplar-based response scoring,
//! and profile signal analysis.

pub mod coverage;
pub mod exemplars;
pub mod graph;
pub mod handlers;
pub mod response_scoring;
pub mod signals;
