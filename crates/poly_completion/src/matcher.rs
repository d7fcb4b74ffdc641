//! Seam for the external specification-matching service.

use crate::Specification;
use poly_error::PolyResult;
use serde::{Deserialize, Serialize};

/// Statistics about how a question matched the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchStats {
    /// How many specifications matched
    pub match_count: usize,
    /// How many specifications were considered
    pub total: usize,
    /// The question the stats describe
    pub prompt: Option<String>,
}

/// Selects the catalog specifications to surface for a question.
///
/// Keyword extraction and scoring live in an external service; this
/// crate only consumes its results.
#[async_trait::async_trait]
pub trait FunctionMatcher: Send + Sync {
    /// Returns the best-matching specifications for the question,
    /// together with match statistics.
    async fn top_matches(&self, question: &str)
    -> PolyResult<(Vec<Specification>, MatchStats)>;
}
