//! Similarity ranking of a query vector against the whole catalog
//!
//! Every request scores the query against every entry; no index outlives
//! the call. Ties are broken by catalog order in both directions, which a
//! persistent index replacing the linear scan would have to preserve.

use crate::catalog::{Catalog, CatalogEntry};
use crate::vector::SemanticVector;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::Serialize;

/// Number of entries in each ranking list
pub const DEFAULT_RANKING_LIMIT: usize = 50;

/// One catalog entry with its similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub id: String,
    pub title: String,
    pub score: f32,
}

impl RankedResult {
    fn new(entry: &CatalogEntry, score: f32) -> Self {
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            score,
        }
    }
}

/// The most and least related entries for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    /// Descending by score
    pub most_related: Vec<RankedResult>,
    /// Ascending by score, least related first
    pub least_related: Vec<RankedResult>,
}

/// Ranks catalog entries by cosine similarity to a query.
///
/// Both lists hold `min(limit, catalog size)` entries. With fewer than
/// `2 * limit` entries the two lists overlap.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker {
    limit: usize,
}

impl Default for SimilarityRanker {
    fn default() -> Self {
        Self::new(DEFAULT_RANKING_LIMIT)
    }
}

impl SimilarityRanker {
    #[inline]
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Similarity of `query` to every entry, in catalog order
    pub fn scores(&self, query: &SemanticVector, catalog: &Catalog) -> Result<Vec<f32>> {
        if !catalog.is_empty() && query.dim() != catalog.dim() {
            return Err(Error::VectorShapeMismatch {
                expected: catalog.dim(),
                actual: query.dim(),
            });
        }

        Ok(catalog
            .entries()
            .par_iter()
            .map(|entry| query.cosine_similarity(&entry.vector))
            .collect())
    }

    pub fn rank(&self, query: &SemanticVector, catalog: &Catalog) -> Result<Ranking> {
        let scores = self.scores(query, catalog)?;

        // Stable sorts keep catalog order among equal scores
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(OrderedFloat(scores[i])));
        let most_related = self.collect(&order, &scores, catalog);

        order.sort_by_key(|&i| (OrderedFloat(scores[i]), i));
        let least_related = self.collect(&order, &scores, catalog);

        Ok(Ranking {
            most_related,
            least_related,
        })
    }

    fn collect(&self, order: &[usize], scores: &[f32], catalog: &Catalog) -> Vec<RankedResult> {
        order
            .iter()
            .take(self.limit)
            .filter_map(|&i| catalog.get(i).map(|entry| RankedResult::new(entry, scores[i])))
            .collect()
    }
}
