//! Query answering: normalize, fold in, rank

use crate::catalog::Catalog;
use crate::fold_in::FoldInEngine;
use crate::rank::{RankedResult, SimilarityRanker};
use crate::{Error, Result};
use gamesage_text::TextNormalizer;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Answer to one free-text query
#[derive(Debug, Clone, Serialize)]
pub struct QueryAnswer {
    pub normalized_text: String,
    /// Descending by score
    pub most_related: Vec<RankedResult>,
    /// Ascending by score, least related first
    pub least_related: Vec<RankedResult>,
}

impl QueryAnswer {
    /// Both lists in GameNet's `id&score,id&score` wire form
    pub fn gamenet_strings(&self) -> (String, String) {
        (
            gamenet_string(&self.most_related),
            gamenet_string(&self.least_related),
        )
    }
}

fn gamenet_string(results: &[RankedResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}&{}", r.id, r.score))
        .collect::<Vec<_>>()
        .join(",")
}

/// Folds free text into the LSA space and finds the related games.
///
/// Every component is immutable and shared, so one instance answers any
/// number of concurrent queries.
#[derive(Debug, Clone)]
pub struct GameSage {
    catalog: Arc<Catalog>,
    normalizer: Arc<TextNormalizer>,
    engine: Arc<FoldInEngine>,
    ranker: SimilarityRanker,
}

impl GameSage {
    /// Wire the components together.
    ///
    /// Fails with `VectorShapeMismatch` when folded-in vectors would not
    /// share the catalog's dimensionality.
    pub fn new(
        catalog: Arc<Catalog>,
        normalizer: Arc<TextNormalizer>,
        engine: Arc<FoldInEngine>,
    ) -> Result<Self> {
        if !catalog.is_empty() && catalog.dim() != engine.dim() {
            return Err(Error::VectorShapeMismatch {
                expected: catalog.dim(),
                actual: engine.dim(),
            });
        }

        Ok(Self {
            catalog,
            normalizer,
            engine,
            ranker: SimilarityRanker::default(),
        })
    }

    #[must_use]
    pub fn with_ranker(mut self, ranker: SimilarityRanker) -> Self {
        self.ranker = ranker;
        self
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    #[inline]
    pub fn engine(&self) -> &FoldInEngine {
        &self.engine
    }

    /// Rank the catalog against raw user text.
    ///
    /// Text that normalizes to nothing still gets a ranking: every score is
    /// 0.0 and both lists follow catalog order.
    pub fn answer_query(&self, raw_text: &str) -> Result<QueryAnswer> {
        let normalized_text = self.normalizer.normalize(raw_text);
        let query = self.engine.fold_in(&normalized_text);
        if query.is_zero() {
            debug!(raw_text, "query folded in to the zero vector");
        }

        let ranking = self.ranker.rank(&query, &self.catalog)?;
        Ok(QueryAnswer {
            normalized_text,
            most_related: ranking.most_related,
            least_related: ranking.least_related,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::projection::LsiProjection;
    use crate::vector::SemanticVector;
    use crate::vocabulary::TermVocabulary;
    use crate::weighting::TfIdfModel;
    use gamesage_text::StopwordList;

    // Three terms, four raw topics: the first is a shared scale topic, the
    // others line up one-to-one with the terms.
    fn create_test_sage() -> GameSage {
        let vocabulary = TermVocabulary::new([
            ("space".to_string(), 0),
            ("racing".to_string(), 1),
            ("puzzle".to_string(), 2),
        ]);
        let weighting =
            TfIdfModel::from_document_frequencies(3, [(0, 1), (1, 1), (2, 1)], true).unwrap();
        let projection = LsiProjection::new(
            4,
            vec![
                vec![0.3, 1.0, 0.0, 0.0],
                vec![0.3, 0.0, 1.0, 0.0],
                vec![0.3, 0.0, 0.0, 1.0],
            ],
            vec![],
            false,
        )
        .unwrap();
        let engine = FoldInEngine::new(vocabulary, weighting, projection).unwrap();

        let catalog = Catalog::new(vec![
            CatalogEntry::from_record(1, "g1", "Space Invaders", "0.9,1,0,0").unwrap(),
            CatalogEntry::from_record(2, "g2", "Gran Turismo", "0.9,0,1,0").unwrap(),
            CatalogEntry::from_record(3, "g3", "Tetris", "0.9,0,0,1").unwrap(),
            CatalogEntry::from_record(4, "g4", "Space Racer", "0.9,1,1,0").unwrap(),
        ])
        .unwrap();

        let normalizer = TextNormalizer::builder()
            .titles(catalog.titles())
            .stopwords(StopwordList::new(["the", "a", "an", "some"]))
            .build();

        GameSage::new(Arc::new(catalog), Arc::new(normalizer), Arc::new(engine)).unwrap()
    }

    #[test]
    fn test_answer_query() {
        let sage = create_test_sage();
        let answer = sage.answer_query("Some RACING!").unwrap();
        assert_eq!(answer.normalized_text, "racing");
        assert_eq!(answer.most_related[0].id, "g2");
        assert_eq!(answer.most_related.len(), 4);
        assert_eq!(answer.least_related.len(), 4);
        assert!(answer.least_related[0].score <= answer.least_related[1].score);
    }

    #[test]
    fn test_stopword_only_query() {
        let sage = create_test_sage();
        let answer = sage.answer_query("the a an").unwrap();
        assert_eq!(answer.normalized_text, "");
        assert!(answer.most_related.iter().all(|r| r.score == 0.0));
        let ids: Vec<&str> = answer.most_related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2", "g3", "g4"]);
    }

    #[test]
    fn test_catalog_and_query_vectors_agree() {
        let sage = create_test_sage();
        // "space" projects to the raw vector [0.3, 1, 0, 0]; after dropping
        // dimension 0 it matches g1's stored vector exactly
        let answer = sage.answer_query("space").unwrap();
        assert_eq!(answer.most_related[0].id, "g1");
        assert!((answer.most_related[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gamenet_strings() {
        let answer = QueryAnswer {
            normalized_text: String::new(),
            most_related: vec![
                RankedResult { id: "a".into(), title: "A".into(), score: 0.5 },
                RankedResult { id: "b".into(), title: "B".into(), score: 0.25 },
            ],
            least_related: vec![],
        };
        let (most, least) = answer.gamenet_strings();
        assert_eq!(most, "a&0.5,b&0.25");
        assert_eq!(least, "");
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let sage = create_test_sage();
        let small = Catalog::new(vec![CatalogEntry::new(
            "x",
            "X",
            SemanticVector::new(vec![1.0]),
        )])
        .unwrap();
        let result = GameSage::new(
            Arc::new(small),
            Arc::new(sage.normalizer().clone()),
            Arc::new(sage.engine().clone()),
        );
        assert!(matches!(
            result,
            Err(Error::VectorShapeMismatch { expected: 1, actual: 3 })
        ));
    }
}
