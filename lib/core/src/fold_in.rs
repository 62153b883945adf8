//! Folding new text into the fitted LSA space
//!
//! normalized text -> term frequencies -> TF-IDF weights -> LSI topics, with
//! dimension 0 dropped so the result is comparable to catalog vectors.

use crate::projection::LsiProjection;
use crate::sparse::SparseVector;
use crate::vector::SemanticVector;
use crate::vocabulary::TermVocabulary;
use crate::weighting::TfIdfModel;
use crate::{Error, Result};

/// Derives semantic vectors for arbitrary text from the pre-trained models.
///
/// Read-only after construction, so one engine serves concurrent requests.
#[derive(Debug, Clone)]
pub struct FoldInEngine {
    vocabulary: TermVocabulary,
    weighting: TfIdfModel,
    projection: LsiProjection,
}

impl FoldInEngine {
    pub fn new(
        vocabulary: TermVocabulary,
        weighting: TfIdfModel,
        projection: LsiProjection,
    ) -> Result<Self> {
        if projection.num_topics() < 2 {
            return Err(Error::InvalidModel(format!(
                "projection needs at least 2 topics to drop dimension 0, has {}",
                projection.num_topics()
            )));
        }
        if let Some(max_id) = vocabulary.max_id() {
            if max_id as usize >= projection.num_terms() {
                return Err(Error::InvalidModel(format!(
                    "vocabulary term id {} outside projection with {} terms",
                    max_id,
                    projection.num_terms()
                )));
            }
        }

        Ok(Self {
            vocabulary,
            weighting,
            projection,
        })
    }

    /// Dimensionality of folded-in vectors
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.projection.num_topics() - 1
    }

    #[inline]
    pub fn vocabulary(&self) -> &TermVocabulary {
        &self.vocabulary
    }

    /// Bag-of-words counts for already-normalized text
    pub fn term_frequencies(&self, normalized_text: &str) -> SparseVector {
        self.vocabulary.doc2bow(normalized_text.split_whitespace())
    }

    /// Semantic vector for already-normalized text.
    ///
    /// Text with no known terms folds in to the all-zero vector.
    pub fn fold_in(&self, normalized_text: &str) -> SemanticVector {
        let bow = self.term_frequencies(normalized_text);
        let weighted = self.weighting.transform(&bow);
        let raw = self.projection.project(&weighted);
        SemanticVector::from_raw(&raw)
    }
}
